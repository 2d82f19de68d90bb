//! Tests for self-seeding

use chi_rng::{global, Engine};
use std::collections::HashSet;
use std::thread;

#[test]
fn test_randomized_engines_differ_in_process() {
    let mut seen = HashSet::new();
    for _ in 0..100 {
        let mut engine = Engine::new();
        engine.randomize();
        assert!(seen.insert(engine.next64()), "randomized engines collided");
    }
}

#[test]
fn test_randomize_differs_from_zero_stream() {
    let mut zero = Engine::new();
    let mut engine = Engine::new();
    engine.randomize();
    let a: Vec<u64> = (0..4).map(|_| zero.next64()).collect();
    let b: Vec<u64> = (0..4).map(|_| engine.next64()).collect();
    assert_ne!(a, b);
}

#[test]
fn test_randomize_then_reset_is_deterministic() {
    let mut e1 = Engine::new();
    let mut e2 = Engine::new();
    e1.randomize();
    e2.randomize();
    e1.reset();
    e2.reset();
    e1.put(42);
    e2.put(42);
    assert_eq!(e1.next64(), e2.next64());
}

#[test]
fn test_randomized_engines_differ_across_threads() {
    let handles: Vec<_> = (0..8)
        .map(|_| {
            thread::spawn(|| {
                let mut engine = Engine::new();
                engine.randomize();
                engine.next64()
            })
        })
        .collect();

    let values: HashSet<u64> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert_eq!(values.len(), 8);
}

#[test]
fn test_put_bytes_is_deterministic() {
    let mut e1 = Engine::new();
    let mut e2 = Engine::new();
    e1.put_bytes(b"simulation run 17");
    e2.put_bytes(b"simulation run 17");
    assert_eq!(e1.next64(), e2.next64());
}

#[test]
fn test_global_with_gives_thread_engine() {
    global::reset();
    global::put(42);
    global::put(7);
    let from_global = global::with(|e| e.next64());

    let mut engine = Engine::new();
    engine.put(42);
    engine.put(7);
    assert_eq!(from_global, engine.next64());
}
