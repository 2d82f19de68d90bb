//! Per-thread convenience instance
//!
//! Free functions forwarding to one [`Engine`] per thread, created and
//! randomized on first use in that thread. Each thread owns its engine, so
//! no locking is involved.
//!
//! Prefer passing an explicit [`Engine`] where reproducibility matters; the
//! convenience instance starts randomized.
//!
//! ```
//! use chi_rng::global;
//!
//! let roll = global::modn(6) + 1;
//! assert!((1..=6).contains(&roll));
//!
//! global::reset();
//! let first = global::next64();
//! global::reset();
//! assert_eq!(global::next64(), first);
//! ```

use crate::rng::Engine;
use std::cell::RefCell;

thread_local! {
    static ENGINE: RefCell<Engine> = RefCell::new(randomized());
}

fn randomized() -> Engine {
    let mut engine = Engine::new();
    engine.randomize();
    engine
}

/// Run `f` with this thread's engine.
///
/// # Panics
/// Panics if called again from inside `f`.
pub fn with<R>(f: impl FnOnce(&mut Engine) -> R) -> R {
    ENGINE.with(|cell| f(&mut *cell.borrow_mut()))
}

/// Absorb `word` into this thread's engine.
pub fn put(word: u64) {
    with(|e| e.put(word))
}

/// Next 64 random bits.
pub fn next64() -> u64 {
    with(Engine::next64)
}

/// Uniform integer in `0..n`; see [`Engine::modn`] for `n < 2`.
pub fn modn(n: u64) -> u64 {
    with(|e| e.modn(n))
}

/// Fill `out` with a random permutation of `0..out.len()`.
pub fn permute(out: &mut [u32]) {
    with(|e| e.permute(out))
}

/// Fill `buf` with random bytes.
pub fn fill(buf: &mut [u8]) {
    with(|e| e.fill(buf))
}

/// Uniform in `[0, 1)`.
pub fn one() -> f64 {
    with(Engine::one)
}

/// Uniform in `[-1, 1)`.
pub fn two() -> f64 {
    with(Engine::two)
}

/// Exponential with mean 1.
pub fn exp() -> f64 {
    with(Engine::exp)
}

/// Two independent standard normal values.
pub fn normal() -> (f64, f64) {
    with(Engine::normal)
}

/// Reset this thread's engine to the zero state.
pub fn reset() {
    with(Engine::reset)
}

/// Re-randomize this thread's engine.
pub fn randomize() {
    with(Engine::randomize)
}
