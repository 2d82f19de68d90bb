//! Generator state and the two primitive operations
//!
//! The engine owns exactly three 64-bit words. `put` absorbs a word into the
//! first one and permutes; `next64` emits the first word and permutes. Every
//! derived operation in this crate is built from these two.
//!
//! # Ownership
//!
//! An engine has no internal locking. Give each thread its own instance (see
//! [`crate::global`] for a per-thread convenience instance).

use super::mix;
use serde::{Deserialize, Serialize};

/// Raw engine state, exposed for checkpointing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct EngineState {
    pub a: u64,
    pub b: u64,
    pub c: u64,
}

/// Compact, fast, deterministic random number generator.
///
/// Engines with the same `put` sequence produce the same results for the
/// same call sequence:
///
/// ```
/// use chi_rng::Engine;
///
/// let mut e1 = Engine::new();
/// let mut e2 = Engine::new();
/// for e in [&mut e1, &mut e2] {
///     e.put(42);
///     e.put(7);
/// }
///
/// assert_eq!(e1.next64(), e2.next64());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Engine {
    a: u64,
    b: u64,
    c: u64,
}

impl Engine {
    /// Create an engine in the all-zero state.
    pub const fn new() -> Self {
        Self { a: 0, b: 0, c: 0 }
    }

    /// Create an engine seeded with a single word.
    ///
    /// Equivalent to `Engine::new()` followed by `put(seed)`.
    pub fn with_seed(seed: u64) -> Self {
        let mut engine = Self::new();
        engine.put(seed);
        engine
    }

    /// Restore an engine from a previously captured state.
    pub const fn from_state(state: EngineState) -> Self {
        Self {
            a: state.a,
            b: state.b,
            c: state.c,
        }
    }

    /// Current state (for checkpointing/replay).
    pub const fn state(&self) -> EngineState {
        EngineState {
            a: self.a,
            b: self.b,
            c: self.c,
        }
    }

    /// Absorb `word` into the engine.
    ///
    /// May be called any number of times; each distinct sequence of words
    /// yields a distinct engine.
    #[inline]
    pub fn put(&mut self, word: u64) {
        let (a, b, c) = mix::permute(self.a ^ word, self.b, self.c);
        self.a = a;
        self.b = b;
        self.c = c;
    }

    /// Generate the next 64 random bits.
    ///
    /// Note that `next64() % n` is not uniform; use [`Engine::modn`] instead.
    #[inline]
    pub fn next64(&mut self) -> u64 {
        let out = self.a;
        let (a, b, c) = mix::permute(self.a, self.b, self.c);
        self.a = a;
        self.b = b;
        self.c = c;
        out
    }

    /// Return to the all-zero state, undoing any seeding or randomization.
    pub fn reset(&mut self) {
        self.a = 0;
        self.b = 0;
        self.c = 0;
    }
}
