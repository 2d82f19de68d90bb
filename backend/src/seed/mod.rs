//! Self-seeding
//!
//! Folds process and environment data into an engine so that instances
//! differ within a process, across processes on one machine, and across
//! machines. This is best-effort uniqueness, not unpredictability: several
//! inputs (clock, pid) are easy to guess.

mod entropy;

use crate::rng::Engine;
use log::debug;

/// Counts words absorbed into an engine.
pub(crate) struct Absorber<'a> {
    engine: &'a mut Engine,
    words: usize,
}

impl<'a> Absorber<'a> {
    pub(crate) fn new(engine: &'a mut Engine) -> Self {
        Self { engine, words: 0 }
    }

    pub(crate) fn word(&mut self, word: u64) {
        self.engine.put(word);
        self.words += 1;
    }

    /// Length prefix, then 8-byte little-endian chunks (last one zero padded).
    pub(crate) fn bytes(&mut self, bytes: &[u8]) {
        self.word(bytes.len() as u64);
        for chunk in bytes.chunks(8) {
            let mut word = [0u8; 8];
            word[..chunk.len()].copy_from_slice(chunk);
            self.word(u64::from_le_bytes(word));
        }
    }

    pub(crate) fn words(&self) -> usize {
        self.words
    }
}

impl Engine {
    /// Absorb an arbitrary byte string, length-prefixed.
    ///
    /// ```
    /// use chi_rng::Engine;
    ///
    /// let mut a = Engine::new();
    /// let mut b = Engine::new();
    /// a.put_bytes(b"ab");
    /// b.put_bytes(b"a");
    /// b.put_bytes(b"b");
    /// assert_ne!(a, b);
    /// ```
    pub fn put_bytes(&mut self, bytes: &[u8]) {
        Absorber::new(self).bytes(bytes);
    }

    /// Randomize the engine from process and environment data.
    ///
    /// Results are not reproducible until [`Engine::reset`] is called.
    pub fn randomize(&mut self) {
        let mut absorber = Absorber::new(self);
        entropy::absorb_all(&mut absorber);
        debug!("randomized engine with {} words", absorber.words());
    }
}
