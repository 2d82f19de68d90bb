//! Byte buffer filling
//!
//! Words are written little-endian so a given engine produces the same bytes
//! on every platform.

use super::Engine;
use std::io;

impl Engine {
    /// Fill `buf` with random bytes, 8 at a time.
    ///
    /// A trailing 1 to 7 bytes consume one more word, of which only the
    /// low-order bytes are used.
    pub fn fill(&mut self, buf: &mut [u8]) {
        let mut chunks = buf.chunks_exact_mut(8);
        for chunk in &mut chunks {
            chunk.copy_from_slice(&self.next64().to_le_bytes());
        }

        let rest = chunks.into_remainder();
        if !rest.is_empty() {
            let word = self.next64().to_le_bytes();
            rest.copy_from_slice(&word[..rest.len()]);
        }
    }
}

/// Reading never fails and always fills the whole buffer.
impl io::Read for Engine {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.fill(buf);
        Ok(buf.len())
    }
}
