//! Unbiased bounded integers and permutations

use super::Engine;

/// Largest number of entries [`Engine::permute`] will fill.
pub const MAX_PERMUTATION_LEN: u64 = 1 << 32;

impl Engine {
    /// Uniformly selected integer in `0..n` for `n >= 2`.
    ///
    /// Returns `n - 1` for `n < 2`: `modn(1) == 0` and, by convention,
    /// `modn(0) == u64::MAX`. Neither consumes any output.
    ///
    /// ```
    /// use chi_rng::Engine;
    ///
    /// let mut engine = Engine::with_seed(12345);
    /// let die = engine.modn(6) + 1;
    /// assert!((1..=6).contains(&die));
    /// assert_eq!(engine.modn(0), u64::MAX);
    /// ```
    #[inline]
    pub fn modn(&mut self, n: u64) -> u64 {
        match n {
            0 => return u64::MAX,
            1 => return 0,
            _ => {}
        }

        let mask = n - 1;
        if n & mask == 0 {
            // power of 2, masking is already uniform
            return self.next64() & mask;
        }

        let mut v = self.next64();

        if n > 1 << 63 {
            // values >= n have probability < 1/2
            while v >= n {
                v = self.next64();
            }
            return v;
        }

        // only draws in the top n values can fall in the biased band,
        // which mostly avoids one division
        if v > u64::MAX - n {
            // largest multiple of n < 2^64
            let last = u64::MAX - u64::MAX % n;
            while v >= last {
                v = self.next64();
            }
        }
        v % n
    }

    /// Fill `out` with a uniformly selected permutation of `0..out.len()`.
    ///
    /// At most [`MAX_PERMUTATION_LEN`] entries are written; anything beyond
    /// that is left untouched.
    ///
    /// ```
    /// use chi_rng::Engine;
    ///
    /// let mut engine = Engine::with_seed(3);
    /// let mut order = [0u32; 5];
    /// engine.permute(&mut order);
    ///
    /// let mut sorted = order;
    /// sorted.sort_unstable();
    /// assert_eq!(sorted, [0, 1, 2, 3, 4]);
    /// ```
    pub fn permute(&mut self, out: &mut [u32]) {
        if out.is_empty() {
            return;
        }
        let n = (out.len() as u64).min(MAX_PERMUTATION_LEN);

        out[0] = 0;
        for i in 1..n {
            let k = self.modn(i + 1);
            if k < i {
                out[i as usize] = out[k as usize];
            }
            out[k as usize] = i as u32;
        }
    }
}
