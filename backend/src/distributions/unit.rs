//! Unit variates
//!
//! Uniform variates use exactly 53 random bits, the width of an `f64`
//! mantissa, so every output is exactly representable and no rounding bias
//! is introduced.

use crate::rng::Engine;

/// Number of random bits in a uniform variate.
const MANTISSA_BITS: u32 = 53;

/// Scale an integer in `[-2^53, 2^53]` to `[-1, 1]`. Exact for that range.
#[inline(always)]
fn scale_mantissa(bits: i64) -> f64 {
    const INV: f64 = 1.0 / (1u64 << MANTISSA_BITS) as f64;
    bits as f64 * INV
}

impl Engine {
    /// Uniformly distributed number in `[0, 1)`.
    #[inline]
    pub fn one(&mut self) -> f64 {
        scale_mantissa((self.next64() >> 11) as i64) // [0, 2^53)
    }

    /// Uniformly distributed number in `(0, 1]`.
    #[inline]
    pub fn one_r(&mut self) -> f64 {
        scale_mantissa((self.next64() >> 11) as i64 + 1) // (0, 2^53]
    }

    /// Uniformly distributed number in `[-1, 1)`.
    #[inline]
    pub fn two(&mut self) -> f64 {
        scale_mantissa(self.next64() as i64 >> 10) // [-2^53, 2^53)
    }

    /// Uniformly distributed number in `(-1, 1]`.
    #[inline]
    pub fn two_r(&mut self) -> f64 {
        scale_mantissa((self.next64() as i64 >> 10) + 1) // (-2^53, 2^53]
    }

    /// Triangular distribution on `(-1, 1)` with mode 0.
    ///
    /// Difference of two uniforms; mean 0, standard deviation `1/sqrt(6)`.
    #[inline]
    pub fn tri(&mut self) -> f64 {
        self.one() - self.one()
    }

    /// Two independent [`Engine::tri`] values.
    #[inline]
    pub fn tri2(&mut self) -> (f64, f64) {
        (self.tri(), self.tri())
    }

    /// Exponentially distributed number with mean 1.
    ///
    /// Inverse CDF on `(0, 1]`, so the logarithm is always finite.
    #[inline]
    pub fn exp(&mut self) -> f64 {
        -self.one_r().ln()
    }

    /// Two independent, normally distributed numbers (mean 0, variance 1).
    ///
    /// Marsaglia's polar method. Points are accepted on `0 < s <= 1`; the
    /// loop has no iteration cap, capping it would bias the tails.
    pub fn normal(&mut self) -> (f64, f64) {
        loop {
            let x = self.two();
            let y = self.two();
            let s = x * x + y * y;
            if s > 0.0 && s <= 1.0 {
                let k = (-2.0 * s.ln() / s).sqrt();
                return (k * x, k * y);
            }
        }
    }
}
