//! State permutation
//!
//! One round is an affine map on `(b, c)` followed by the chi map
//! `x ^ (y & !z)` applied cyclically, with the output words rotated
//! `abc -> bca`. Every step is invertible, so a round is a bijection on the
//! 192-bit state. Three rounds are chained with masks of increasing period.

/// XOR masks: equal amount of 1s & 0s with periods 2, 4, 8, 16, 32, 64
pub(crate) const XM1: u64 = 0x5555_5555_5555_5555;
pub(crate) const XM2: u64 = 0x3333_3333_3333_3333;
pub(crate) const XM3: u64 = 0x3535_3535_3535_3535;
pub(crate) const XM4: u64 = 0x3355_3355_3355_3355;
pub(crate) const XM5: u64 = 0x3333_5555_3333_5555;
pub(crate) const XM6: u64 = 0x3333_3333_5555_5555;

/// Rotation amount (64 / 3)
pub(crate) const ROTATION: u32 = 21;

/// A single round with masks `(u, v)`.
#[inline(always)]
pub(crate) fn round(a: u64, b: u64, c: u64, u: u64, v: u64) -> (u64, u64, u64) {
    let b = (b ^ u).rotate_right(ROTATION);
    let c = (c ^ v).rotate_left(ROTATION);

    (b ^ (c & !a), c ^ (a & !b), a ^ (b & !c))
}

/// Full permutation used by the engine: three chained rounds.
#[inline(always)]
pub(crate) fn permute(a: u64, b: u64, c: u64) -> (u64, u64, u64) {
    let (a, b, c) = round(a, b, c, XM1, XM2);
    let (a, b, c) = round(a, b, c, XM3, XM4);
    round(a, b, c, XM5, XM6)
}
