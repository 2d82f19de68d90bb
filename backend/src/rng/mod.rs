//! Deterministic random number generation
//!
//! A compact (24 byte) generator built on a sponge-style permutation of three
//! 64-bit words. Not suitable for cryptographic use.
//!
//! # Components
//!
//! - **mix**: the state permutation (affine step + chi map)
//! - **engine**: [`Engine`], owning the state; `put`, `next64`, `reset`
//! - **bounded**: unbiased `modn` and `permute`
//! - **fill**: byte buffer filling and `std::io::Read`
//!
//! # Determinism
//!
//! Same `put` sequence + same call sequence → same output. This holds for every
//! operation in this crate, including the derived distributions.

mod bounded;
mod engine;
mod fill;
pub(crate) mod mix;

pub use bounded::MAX_PERMUTATION_LEN;
pub use engine::{Engine, EngineState};
