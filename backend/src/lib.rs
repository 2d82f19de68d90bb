//! chi-rng - Fast Deterministic Random Numbers
//!
//! A non-cryptographic random number engine built on a sponge-style
//! permutation, with unbiased bounded integers, permutations, byte filling,
//! and real-valued distributions derived from it.
//!
//! # Architecture
//!
//! - **rng**: the engine (`put`, `next64`, `reset`), `modn`, `permute`, `fill`
//! - **distributions**: unit variates and parameterized samplers
//! - **seed**: self-seeding from process/environment data (`randomize`)
//! - **checkpoint**: state save/restore
//! - **global**: per-thread convenience instance
//!
//! # Critical Invariants
//!
//! 1. Same `put` sequence + same call sequence → same output
//! 2. `reset` always returns to the deterministic zero state
//! 3. An engine is single-owner; it has no internal locking

// Module declarations
pub mod checkpoint;
pub mod distributions;
pub mod global;
pub mod rng;
mod seed;

// Re-exports for convenience
pub use checkpoint::{CheckpointError, EngineSnapshot};
pub use distributions::{Distribution, DistributionError};
pub use rng::{Engine, EngineState, MAX_PERMUTATION_LEN};

// FFI module (when feature enabled)
#[cfg(feature = "pyo3")]
pub mod ffi;

// PyO3 exports (when feature enabled)
#[cfg(feature = "pyo3")]
use pyo3::prelude::*;

#[cfg(feature = "pyo3")]
#[pymodule]
fn chi_rng(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<ffi::engine::PyEngine>()?;
    Ok(())
}
