//! Real-valued distributions derived from engine output
//!
//! - **unit**: parameter-free variates on [`Engine`](crate::Engine)
//!   (`one`, `one_r`, `two`, `two_r`, `tri`, `tri2`, `exp`, `normal`)
//! - **sampler**: [`Distribution`], a serializable, parameterized sampler
//!   built on the unit variates

mod sampler;
mod unit;

pub use sampler::{Distribution, DistributionError};
