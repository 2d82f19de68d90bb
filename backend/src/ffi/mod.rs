//! Python bindings
//!
//! Exposes [`Engine`](crate::Engine) to Python as `chi_rng.Engine`.

pub mod engine;
