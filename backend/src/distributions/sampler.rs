//! Parameterized distributions
//!
//! # Example
//!
//! ```
//! use chi_rng::{Distribution, Engine};
//!
//! let mut engine = Engine::with_seed(42);
//! let dist: Distribution =
//!     serde_json::from_str(r#"{"type": "Exponential", "rate": 0.5}"#).unwrap();
//! dist.validate().unwrap();
//!
//! let wait = dist.sample(&mut engine);
//! assert!(wait >= 0.0);
//! ```

use crate::rng::Engine;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Distribution configuration errors
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DistributionError {
    #[error("Invalid parameter {name}: {value}")]
    InvalidParameter { name: &'static str, value: f64 },

    #[error("Empty range: low {low} must be less than high {high}")]
    EmptyRange { low: f64, high: f64 },
}

/// A real-valued distribution with its parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Distribution {
    /// Uniform on `[low, high)`
    Uniform { low: f64, high: f64 },

    /// Triangular on `[low, high]` peaking at `mode`
    Triangular { low: f64, mode: f64, high: f64 },

    /// Exponential with rate parameter (mean `1 / rate`)
    Exponential { rate: f64 },

    /// Normal with mean and standard deviation
    Normal { mean: f64, std_dev: f64 },

    /// Log-normal; `mean` and `std_dev` describe the underlying normal
    LogNormal { mean: f64, std_dev: f64 },
}

fn finite(name: &'static str, value: f64) -> Result<(), DistributionError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(DistributionError::InvalidParameter { name, value })
    }
}

fn ordered(low: f64, high: f64) -> Result<(), DistributionError> {
    if low < high {
        Ok(())
    } else {
        Err(DistributionError::EmptyRange { low, high })
    }
}

impl Distribution {
    /// Check that the parameters describe a proper distribution.
    pub fn validate(&self) -> Result<(), DistributionError> {
        match *self {
            Distribution::Uniform { low, high } => {
                finite("low", low)?;
                finite("high", high)?;
                ordered(low, high)
            }
            Distribution::Triangular { low, mode, high } => {
                finite("low", low)?;
                finite("mode", mode)?;
                finite("high", high)?;
                ordered(low, high)?;
                if mode < low || mode > high {
                    return Err(DistributionError::InvalidParameter {
                        name: "mode",
                        value: mode,
                    });
                }
                Ok(())
            }
            Distribution::Exponential { rate } => {
                finite("rate", rate)?;
                if rate <= 0.0 {
                    return Err(DistributionError::InvalidParameter {
                        name: "rate",
                        value: rate,
                    });
                }
                Ok(())
            }
            Distribution::Normal { mean, std_dev } | Distribution::LogNormal { mean, std_dev } => {
                finite("mean", mean)?;
                finite("std_dev", std_dev)?;
                if std_dev < 0.0 {
                    return Err(DistributionError::InvalidParameter {
                        name: "std_dev",
                        value: std_dev,
                    });
                }
                Ok(())
            }
        }
    }

    /// Draw one value. Parameters are assumed valid (see [`Distribution::validate`]).
    pub fn sample(&self, engine: &mut Engine) -> f64 {
        match *self {
            Distribution::Uniform { low, high } => low + (high - low) * engine.one(),
            Distribution::Triangular { low, mode, high } => {
                let u = engine.one();
                let width = high - low;
                let left = mode - low;
                if u * width < left {
                    low + (u * width * left).sqrt()
                } else {
                    high - ((1.0 - u) * width * (high - mode)).sqrt()
                }
            }
            Distribution::Exponential { rate } => engine.exp() / rate,
            Distribution::Normal { mean, std_dev } => {
                // second value of the pair is deliberately discarded
                let (z, _) = engine.normal();
                mean + std_dev * z
            }
            Distribution::LogNormal { mean, std_dev } => {
                let (z, _) = engine.normal();
                (mean + std_dev * z).exp()
            }
        }
    }

    /// Theoretical mean, if finite.
    pub fn mean(&self) -> f64 {
        match *self {
            Distribution::Uniform { low, high } => (low + high) / 2.0,
            Distribution::Triangular { low, mode, high } => (low + mode + high) / 3.0,
            Distribution::Exponential { rate } => 1.0 / rate,
            Distribution::Normal { mean, .. } => mean,
            Distribution::LogNormal { mean, std_dev } => (mean + std_dev * std_dev / 2.0).exp(),
        }
    }
}
