use chi_rng::{Distribution, DistributionError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Config file to use instead of command line seeds
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
#[serde(default)]
pub struct CliConfig {
    /// Words passed to `put`, in order
    pub seeds: Vec<u64>,
    /// Sampler used by `sample` when `--dist` is not given
    pub distribution: Option<Distribution>,
}

impl CliConfig {
    /// Load and validate a JSON config file
    pub fn load(path: &Path) -> Result<Self, Box<dyn std::error::Error>> {
        let text = fs::read_to_string(path)
            .map_err(|e| format!("Unable to read config file {}: {}", path.display(), e))?;
        let config: CliConfig = serde_json::from_str(&text)
            .map_err(|e| format!("Could not parse json config file: {}", e))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), DistributionError> {
        match &self.distribution {
            Some(dist) => dist.validate(),
            None => Ok(()),
        }
    }
}
