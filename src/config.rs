use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

/// Top-level walker configuration.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WalkerConfig {
    /// Global RNG seed.
    #[serde(default)]
    pub seed: Option<u64>,

    /// Model settings.
    #[serde(default)]
    pub model: ModelToml,

    /// Simulation settings.
    #[serde(default)]
    pub simulate: SimulateToml,
}

#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct ModelToml {
    /// Row-major transition weights; must be square and at least 2x2.
    #[serde(default)]
    pub weights: Vec<Vec<f64>>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SimulateToml {
    /// Number of steps to attempt.
    #[serde(default = "default_steps")]
    pub steps: u64,
}

impl Default for SimulateToml {
    fn default() -> Self {
        Self {
            steps: default_steps(),
        }
    }
}

fn default_steps() -> u64 {
    100
}

/// Loads and parses a TOML configuration file.
pub fn load(path: &Path) -> Result<WalkerConfig> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read config: {}", path.display()))?;
    toml::from_str(&text).with_context(|| format!("failed to parse config: {}", path.display()))
}
