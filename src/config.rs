use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

/// Top-level rann configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RannConfig {
    /// Global RNG seed.
    #[serde(default)]
    pub seed: Option<u64>,

    /// Search parameter defaults.
    #[serde(default)]
    pub search: SearchToml,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SearchToml {
    #[serde(default = "default_k")]
    pub k: usize,
    #[serde(default = "default_tau")]
    pub tau: f64,
    #[serde(default = "default_alpha")]
    pub alpha: f64,
}

impl Default for SearchToml {
    fn default() -> Self {
        Self {
            k: default_k(),
            tau: default_tau(),
            alpha: default_alpha(),
        }
    }
}

fn default_k() -> usize {
    1
}
fn default_tau() -> f64 {
    rann_sizing::DEFAULT_TAU
}
fn default_alpha() -> f64 {
    rann_sizing::DEFAULT_ALPHA
}

/// Loads the TOML config at `path`, or the defaults when no path is given.
pub fn load(path: Option<&Path>) -> Result<RannConfig> {
    let Some(path) = path else {
        return Ok(RannConfig::default());
    };
    let toml_str = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config file: {}", path.display()))?;
    toml::from_str(&toml_str)
        .with_context(|| format!("failed to parse TOML config: {}", path.display()))
}
