//! Configuration loading from TOML files.
//!
//! Lookup order:
//! 1. `--config <path>` on the command line
//! 2. `$OLSIM_CONFIG` environment variable
//! 3. Built-in defaults (everything is optional)
//!
//! Command-line flags override whatever the file sets.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use olsim_shared::{SampleSizeSweep, SimulationConfig};
use serde::Deserialize;

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub model: ModelConfig,
    pub sweep: SampleSizeSweep,
    pub run: RunConfig,
}

/// Model parameters. Unset fields fall back to the built-in defaults.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ModelConfig {
    pub n: Option<usize>,
    pub beta0: Option<f64>,
    pub beta1: Option<f64>,
    pub sigma: Option<f64>,
    pub x_mean: Option<f64>,
    pub x_sd: Option<f64>,
    pub replications: Option<usize>,
    /// Fixed seed. Absent means a fresh random seed per invocation.
    pub seed: Option<u64>,
}

impl ModelConfig {
    /// Layers `overrides` on top of `self`; set fields in `overrides` win.
    pub fn merged(&self, overrides: &ModelConfig) -> ModelConfig {
        ModelConfig {
            n: overrides.n.or(self.n),
            beta0: overrides.beta0.or(self.beta0),
            beta1: overrides.beta1.or(self.beta1),
            sigma: overrides.sigma.or(self.sigma),
            x_mean: overrides.x_mean.or(self.x_mean),
            x_sd: overrides.x_sd.or(self.x_sd),
            replications: overrides.replications.or(self.replications),
            seed: overrides.seed.or(self.seed),
        }
    }

    /// Fills unset fields from the defaults, using `fallback_seed` when no seed was given.
    pub fn resolve(&self, fallback_seed: u64) -> SimulationConfig {
        let defaults = SimulationConfig::default();
        SimulationConfig {
            n: self.n.unwrap_or(defaults.n),
            beta0: self.beta0.unwrap_or(defaults.beta0),
            beta1: self.beta1.unwrap_or(defaults.beta1),
            sigma: self.sigma.unwrap_or(defaults.sigma),
            x_mean: self.x_mean.unwrap_or(defaults.x_mean),
            x_sd: self.x_sd.unwrap_or(defaults.x_sd),
            replications: self.replications.unwrap_or(defaults.replications),
            seed: self.seed.unwrap_or(fallback_seed),
        }
    }
}

/// Execution settings.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RunConfig {
    /// Worker threads; 0 means automatic.
    pub workers: usize,
}

impl Config {
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        match config_path(explicit) {
            Some(path) => Self::from_file(&path),
            None => Ok(Self::default()),
        }
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("cannot read config file {}", path.display()))?;
        toml::from_str(&content)
            .with_context(|| format!("invalid config file {}", path.display()))
    }
}

fn config_path(explicit: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(path.to_path_buf());
    }
    std::env::var_os("OLSIM_CONFIG").map(PathBuf::from)
}
