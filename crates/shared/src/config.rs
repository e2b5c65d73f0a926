use serde::{Deserialize, Serialize};

use crate::error::SimError;

// Baseline model parameters
pub const DEFAULT_N: usize = 30;
pub const DEFAULT_BETA0: f64 = 2.0;
pub const DEFAULT_BETA1: f64 = 3.0;
pub const DEFAULT_SIGMA: f64 = 1.0;
pub const DEFAULT_X_MEAN: f64 = 1.0;
pub const DEFAULT_X_SD: f64 = 1.0;
pub const DEFAULT_REPLICATIONS: usize = 1_000;
pub const DEFAULT_SWEEP_SIZES: [usize; 4] = [30, 60, 120, 240];

/// Seed blocks handed to successive sample sizes in a sweep are this far apart,
/// so no two sizes ever share a replication stream.
pub const SWEEP_SEED_SHIFT: u32 = 32;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimulationConfig {
    pub n: usize,
    pub beta0: f64,
    pub beta1: f64,
    pub sigma: f64,
    pub x_mean: f64,
    pub x_sd: f64,
    pub replications: usize,
    pub seed: u64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            n: DEFAULT_N,
            beta0: DEFAULT_BETA0,
            beta1: DEFAULT_BETA1,
            sigma: DEFAULT_SIGMA,
            x_mean: DEFAULT_X_MEAN,
            x_sd: DEFAULT_X_SD,
            replications: DEFAULT_REPLICATIONS,
            seed: 0,
        }
    }
}

impl SimulationConfig {
    /// Rejects configurations that cannot produce a well-defined fit.
    /// Runs before any random draw.
    pub fn validate(&self) -> Result<(), SimError> {
        if self.n < 2 {
            return Err(SimError::InvalidConfig(format!(
                "sample size must be at least 2, got {}",
                self.n
            )));
        }
        if self.replications < 1 {
            return Err(SimError::InvalidConfig(
                "replication count must be at least 1, got 0".to_string(),
            ));
        }
        if !(self.sigma.is_finite() && self.sigma > 0.0) {
            return Err(SimError::InvalidConfig(format!(
                "noise standard deviation must be finite and positive, got {}",
                self.sigma
            )));
        }
        if !(self.x_sd.is_finite() && self.x_sd >= 0.0) {
            return Err(SimError::InvalidConfig(format!(
                "predictor standard deviation must be finite and non-negative, got {}",
                self.x_sd
            )));
        }
        for (name, value) in [
            ("beta0", self.beta0),
            ("beta1", self.beta1),
            ("x_mean", self.x_mean),
        ] {
            if !value.is_finite() {
                return Err(SimError::InvalidConfig(format!(
                    "{name} must be finite, got {value}"
                )));
            }
        }
        Ok(())
    }

    /// Seed for the `index`-th replication of this configuration.
    #[inline]
    pub fn replication_seed(&self, index: usize) -> u64 {
        self.seed.wrapping_add(index as u64)
    }
}

/// Sample sizes to sweep, everything else held at the base configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SampleSizeSweep {
    pub sizes: Vec<usize>,
}

impl Default for SampleSizeSweep {
    fn default() -> Self {
        Self {
            sizes: DEFAULT_SWEEP_SIZES.to_vec(),
        }
    }
}

impl SampleSizeSweep {
    pub fn new(sizes: Vec<usize>) -> Self {
        Self { sizes }
    }

    /// Config for the `index`-th size, or `None` past the end of the sweep.
    pub fn apply(&self, base: &SimulationConfig, index: usize) -> Option<SimulationConfig> {
        let n = *self.sizes.get(index)?;
        Some(SimulationConfig {
            n,
            seed: base
                .seed
                .wrapping_add((index as u64) << SWEEP_SEED_SHIFT),
            ..base.clone()
        })
    }

    pub fn configs(&self, base: &SimulationConfig) -> Vec<SimulationConfig> {
        (0..self.sizes.len())
            .filter_map(|i| self.apply(base, i))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert!(SimulationConfig::default().validate().is_ok());
    }

    #[test]
    fn rejects_out_of_range_parameters() {
        let cases = [
            SimulationConfig { n: 1, ..Default::default() },
            SimulationConfig { n: 0, ..Default::default() },
            SimulationConfig { replications: 0, ..Default::default() },
            SimulationConfig { sigma: 0.0, ..Default::default() },
            SimulationConfig { sigma: -1.0, ..Default::default() },
            SimulationConfig { sigma: f64::NAN, ..Default::default() },
            SimulationConfig { x_sd: -0.5, ..Default::default() },
            SimulationConfig { beta1: f64::INFINITY, ..Default::default() },
        ];
        for config in cases {
            assert!(
                matches!(config.validate(), Err(SimError::InvalidConfig(_))),
                "expected rejection for {config:?}"
            );
        }
    }

    #[test]
    fn zero_predictor_spread_passes_validation() {
        // Degenerate predictors are reported by the fit, not the config check.
        let config = SimulationConfig { x_sd: 0.0, ..Default::default() };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn sweep_assigns_disjoint_seed_blocks() {
        let base = SimulationConfig { seed: 7, ..Default::default() };
        let configs = SampleSizeSweep::new(vec![30, 60, 120]).configs(&base);

        assert_eq!(configs.iter().map(|c| c.n).collect::<Vec<_>>(), vec![30, 60, 120]);
        assert_eq!(configs[0].seed, 7);
        assert_eq!(configs[1].seed, 7 + (1 << 32));
        assert_eq!(configs[2].seed, 7 + (2 << 32));
        for config in &configs {
            assert_eq!(config.beta1, base.beta1);
            assert_eq!(config.replications, base.replications);
        }
    }

    #[test]
    fn sweep_apply_past_end_is_none() {
        let base = SimulationConfig::default();
        let sweep = SampleSizeSweep::new(vec![30, 60]);
        assert_eq!(sweep.apply(&base, 1).map(|c| c.n), Some(60));
        assert!(sweep.apply(&base, 2).is_none());
        assert!(SampleSizeSweep::new(vec![]).apply(&base, 0).is_none());
        assert!(SampleSizeSweep::new(vec![]).configs(&base).is_empty());
    }
}
