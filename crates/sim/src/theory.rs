//! Sampling moments of the OLS estimators implied by the simulated model.
//!
//! With `x ~ Normal(mu, sd)` drawn fresh each replication, `Sxx / sd^2` is
//! chi-squared with `n - 1` degrees of freedom and independent of `x_bar`, so
//! `E[1 / Sxx] = 1 / ((n - 3) sd^2)`. The variances below average the usual
//! conditional formulas over that distribution.

use olsim_shared::{Parameter, SimulationConfig};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TheoreticalMoment {
    pub parameter: Parameter,
    pub mean: f64,
    /// `None` when the variance is infinite or undefined (`n <= 3` or `x_sd == 0`).
    pub variance: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TheoreticalMoments {
    pub sample_size: usize,
    pub beta0_hat: TheoreticalMoment,
    pub beta1_hat: TheoreticalMoment,
}

impl TheoreticalMoments {
    pub fn get(&self, parameter: Parameter) -> &TheoreticalMoment {
        match parameter {
            Parameter::Beta0Hat => &self.beta0_hat,
            Parameter::Beta1Hat => &self.beta1_hat,
        }
    }
}

pub fn expected_moments(config: &SimulationConfig) -> TheoreticalMoments {
    let n = config.n as f64;
    let sd2 = config.x_sd * config.x_sd;
    let sigma2 = config.sigma * config.sigma;

    let inv_sxx = if config.n > 3 && sd2 > 0.0 {
        Some(1.0 / ((n - 3.0) * sd2))
    } else {
        None
    };

    let slope_var = inv_sxx.map(|e| sigma2 * e);
    let intercept_var = inv_sxx.map(|e| {
        let x_bar_sq = config.x_mean * config.x_mean + sd2 / n;
        sigma2 * (1.0 / n + x_bar_sq * e)
    });

    TheoreticalMoments {
        sample_size: config.n,
        beta0_hat: TheoreticalMoment {
            parameter: Parameter::Beta0Hat,
            mean: config.beta0,
            variance: intercept_var,
        },
        beta1_hat: TheoreticalMoment {
            parameter: Parameter::Beta1Hat,
            mean: config.beta1,
            variance: slope_var,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::expected_moments;
    use olsim_shared::{Parameter, SimulationConfig};

    #[test]
    fn slope_variance_matches_closed_form() {
        let config = SimulationConfig { n: 103, sigma: 2.0, x_sd: 0.5, ..SimulationConfig::default() };
        let moments = expected_moments(&config);
        // 4 / (100 * 0.25)
        let var = moments.get(Parameter::Beta1Hat).variance.unwrap();
        assert!((var - 0.16).abs() < 1e-12);
        assert_eq!(moments.beta1_hat.mean, config.beta1);
    }

    #[test]
    fn intercept_variance_with_centered_predictor() {
        let config = SimulationConfig { n: 13, x_mean: 0.0, ..SimulationConfig::default() };
        // 1/13 + (1/13) / 10
        let expected = 1.0 / 13.0 + (1.0 / 13.0) / 10.0;
        let var = expected_moments(&config).beta0_hat.variance.unwrap();
        assert!((var - expected).abs() < 1e-12);
    }

    #[test]
    fn small_samples_have_no_finite_variance() {
        let config = SimulationConfig { n: 3, ..SimulationConfig::default() };
        let moments = expected_moments(&config);
        assert!(moments.beta0_hat.variance.is_none());
        assert!(moments.beta1_hat.variance.is_none());

        let flat = SimulationConfig { x_sd: 0.0, ..SimulationConfig::default() };
        assert!(expected_moments(&flat).beta1_hat.variance.is_none());
    }
}
