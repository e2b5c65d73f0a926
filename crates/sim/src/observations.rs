use olsim_shared::{ObservationSet, SimError, SimulationConfig};
use rand::Rng;
use rand_distr::{Distribution, Normal};

/// Draws `n` points from `y = beta0 + beta1 * x + e`, with
/// `x ~ Normal(x_mean, x_sd)` and `e ~ Normal(0, sigma)`.
///
/// All predictor values are drawn before any noise term, so a given
/// stream always maps to the same observation set. The config is checked
/// before the first draw; an invalid config leaves `rng` untouched.
pub fn generate_observations<R: Rng + ?Sized>(
    config: &SimulationConfig,
    rng: &mut R,
) -> Result<ObservationSet, SimError> {
    config.validate()?;

    let predictor = Normal::new(config.x_mean, config.x_sd)
        .map_err(|e| SimError::InvalidConfig(format!("predictor distribution: {e}")))?;
    let noise = Normal::new(0.0, config.sigma)
        .map_err(|e| SimError::InvalidConfig(format!("noise distribution: {e}")))?;

    let x: Vec<f64> = (0..config.n).map(|_| predictor.sample(rng)).collect();
    let y: Vec<f64> = x
        .iter()
        .map(|&xi| config.beta0 + config.beta1 * xi + noise.sample(rng))
        .collect();

    ObservationSet::new(x, y)
}
