use olsim_shared::{FitResult, ReplicationTable, SimError, SimulationConfig};
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg64;
use tracing::debug;

use crate::observations::generate_observations;
use crate::ols::fit_ols;

/// One draw-and-fit cycle on its own stream.
#[inline]
pub fn run_replication(config: &SimulationConfig, index: usize) -> Result<FitResult, SimError> {
    let mut rng = Pcg64::seed_from_u64(config.replication_seed(index));
    let observations = generate_observations(config, &mut rng)?;
    fit_ols(&observations)
}

/// Serial run: replication `i` draws from the stream seeded with
/// `config.replication_seed(i)`, so the table matches the parallel runner bit for bit.
pub fn run_simulation(config: &SimulationConfig) -> Result<ReplicationTable, SimError> {
    config.validate()?;
    debug!(
        n = config.n,
        replications = config.replications,
        seed = config.seed,
        "running simulation"
    );

    let fits = (0..config.replications)
        .map(|i| run_replication(config, i))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(ReplicationTable::new(config.n, fits))
}

/// Serial run consuming a single caller-supplied stream in replication order.
pub fn run_simulation_with_rng<R: Rng + ?Sized>(
    config: &SimulationConfig,
    rng: &mut R,
) -> Result<ReplicationTable, SimError> {
    config.validate()?;
    debug!(
        n = config.n,
        replications = config.replications,
        "running simulation on shared stream"
    );

    let mut fits = Vec::with_capacity(config.replications);
    for _ in 0..config.replications {
        let observations = generate_observations(config, &mut *rng)?;
        fits.push(fit_ols(&observations)?);
    }

    Ok(ReplicationTable::new(config.n, fits))
}
