use std::time::Instant;

use rayon::prelude::*;
use tracing::{info, warn};

use olsim_shared::{ReplicationTable, SampleSizeSweep, SimError, SimulationConfig, SweepTable};

use crate::engine;

fn build_pool(n_workers: Option<usize>) -> anyhow::Result<rayon::ThreadPool> {
    Ok(rayon::ThreadPoolBuilder::new()
        .num_threads(n_workers.unwrap_or_else(|| rayon::current_num_threads().min(8)))
        .build()?)
}

fn replicate_on(
    pool: &rayon::ThreadPool,
    config: &SimulationConfig,
) -> Result<ReplicationTable, SimError> {
    config.validate()?;
    // Indexed collect keeps logical replication order regardless of completion order.
    let fits: Result<Vec<_>, _> = pool.install(|| {
        (0..config.replications)
            .into_par_iter()
            .map(|i| engine::run_replication(config, i))
            .collect()
    });
    Ok(ReplicationTable::new(config.n, fits?))
}

/// Parallel counterpart of [`engine::run_simulation`]; produces the same table.
pub fn run_batch(config: &SimulationConfig, n_workers: Option<usize>) -> anyhow::Result<ReplicationTable> {
    config.validate()?;
    let pool = build_pool(n_workers)?;

    let start = Instant::now();
    let table = replicate_on(&pool, config)?;
    info!(
        n = config.n,
        replications = table.n_replications(),
        elapsed_ms = start.elapsed().as_millis() as u64,
        "batch complete"
    );
    Ok(table)
}

fn check_sweep(configs: &[SimulationConfig]) -> Result<(), SimError> {
    let Some(first) = configs.first() else {
        return Err(SimError::InvalidConfig("sweep needs at least one sample size".to_string()));
    };
    for config in configs {
        config.validate()?;
        let same_model = config.beta0 == first.beta0
            && config.beta1 == first.beta1
            && config.sigma == first.sigma
            && config.x_mean == first.x_mean
            && config.x_sd == first.x_sd
            && config.replications == first.replications;
        if !same_model {
            return Err(SimError::InvalidConfig(format!(
                "sweep configurations may differ only in sample size (n={} differs from n={})",
                config.n, first.n
            )));
        }
    }
    Ok(())
}

/// One replication table per distinct sample size, in the order sizes were supplied.
/// A repeated size is run once, for its first occurrence.
pub fn run_sweep(configs: &[SimulationConfig], n_workers: Option<usize>) -> anyhow::Result<SweepTable> {
    check_sweep(configs)?;
    let pool = build_pool(n_workers)?;

    let start = Instant::now();
    let mut sweep = SweepTable::new();
    for config in configs {
        if sweep.contains(config.n) {
            warn!(n = config.n, "duplicate sample size in sweep, skipping");
            continue;
        }
        let table = replicate_on(&pool, config)?;
        sweep.insert(config.n, table);
    }
    info!(
        sizes = ?sweep.sample_sizes(),
        elapsed_ms = start.elapsed().as_millis() as u64,
        "sweep complete"
    );
    Ok(sweep)
}

pub fn run_default_sweep(
    base: &SimulationConfig,
    sizes: &SampleSizeSweep,
    n_workers: Option<usize>,
) -> anyhow::Result<SweepTable> {
    run_sweep(&sizes.configs(base), n_workers)
}
