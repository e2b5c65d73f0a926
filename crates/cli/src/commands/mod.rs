pub mod bench;
pub mod run;
pub mod sweep;

use olsim_shared::SimulationConfig;
use rand::Rng;
use tracing::info;

use crate::config::Config;
use crate::ModelArgs;

/// Flags over file over defaults. Draws and reports a seed when none was fixed.
pub(crate) fn resolve(file: &Config, args: &ModelArgs) -> (SimulationConfig, Option<usize>) {
    let model = file.model.merged(&args.overrides());
    let fallback_seed = match model.seed {
        Some(seed) => seed,
        None => {
            let seed = rand::thread_rng().gen::<u64>();
            info!(seed, "no seed given, drew a random one");
            seed
        }
    };
    (model.resolve(fallback_seed), worker_count(file, args))
}

/// `--workers`, then `[run] workers`; 0 leaves the pool size to rayon.
fn worker_count(file: &Config, args: &ModelArgs) -> Option<usize> {
    match args.workers.unwrap_or(file.run.workers) {
        0 => None,
        workers => Some(workers),
    }
}

#[cfg(test)]
mod tests {
    use super::{resolve, worker_count};
    use crate::config::{Config, RunConfig};
    use crate::ModelArgs;

    fn file_with_workers(workers: usize) -> Config {
        Config { run: RunConfig { workers }, ..Config::default() }
    }

    #[test]
    fn test_workers_flag_beats_file() {
        let args = ModelArgs { workers: Some(2), ..ModelArgs::default() };
        assert_eq!(worker_count(&file_with_workers(6), &args), Some(2));
    }

    #[test]
    fn test_workers_fall_back_to_file() {
        assert_eq!(worker_count(&file_with_workers(6), &ModelArgs::default()), Some(6));
    }

    #[test]
    fn test_zero_workers_means_auto() {
        assert_eq!(worker_count(&Config::default(), &ModelArgs::default()), None);
        let args = ModelArgs { workers: Some(0), ..ModelArgs::default() };
        assert_eq!(worker_count(&file_with_workers(6), &args), None);
    }

    #[test]
    fn test_resolve_applies_flags_and_workers() {
        let args = ModelArgs { n: Some(45), seed: Some(8), workers: Some(3), ..ModelArgs::default() };
        let (config, n_workers) = resolve(&file_with_workers(0), &args);
        assert_eq!(config.n, 45);
        assert_eq!(config.seed, 8);
        assert_eq!(n_workers, Some(3));
    }
}
