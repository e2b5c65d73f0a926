use olsim_sim::bench;

use crate::config::Config;
use crate::ModelArgs;

pub fn run(file: &Config, args: &ModelArgs) -> anyhow::Result<()> {
    let (config, n_workers) = super::resolve(file, args);
    bench::run_profile(&config, n_workers)
}
