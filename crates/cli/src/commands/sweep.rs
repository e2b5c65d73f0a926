use anyhow::Context;
use olsim_shared::SampleSizeSweep;
use olsim_sim::{runner, summary, theory};

use crate::config::Config;
use crate::output;
use crate::{Format, ModelArgs};

pub fn run(
    file: &Config,
    args: &ModelArgs,
    sizes: Option<Vec<usize>>,
    format: Format,
) -> anyhow::Result<()> {
    let (base, n_workers) = super::resolve(file, args);
    let sweep = sizes.map(SampleSizeSweep::new).unwrap_or_else(|| file.sweep.clone());
    let configs = sweep.configs(&base);

    if format == Format::Table {
        println!(
            "Sweeping n in {:?} ({} replications each, seed = {})...",
            sweep.sizes, base.replications, base.seed,
        );
    }

    let start = std::time::Instant::now();
    let table = runner::run_sweep(&configs, n_workers).context("sweep failed")?;
    let elapsed = start.elapsed();

    let stats = summary::summarize_sweep(&table)?;
    let moments: Vec<_> = table
        .sample_sizes()
        .into_iter()
        .filter_map(|n| configs.iter().find(|c| c.n == n))
        .map(theory::expected_moments)
        .collect();

    match format {
        Format::Table => output::print_summary(&stats, &moments, elapsed),
        Format::Json => {
            let sizes = table.sample_sizes();
            output::print_json(&base, Some(&sizes), None, &stats, &moments)?;
        }
    }
    Ok(())
}
