use olsim_sim::{engine, runner, summary, theory};

use crate::config::Config;
use crate::output;
use crate::{Format, ModelArgs};

pub fn run(
    file: &Config,
    args: &ModelArgs,
    serial: bool,
    replications_table: bool,
    format: Format,
) -> anyhow::Result<()> {
    let (config, n_workers) = super::resolve(file, args);

    if format == Format::Table {
        println!(
            "Running {} replications (n = {}, seed = {})...",
            config.replications, config.n, config.seed,
        );
    }

    let start = std::time::Instant::now();
    let table = if serial {
        engine::run_simulation(&config)?
    } else {
        runner::run_batch(&config, n_workers)?
    };
    let elapsed = start.elapsed();

    let stats = summary::summarize(&table)?;
    let moments = [theory::expected_moments(&config)];

    match format {
        Format::Table => {
            if replications_table {
                output::print_replications(&table);
            }
            output::print_summary(&stats, &moments, elapsed);
        }
        Format::Json => {
            let tables = if replications_table { Some(std::slice::from_ref(&table)) } else { None };
            output::print_json(&config, None, tables, &stats, &moments)?;
        }
    }
    Ok(())
}
