mod commands;
mod config;
mod output;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::config::ModelConfig;

#[derive(Parser)]
#[command(name = "olsim", about = "Monte Carlo simulator for the OLS estimator")]
struct Cli {
    /// TOML config file (defaults to $OLSIM_CONFIG when set)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args, Debug, Default, Clone)]
struct ModelArgs {
    /// Observations per replication
    #[arg(long, short = 'n')]
    n: Option<usize>,
    /// True intercept
    #[arg(long, allow_hyphen_values = true)]
    beta0: Option<f64>,
    /// True slope
    #[arg(long, allow_hyphen_values = true)]
    beta1: Option<f64>,
    /// Noise standard deviation
    #[arg(long)]
    sigma: Option<f64>,
    /// Predictor mean
    #[arg(long, allow_hyphen_values = true)]
    x_mean: Option<f64>,
    /// Predictor standard deviation
    #[arg(long)]
    x_sd: Option<f64>,
    /// Number of replications
    #[arg(long, short = 'r')]
    replications: Option<usize>,
    /// Seed for reproducible runs (random when omitted)
    #[arg(long)]
    seed: Option<u64>,
    /// Number of parallel workers (0 = auto)
    #[arg(long)]
    workers: Option<usize>,
}

impl ModelArgs {
    fn overrides(&self) -> ModelConfig {
        ModelConfig {
            n: self.n,
            beta0: self.beta0,
            beta1: self.beta1,
            sigma: self.sigma,
            x_mean: self.x_mean,
            x_sd: self.x_sd,
            replications: self.replications,
            seed: self.seed,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Format {
    Table,
    Json,
}

#[derive(Subcommand)]
enum Commands {
    /// Run replications at one sample size and summarize the estimates
    Run {
        #[command(flatten)]
        model: ModelArgs,
        /// Run on the calling thread instead of the worker pool
        #[arg(long)]
        serial: bool,
        /// Also print every replication's estimates
        #[arg(long)]
        replications_table: bool,
        #[arg(long, value_enum, default_value = "table")]
        format: Format,
    },
    /// Repeat the simulation across several sample sizes
    Sweep {
        #[command(flatten)]
        model: ModelArgs,
        /// Comma-separated sample sizes, e.g. 30,60,120,240
        #[arg(long, value_delimiter = ',')]
        sizes: Option<Vec<usize>>,
        #[arg(long, value_enum, default_value = "table")]
        format: Format,
    },
    /// Time generation, fitting, and serial vs parallel runs
    Bench {
        #[command(flatten)]
        model: ModelArgs,
    },
}

/// `RUST_LOG` when set, otherwise warnings and above.
fn env_filter() -> tracing_subscriber::EnvFilter {
    tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"))
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(env_filter())
        .init();

    let cli = Cli::parse();
    let file = config::Config::load(cli.config.as_deref())?;

    match cli.command {
        Commands::Run {
            model,
            serial,
            replications_table,
            format,
        } => commands::run::run(&file, &model, serial, replications_table, format),
        Commands::Sweep {
            model,
            sizes,
            format,
        } => commands::sweep::run(&file, &model, sizes, format),
        Commands::Bench { model } => commands::bench::run(&file, &model),
    }
}

#[cfg(test)]
mod tests {
    use super::env_filter;
    use tracing::Level;

    /// (debug, info, warn) enabled under the filter built from the current environment.
    fn enabled_levels() -> (bool, bool, bool) {
        let subscriber = tracing_subscriber::fmt().with_env_filter(env_filter()).finish();
        tracing::subscriber::with_default(subscriber, || {
            (
                tracing::enabled!(Level::DEBUG),
                tracing::enabled!(Level::INFO),
                tracing::enabled!(Level::WARN),
            )
        })
    }

    // Both cases share one test so no other test sees RUST_LOG half-set.
    #[test]
    fn test_rust_log_level_overrides_default() {
        std::env::set_var("RUST_LOG", "info");
        assert_eq!(enabled_levels(), (false, true, true));

        std::env::set_var("RUST_LOG", "debug");
        assert_eq!(enabled_levels(), (true, true, true));

        std::env::remove_var("RUST_LOG");
        assert_eq!(enabled_levels(), (false, false, true));
    }
}
