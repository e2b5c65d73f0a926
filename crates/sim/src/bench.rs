use olsim_shared::SimulationConfig;
use std::time::Instant;

use crate::observations::generate_observations;
use crate::ols::fit_ols;
use rand::SeedableRng;
use rand_pcg::Pcg64;

pub fn run_profile(config: &SimulationConfig, n_workers: Option<usize>) -> anyhow::Result<()> {
    config.validate()?;

    let mut rng = Pcg64::seed_from_u64(config.seed);
    let observations = generate_observations(config, &mut rng)?;

    // Warmup
    for _ in 0..100 {
        let _ = fit_ols(&observations);
    }

    let n = 10_000;

    // Per-fit benchmark
    let start = Instant::now();
    for _ in 0..n {
        let _ = fit_ols(&observations)?;
    }
    let fit_us = start.elapsed().as_nanos() as f64 / n as f64 / 1000.0;

    let start = Instant::now();
    for _ in 0..n {
        let _ = generate_observations(config, &mut rng)?;
    }
    let gen_us = start.elapsed().as_nanos() as f64 / n as f64 / 1000.0;

    println!("=== Per-replication Benchmark (n={}) ===", config.n);
    println!("Generate: {:.3}µs/call ({:.0} calls/sec)", gen_us, 1_000_000.0 / gen_us);
    println!("Fit:      {:.3}µs/call ({:.0} calls/sec)", fit_us, 1_000_000.0 / fit_us);

    // Full run benchmarks
    let start = Instant::now();
    let serial = crate::engine::run_simulation(config)?;
    let serial_elapsed = start.elapsed();

    let start = Instant::now();
    let parallel = crate::runner::run_batch(config, n_workers)?;
    let parallel_elapsed = start.elapsed();

    println!("\n=== {}-replication Run Benchmark ===", config.replications);
    println!("Serial:   {:.3}s", serial_elapsed.as_secs_f64());
    println!("Parallel: {:.3}s", parallel_elapsed.as_secs_f64());
    println!(
        "Speedup:  {:.1}x",
        serial_elapsed.as_secs_f64() / parallel_elapsed.as_secs_f64().max(1e-9)
    );
    println!(
        "Tables identical: {}",
        if serial == parallel { "yes" } else { "NO" }
    );
    Ok(())
}
