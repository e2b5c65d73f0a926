use olsim_shared::{Parameter, ReplicationTable, SimulationConfig, SummaryStats};
use olsim_sim::theory::TheoreticalMoments;
use serde::Serialize;
use std::time::Duration;

fn theory_for(moments: &[TheoreticalMoments], sample_size: Option<usize>) -> Option<&TheoreticalMoments> {
    match sample_size {
        Some(n) => moments.iter().find(|m| m.sample_size == n),
        None => moments.first(),
    }
}

fn fmt_opt(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{v:>12.6}"),
        None => format!("{:>12}", "-"),
    }
}

pub fn print_replications(table: &ReplicationTable) {
    println!("\n{:>8} {:>12} {:>12}", "rep", "beta0_hat", "beta1_hat");
    for (i, fit) in table.fits.iter().enumerate() {
        println!("{:>8} {:>12.6} {:>12.6}", i + 1, fit.beta0_hat, fit.beta1_hat);
    }
}

pub fn print_summary(stats: &SummaryStats, moments: &[TheoreticalMoments], elapsed: Duration) {
    println!("\n==================================================================");
    println!(
        "  {:<10} {:>6} {:>12} {:>12} {:>12} {:>12}",
        "parameter", "n", "emp_mean", "true", "emp_var", "theory_var"
    );
    for row in &stats.rows {
        let theory = theory_for(moments, row.sample_size).map(|m| m.get(row.parameter));
        let size = row
            .sample_size
            .map(|n| n.to_string())
            .unwrap_or_else(|| "-".to_string());
        println!(
            "  {:<10} {:>6} {:>12.6} {} {:>12.6} {}",
            row.parameter.name(),
            size,
            row.emp_mean,
            fmt_opt(theory.map(|t| t.mean)),
            row.emp_var,
            fmt_opt(theory.and_then(|t| t.variance)),
        );
    }
    println!("  Time: {:.2}s", elapsed.as_secs_f64());
    println!("==================================================================");

    let slopes: Vec<_> = stats.for_parameter(Parameter::Beta1Hat).collect();
    if slopes.len() > 1 {
        let shrinking = slopes.windows(2).all(|w| w[1].emp_var <= w[0].emp_var);
        println!(
            "  beta1_hat variance {} as n grows",
            if shrinking { "shrinks" } else { "does NOT shrink monotonically" }
        );
    }
}

#[derive(Serialize)]
struct JsonReport<'a> {
    model: &'a SimulationConfig,
    #[serde(skip_serializing_if = "Option::is_none")]
    sample_sizes: Option<&'a [usize]>,
    summary: &'a SummaryStats,
    theory: &'a [TheoreticalMoments],
    #[serde(skip_serializing_if = "Option::is_none")]
    replications: Option<&'a [ReplicationTable]>,
}

pub fn print_json(
    model: &SimulationConfig,
    sample_sizes: Option<&[usize]>,
    replications: Option<&[ReplicationTable]>,
    summary: &SummaryStats,
    theory: &[TheoreticalMoments],
) -> anyhow::Result<()> {
    let report = JsonReport {
        model,
        sample_sizes,
        summary,
        theory,
        replications,
    };
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
