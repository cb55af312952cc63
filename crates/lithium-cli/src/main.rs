// ─────────────────────────────────────────────────────────────────────
// Lithium Recovery Model — CLI
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! `lirec` — run the baseline or a seeded Monte Carlo study and emit JSON.

use clap::{Parser, Subcommand};
use lithium_core::baseline::run_baseline;
use lithium_types::config::RecoveryConfig;
use lithium_types::error::RecoveryResult;
use lithium_types::state::{BaselineReport, YieldOutcome};
use lithium_uq::sampler::run_from_config;
use lithium_uq::stats::{describe, histogram, Histogram, OutcomeStatistics};
use serde::Serialize;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "lirec")]
#[command(about = "Lithium recovery yield: milling, leaching, precipitation and Monte Carlo uncertainty")]
#[command(version)]
struct Cli {
    /// JSON run configuration (defaults to the built-in nominal run)
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Evaluate the nominal parameter set once
    Baseline,

    /// Propagate input variability with a seeded Monte Carlo run
    MonteCarlo {
        /// Override the configured trial count
        #[arg(long)]
        trials: Option<usize>,

        /// Override the configured seed
        #[arg(long)]
        seed: Option<u64>,

        /// Number of histogram bins for the recovered-mass distribution
        #[arg(long, default_value_t = 30)]
        bins: usize,

        /// Include every trial outcome in draw order
        #[arg(long)]
        raw: bool,
    },
}

#[derive(Serialize)]
struct MonteCarloReport {
    run_name: String,
    seed: u64,
    n_trials: usize,
    baseline_recovered_lithium_g: f64,
    available_lithium_g: f64,
    recovered_lithium_g: OutcomeStatistics,
    yield_fraction: OutcomeStatistics,
    histogram: Histogram,
    #[serde(skip_serializing_if = "Option::is_none")]
    outcomes: Option<Vec<YieldOutcome>>,
}

fn load_config(path: Option<&str>) -> RecoveryResult<RecoveryConfig> {
    match path {
        Some(p) => {
            info!(path = p, "loading configuration");
            RecoveryConfig::from_file(p)
        }
        None => Ok(RecoveryConfig::default()),
    }
}

fn baseline(config: &RecoveryConfig) -> RecoveryResult<BaselineReport> {
    let report = run_baseline(&config.baseline)?;
    info!(
        run = %config.run_name,
        recovered_lithium_g = report.outcome.recovered_lithium_g,
        yield_fraction = report.overall_yield_fraction,
        "baseline complete"
    );
    Ok(report)
}

fn monte_carlo(
    mut config: RecoveryConfig,
    trials: Option<usize>,
    seed: Option<u64>,
    bins: usize,
    raw: bool,
) -> RecoveryResult<MonteCarloReport> {
    if let Some(n) = trials {
        config.monte_carlo.n_trials = n;
    }
    if let Some(s) = seed {
        config.monte_carlo.seed = s;
    }
    config.validate()?;

    let baseline = run_baseline(&config.baseline)?;
    let result = run_from_config(&config)?;
    let masses = result.recovered_masses();
    let fractions: Vec<f64> = result.outcomes.iter().map(|o| o.yield_fraction()).collect();

    Ok(MonteCarloReport {
        run_name: config.run_name.clone(),
        seed: result.seed,
        n_trials: result.len(),
        baseline_recovered_lithium_g: baseline.outcome.recovered_lithium_g,
        available_lithium_g: config.baseline.available_lithium_g(),
        recovered_lithium_g: describe(&masses)?,
        yield_fraction: describe(&fractions)?,
        histogram: histogram(&masses, bins)?,
        outcomes: raw.then_some(result.outcomes),
    })
}

fn execute(cli: Cli) -> RecoveryResult<String> {
    let config = load_config(cli.config.as_deref())?;
    let json = match cli.command {
        Commands::Baseline => serde_json::to_string_pretty(&baseline(&config)?)?,
        Commands::MonteCarlo {
            trials,
            seed,
            bins,
            raw,
        } => serde_json::to_string_pretty(&monte_carlo(config, trials, seed, bins, raw)?)?,
    };
    Ok(json)
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    match execute(Cli::parse()) {
        Ok(json) => println!("{json}"),
        Err(e) => {
            error!("{e}");
            std::process::exit(1);
        }
    }
}
