//! Command-line driver: evolve a random string toward a target and print
//! each improving generation.
//!
//! Usage:
//!   u-strevo [--target <TEXT>] [--max-population <N>] [--mutation-rate <R>]
//!            [--seed <SEED>] [--max-generations <N>] [-v...]

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use u_strevo::{ConsoleReporter, EvoConfig, EvoRunner};

#[derive(Debug, Parser)]
#[command(name = "u-strevo", version, about = "Evolve a random string toward a target")]
struct Cli {
    /// String to evolve toward
    #[arg(short, long, default_value = "Hello World!")]
    target: String,

    /// Number of candidates in the population
    #[arg(short = 'p', long, default_value_t = 10)]
    max_population: usize,

    /// Per-character mutation probability, between 0 and 1
    #[arg(short = 'm', long, default_value_t = 0.2)]
    mutation_rate: f64,

    /// Random seed for a reproducible run
    #[arg(short, long)]
    seed: Option<u64>,

    /// Stop after this many attempted generations
    #[arg(long)]
    max_generations: Option<u64>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn config(&self) -> EvoConfig {
        EvoConfig {
            target: self.target.clone(),
            max_population: self.max_population,
            mutation_rate: self.mutation_rate,
            seed: self.seed,
            max_generations: self.max_generations,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = cli.config();
    let mut reporter = ConsoleReporter::stdout();
    let result = EvoRunner::run(&config, &mut reporter).context("evolution failed")?;

    tracing::info!(
        generations = result.generations,
        attempts = result.attempts,
        converged = result.converged,
        "run finished"
    );
    Ok(())
}
