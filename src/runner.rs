//! Evolutionary loop execution.
//!
//! [`EvoRunner`] drives the complete process:
//! initialization → selection → crossover → mutation → compare →
//! regeneration → repeat, until a candidate matches the target exactly.

use crate::config::EvoConfig;
use crate::engine::{Engine, StepOutcome};
use crate::error::Result;
use crate::fitness::PERFECT;
use crate::gene::GeneSource;
use crate::random::{create_rng, resolve_seed};
use crate::report::{GenerationReport, Reporter, RunClock};
use crate::types::{Scored, Target};
use std::time::Duration;

/// Result of a run.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EvoResult {
    /// Best candidate at the end of the run.
    pub best: Scored,

    /// Number of improving generations.
    pub generations: u64,

    /// Total generation cycles attempted, discarded ones included.
    pub attempts: u64,

    /// Whether the target was matched exactly.
    pub converged: bool,

    /// Seed in effect. `None` when the caller supplied its own source.
    pub seed: Option<u64>,

    /// Best fitness at every report, starting with the initial population.
    ///
    /// Non-decreasing by construction.
    pub fitness_history: Vec<f64>,

    /// Wall-clock duration of the run.
    pub elapsed: Duration,
}

/// Executes the evolutionary loop.
///
/// # Usage
///
/// ```
/// use u_strevo::{EvoConfig, EvoRunner, SilentReporter};
///
/// let config = EvoConfig::default().with_target("Hi!").with_seed(42);
/// let result = EvoRunner::run(&config, &mut SilentReporter).unwrap();
/// assert!(result.converged);
/// assert_eq!(result.best.candidate.to_string(), "Hi!");
/// ```
pub struct EvoRunner;

impl EvoRunner {
    /// Runs with an RNG seeded from `config.seed`, or a random seed.
    pub fn run<R: Reporter + ?Sized>(config: &EvoConfig, reporter: &mut R) -> Result<EvoResult> {
        let seed = resolve_seed(config.seed);
        tracing::info!(seed, "starting run");

        let mut rng = create_rng(seed);
        let mut result = Self::run_with_source(config, &mut rng, reporter)?;
        result.seed = Some(seed);
        Ok(result)
    }

    /// Runs drawing all randomness from `source`.
    ///
    /// Without a `max_generations` cap this only returns once the target is
    /// matched exactly, which never happens if the target holds a character
    /// outside the gene alphabet.
    pub fn run_with_source<S, R>(
        config: &EvoConfig,
        source: &mut S,
        reporter: &mut R,
    ) -> Result<EvoResult>
    where
        S: GeneSource + ?Sized,
        R: Reporter + ?Sized,
    {
        config.validate()?;
        let target = Target::new(config.target.as_str())?;
        if !target.chars().iter().all(|&c| crate::gene::in_alphabet(c)) {
            tracing::warn!(
                text = target.as_str(),
                "target holds characters outside the gene alphabet and cannot be matched"
            );
        }

        let clock = RunClock::start();
        reporter.on_start(config)?;

        let mut engine = Engine::new(target, config.max_population, config.mutation_rate, source)?;

        let mut generations = 0u64;
        let mut attempts = 0u64;
        let mut fitness_history = vec![engine.best().fitness];
        reporter.on_generation(&GenerationReport {
            generation: generations,
            attempts,
            best: engine.best().clone(),
            elapsed: clock.elapsed(),
        })?;

        let mut converged = engine.best().fitness >= PERFECT;
        while !converged {
            if config.max_generations.is_some_and(|cap| attempts >= cap) {
                tracing::warn!(attempts, "generation cap reached before convergence");
                break;
            }
            attempts += 1;

            let StepOutcome::Improved { best, converged: done } = engine.step(source)? else {
                continue;
            };

            generations += 1;
            converged = done;
            fitness_history.push(best.fitness);
            tracing::info!(
                generation = generations,
                attempts,
                fitness = best.fitness,
                best = %best.candidate,
                "generation improved"
            );
            reporter.on_generation(&GenerationReport {
                generation: generations,
                attempts,
                best,
                elapsed: clock.elapsed(),
            })?;
        }

        Ok(EvoResult {
            best: engine.best().clone(),
            generations,
            attempts,
            converged,
            seed: None,
            fitness_history,
            elapsed: clock.elapsed(),
        })
    }
}

// ============================================================================
// Tests
// ============================================================================
