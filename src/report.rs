//! Progress reporting.
//!
//! A run echoes its configuration, prints a three-column header, then one
//! tab-separated line per reported generation:
//!
//! ```text
//! Target Word : Hi
//! Max Population : 2
//! Mutation Rate : 1.0
//! ----------------------------------------------
//! The Best	Fitness	Time
//! ----------------------------------------------
//! Hz	50.00%	0:00:00.000041
//! Hi	100.00%	0:00:00.000187
//! ```
//!
//! Elapsed time comes from a [`RunClock`] owned by the run, never from
//! process-wide state.

use crate::config::EvoConfig;
use crate::error::Result;
use crate::types::Scored;
use std::io::Write;
use std::time::{Duration, Instant};

const RULE: &str = "----------------------------------------------";

/// Wall-clock start of a run.
#[derive(Debug, Clone, Copy)]
pub struct RunClock {
    started: Instant,
}

impl RunClock {
    pub fn start() -> Self {
        Self {
            started: Instant::now(),
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }
}

/// Formats a duration as `H:MM:SS.ffffff`, dropping the fraction when it is
/// zero.
pub fn format_elapsed(elapsed: Duration) -> String {
    let secs = elapsed.as_secs();
    let (h, m, s) = (secs / 3600, secs / 60 % 60, secs % 60);
    match elapsed.subsec_micros() {
        0 => format!("{h}:{m:02}:{s:02}"),
        us => format!("{h}:{m:02}:{s:02}.{us:06}"),
    }
}

/// One reported generation.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationReport {
    /// Number of improving generations so far; 0 is the initial population.
    pub generation: u64,
    /// Attempted cycles so far, discarded ones included.
    pub attempts: u64,
    /// Best current parent.
    pub best: Scored,
    pub elapsed: Duration,
}

impl GenerationReport {
    /// `<candidate>\t<fitness>%\t<elapsed>`, fitness with two decimals.
    pub fn progress_line(&self) -> String {
        format!(
            "{}\t{:.2}%\t{}",
            self.best.candidate,
            self.best.fitness,
            format_elapsed(self.elapsed)
        )
    }
}

/// Receives run progress.
///
/// Both hooks default to no-ops.
pub trait Reporter {
    /// Called once before the initial population is built.
    fn on_start(&mut self, _config: &EvoConfig) -> Result<()> {
        Ok(())
    }

    /// Called for the initial parents and after every improving generation.
    fn on_generation(&mut self, _report: &GenerationReport) -> Result<()> {
        Ok(())
    }
}

/// Reporter that discards everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct SilentReporter;

impl Reporter for SilentReporter {}

/// Writes the configuration echo, header, and progress lines to a writer.
#[derive(Debug)]
pub struct ConsoleReporter<W: Write> {
    out: W,
}

impl ConsoleReporter<std::io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(std::io::stdout())
    }
}

impl<W: Write> ConsoleReporter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Reporter for ConsoleReporter<W> {
    fn on_start(&mut self, config: &EvoConfig) -> Result<()> {
        writeln!(self.out, "Target Word : {}", config.target)?;
        writeln!(self.out, "Max Population : {}", config.max_population)?;
        writeln!(self.out, "Mutation Rate : {:?}", config.mutation_rate)?;
        writeln!(self.out, "{RULE}")?;
        writeln!(self.out, "The Best\tFitness\tTime")?;
        writeln!(self.out, "{RULE}")?;
        Ok(())
    }

    fn on_generation(&mut self, report: &GenerationReport) -> Result<()> {
        writeln!(self.out, "{}", report.progress_line())?;
        self.out.flush()?;
        Ok(())
    }
}
