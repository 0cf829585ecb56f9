//! Shared helpers for integration tests.

#![allow(dead_code)]

use std::collections::VecDeque;
use u_strevo::{EvoConfig, GenerationReport, GeneSource, Reporter, Result};

/// Replays a fixed script of gene characters and answers every roll with
/// the same value.
///
/// With a mutation rate of 0 or 1 the roll value does not matter, so the
/// gene script alone determines the whole run.
pub struct ScriptedSource {
    genes: VecDeque<char>,
    roll: f64,
    pub genes_drawn: usize,
    pub rolls_drawn: usize,
}

impl ScriptedSource {
    pub fn new(genes: &str, roll: f64) -> Self {
        Self {
            genes: genes.chars().collect(),
            roll,
            genes_drawn: 0,
            rolls_drawn: 0,
        }
    }

    pub fn remaining_genes(&self) -> usize {
        self.genes.len()
    }
}

impl GeneSource for ScriptedSource {
    fn gene(&mut self) -> char {
        self.genes_drawn += 1;
        self.genes.pop_front().expect("gene script exhausted")
    }

    fn roll(&mut self) -> f64 {
        self.rolls_drawn += 1;
        self.roll
    }
}

/// Wraps another source and counts the draws taken from it.
pub struct CountingSource<S> {
    inner: S,
    pub genes_drawn: usize,
    pub rolls_drawn: usize,
}

impl<S: GeneSource> CountingSource<S> {
    pub fn new(inner: S) -> Self {
        Self {
            inner,
            genes_drawn: 0,
            rolls_drawn: 0,
        }
    }
}

impl<S: GeneSource> GeneSource for CountingSource<S> {
    fn gene(&mut self) -> char {
        self.genes_drawn += 1;
        self.inner.gene()
    }

    fn roll(&mut self) -> f64 {
        self.rolls_drawn += 1;
        self.inner.roll()
    }
}

/// Records every report it receives.
#[derive(Default)]
pub struct Recorder {
    pub config: Option<EvoConfig>,
    pub reports: Vec<GenerationReport>,
}

impl Recorder {
    /// `(candidate, fitness)` of every report, in order.
    pub fn trace(&self) -> Vec<(String, f64)> {
        self.reports
            .iter()
            .map(|r| (r.best.candidate.to_string(), r.best.fitness))
            .collect()
    }
}

impl Reporter for Recorder {
    fn on_start(&mut self, config: &EvoConfig) -> Result<()> {
        self.config = Some(config.clone());
        Ok(())
    }

    fn on_generation(&mut self, report: &GenerationReport) -> Result<()> {
        self.reports.push(report.clone());
        Ok(())
    }
}
