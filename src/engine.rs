//! One generation cycle: select, cross over, mutate, compare, regenerate.

use crate::error::Result;
use crate::fitness::PERFECT;
use crate::gene::GeneSource;
use crate::operators::{crossover, mutate};
use crate::population::Population;
use crate::regeneration::regenerate;
use crate::selection::select_parents;
use crate::types::{Pair, Scored, Target};

/// Result of one [`Engine::step`].
#[derive(Debug, Clone, PartialEq)]
pub enum StepOutcome {
    /// The mutants did not beat the parents. Nothing changed; the caller
    /// retries with fresh randomness.
    Discarded,
    /// The mutants beat the parents and were merged into the population.
    Improved {
        /// Best member of the newly selected parents.
        best: Scored,
        /// Whether a mutant matched the target exactly.
        converged: bool,
    },
}

/// Evolutionary state for a single run: target, population, and the
/// current parents.
#[derive(Debug, Clone)]
pub struct Engine {
    target: Target,
    mutation_rate: f64,
    population: Population,
    parents: Pair,
}

impl Engine {
    /// Generates a population of `max_population` candidates and selects
    /// the initial parents.
    ///
    /// # Errors
    /// [`EvoError::DegeneratePopulation`](crate::EvoError::DegeneratePopulation)
    /// if fewer than two distinct candidates result.
    pub fn new<S: GeneSource + ?Sized>(
        target: Target,
        max_population: usize,
        mutation_rate: f64,
        source: &mut S,
    ) -> Result<Self> {
        let population = Population::generate(&target, max_population, source)?;
        Self::from_population(target, population, mutation_rate)
    }

    /// Wraps an existing population and selects the initial parents.
    pub fn from_population(
        target: Target,
        population: Population,
        mutation_rate: f64,
    ) -> Result<Self> {
        let parents = select_parents(&population)?;
        Ok(Self {
            target,
            mutation_rate,
            population,
            parents,
        })
    }

    /// Runs one generation.
    ///
    /// The mutants replace the two worst members only if their best
    /// fitness strictly exceeds the parents' best. Otherwise the
    /// population is left untouched and [`StepOutcome::Discarded`] is
    /// returned.
    pub fn step<S: GeneSource + ?Sized>(&mut self, source: &mut S) -> Result<StepOutcome> {
        let children = crossover(&self.parents, &self.target)?;
        let mutants = mutate(&children, self.mutation_rate, &self.target, source)?;

        if mutants.best_fitness() <= self.parents.best_fitness() {
            tracing::trace!(
                parent_best = self.parents.best_fitness(),
                mutant_best = mutants.best_fitness(),
                "no improvement, generation discarded"
            );
            return Ok(StepOutcome::Discarded);
        }

        regenerate(&mut self.population, &mutants);
        self.parents = select_parents(&self.population)?;

        Ok(StepOutcome::Improved {
            best: self.best().clone(),
            converged: mutants.best_fitness() >= PERFECT,
        })
    }

    /// Best member of the current parents.
    pub fn best(&self) -> &Scored {
        self.parents.best()
    }

    pub fn parents(&self) -> &Pair {
        &self.parents
    }

    pub fn population(&self) -> &Population {
        &self.population
    }

    pub fn target(&self) -> &Target {
        &self.target
    }
}
