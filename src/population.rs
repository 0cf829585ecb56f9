//! Population store: an ordered list of scored candidates with unique
//! candidate values.
//!
//! # Collisions
//!
//! Inserting a candidate that is already present overwrites its entry
//! instead of adding a second one. Because of this a population can hold
//! fewer members than its nominal size: two independently generated
//! candidates may coincide at construction, and a regeneration mutant may
//! coincide with a retained member. Callers must tolerate
//! `len() < nominal_size()`. Two identical mutants are admitted as one and
//! evict only one member, so they do not shrink the population.
//!
//! Enumeration order is insertion order, with removals closing the gap.
//! No fitness ordering is implied.

use crate::error::Result;
use crate::fitness;
use crate::gene::{self, GeneSource};
use crate::types::{Candidate, Scored, Target};

/// Outcome of [`Population::insert`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Insertion {
    /// The candidate was new and the population grew by one.
    Added,
    /// The candidate was already present; its entry was overwritten.
    Replaced,
}

/// The working set of candidates under evolution.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Population {
    members: Vec<Scored>,
    nominal_size: usize,
}

impl Population {
    /// Creates an empty population with the given nominal size.
    pub fn with_nominal_size(nominal_size: usize) -> Self {
        Self {
            members: Vec::with_capacity(nominal_size),
            nominal_size,
        }
    }

    /// Generates `size` random candidates, scores them against `target`,
    /// and stores them.
    ///
    /// Coinciding candidates collapse into one entry, so the result may be
    /// smaller than `size`.
    ///
    /// # Errors
    /// Propagates [`EvoError::InvalidLength`](crate::EvoError::InvalidLength)
    /// from the generator.
    pub fn generate<S: GeneSource + ?Sized>(
        target: &Target,
        size: usize,
        source: &mut S,
    ) -> Result<Self> {
        let mut population = Self::with_nominal_size(size);
        for _ in 0..size {
            let candidate = gene::generate(target.len(), source)?;
            let scored = fitness::score(candidate, target)?;
            if population.insert(scored) == Insertion::Replaced {
                tracing::debug!("initial population collision, population shrinks");
            }
        }
        Ok(population)
    }

    /// Inserts a scored candidate, overwriting any entry for the same
    /// candidate value.
    pub fn insert(&mut self, scored: Scored) -> Insertion {
        match self.position(&scored.candidate) {
            Some(idx) => {
                self.members[idx] = scored;
                Insertion::Replaced
            }
            None => {
                self.members.push(scored);
                Insertion::Added
            }
        }
    }

    /// Removes `candidate`, returning its entry if it was present.
    pub fn remove(&mut self, candidate: &Candidate) -> Option<Scored> {
        self.position(candidate).map(|idx| self.members.remove(idx))
    }

    /// Removes and returns the member with the lowest fitness.
    ///
    /// The earliest-enumerated member wins ties.
    pub fn remove_worst(&mut self) -> Option<Scored> {
        let idx = self
            .members
            .iter()
            .enumerate()
            .fold(None::<(usize, f64)>, |worst, (i, s)| match worst {
                Some((_, f)) if s.fitness >= f => worst,
                _ => Some((i, s.fitness)),
            })
            .map(|(i, _)| i)?;
        Some(self.members.remove(idx))
    }

    pub fn contains(&self, candidate: &Candidate) -> bool {
        self.position(candidate).is_some()
    }

    /// Current number of distinct candidates.
    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// The size the population was created with.
    pub fn nominal_size(&self) -> usize {
        self.nominal_size
    }

    /// All members in enumeration order.
    pub fn iter(&self) -> impl Iterator<Item = &Scored> {
        self.members.iter()
    }

    pub fn as_slice(&self) -> &[Scored] {
        &self.members
    }

    fn position(&self, candidate: &Candidate) -> Option<usize> {
        self.members.iter().position(|s| &s.candidate == candidate)
    }
}

impl FromIterator<Scored> for Population {
    /// Collects into a population whose nominal size is the number of
    /// items offered, collisions included.
    fn from_iter<T: IntoIterator<Item = Scored>>(iter: T) -> Self {
        let mut population = Self::with_nominal_size(0);
        for scored in iter {
            population.nominal_size += 1;
            population.insert(scored);
        }
        population
    }
}
