//! Core data model: candidates, the target, scored candidates, and the
//! fixed-arity pairs that flow through one generation.

use crate::error::{EvoError, Result};
use std::fmt;

/// A fixed-length character sequence representing one trial solution.
///
/// Candidates are values: operators never modify one in place, they build
/// a fresh candidate instead.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Candidate {
    genes: Vec<char>,
}

impl Candidate {
    /// Builds a candidate from an explicit character sequence.
    pub fn from_chars(genes: Vec<char>) -> Self {
        Self { genes }
    }

    /// Number of characters.
    pub fn len(&self) -> usize {
        self.genes.len()
    }

    /// Returns `true` if the candidate holds no characters.
    pub fn is_empty(&self) -> bool {
        self.genes.is_empty()
    }

    /// The underlying characters.
    pub fn genes(&self) -> &[char] {
        &self.genes
    }
}

impl From<&str> for Candidate {
    fn from(s: &str) -> Self {
        Self::from_chars(s.chars().collect())
    }
}

impl fmt::Display for Candidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.genes.iter().try_for_each(|c| write!(f, "{c}"))
    }
}

/// The string being evolved toward.
///
/// Fixes the candidate length (in characters) and the comparison basis
/// for fitness. Immutable for a run.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Target {
    text: String,
    chars: Vec<char>,
}

impl Target {
    /// Creates a target.
    ///
    /// # Errors
    /// [`EvoError::InvalidLength`] if `text` is empty.
    pub fn new(text: impl Into<String>) -> Result<Self> {
        let text = text.into();
        if text.is_empty() {
            return Err(EvoError::InvalidLength);
        }
        let chars = text.chars().collect();
        Ok(Self { text, chars })
    }

    /// Length in characters.
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    /// Always `false`: construction rejects empty targets.
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// A candidate together with its fitness against the run's target.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Scored {
    pub candidate: Candidate,
    /// Percentage of matching positions, in `[0, 100]`.
    pub fitness: f64,
}

impl Scored {
    pub fn new(candidate: Candidate, fitness: f64) -> Self {
        Self { candidate, fitness }
    }
}

/// Exactly two scored candidates: parents, children, or mutants of one
/// generation.
///
/// A pair is a snapshot. Building one from the population copies the
/// members out, so later changes to the population do not affect it.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Pair {
    members: [Scored; 2],
}

impl Pair {
    pub fn new(first: Scored, second: Scored) -> Self {
        Self {
            members: [first, second],
        }
    }

    pub fn first(&self) -> &Scored {
        &self.members[0]
    }

    pub fn second(&self) -> &Scored {
        &self.members[1]
    }

    pub fn iter(&self) -> impl Iterator<Item = &Scored> {
        self.members.iter()
    }

    /// The member with the higher fitness; the first member wins ties.
    pub fn best(&self) -> &Scored {
        let [a, b] = &self.members;
        if b.fitness > a.fitness {
            b
        } else {
            a
        }
    }

    pub fn best_fitness(&self) -> f64 {
        self.best().fitness
    }

    pub fn into_members(self) -> [Scored; 2] {
        self.members
    }
}
