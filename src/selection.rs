//! Parent selection: the two fittest members of the population.
//!
//! Selection is plain truncation to the top two. There is no tournament,
//! roulette, or rank sampling, and no randomness.
//!
//! # Ties
//!
//! When several members share a fitness, the one enumerated first wins.
//! That makes the choice deterministic for a given population, but which
//! of the tied candidates is picked is not part of the contract; callers
//! and tests must not rely on it.

use crate::error::{EvoError, Result};
use crate::population::Population;
use crate::types::{Pair, Scored};

/// Returns the two highest-fitness members of `population`, fittest first.
///
/// The returned pair is a copy; the population is not modified.
///
/// # Errors
/// [`EvoError::DegeneratePopulation`] if fewer than two distinct candidates
/// are present.
pub fn select_parents(population: &Population) -> Result<Pair> {
    let members = population.as_slice();
    if members.len() < 2 {
        return Err(EvoError::DegeneratePopulation {
            distinct: members.len(),
        });
    }

    let best = best_index(members, None);
    let runner_up = best_index(members, Some(best));

    Ok(Pair::new(members[best].clone(), members[runner_up].clone()))
}

/// Index of the first member holding the maximum fitness, skipping `exclude`.
fn best_index(members: &[Scored], exclude: Option<usize>) -> usize {
    let mut best: Option<usize> = None;
    for (i, s) in members.iter().enumerate() {
        if Some(i) == exclude {
            continue;
        }
        match best {
            Some(b) if members[b].fitness >= s.fitness => {}
            _ => best = Some(i),
        }
    }
    best.unwrap_or(0)
}
