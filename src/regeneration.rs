//! Steady-state replacement: evict the worst members, admit the mutants.

use crate::population::{Insertion, Population};
use crate::types::{Pair, Scored};

/// What a regeneration did to the population.
#[derive(Debug, Clone, PartialEq)]
pub struct Regeneration {
    /// Members removed, in eviction order.
    pub evicted: Vec<Scored>,
    /// Distinct mutants that overwrote a retained entry instead of adding one.
    pub collisions: usize,
}

/// Replaces the `k` worst members of `population` with the `k` distinct
/// mutants.
///
/// Identical mutants count once, so `k` is 1 when both mutants are the same
/// candidate and 2 otherwise. The worst member is found and removed one at
/// a time, recomputing the minimum after each removal, then the distinct
/// mutants are inserted. Size is preserved unless a mutant equals a
/// retained member, in which case the population shrinks by the number of
/// collisions.
///
/// Members fitter than every evicted one are never removed.
pub fn regenerate(population: &mut Population, mutants: &Pair) -> Regeneration {
    let mut distinct: Vec<&Scored> = Vec::with_capacity(2);
    for mutant in mutants.iter() {
        if !distinct.iter().any(|d| d.candidate == mutant.candidate) {
            distinct.push(mutant);
        }
    }

    let mut evicted = Vec::with_capacity(distinct.len());
    for _ in 0..distinct.len() {
        match population.remove_worst() {
            Some(worst) => evicted.push(worst),
            None => break,
        }
    }

    let mut collisions = 0;
    for mutant in distinct {
        if population.insert(mutant.clone()) == Insertion::Replaced {
            collisions += 1;
        }
    }

    if collisions > 0 {
        tracing::warn!(
            collisions,
            size = population.len(),
            nominal = population.nominal_size(),
            "regeneration collision, population shrinks"
        );
    }
    tracing::debug!(
        evicted = evicted.len(),
        size = population.len(),
        "population regenerated"
    );

    Regeneration {
        evicted,
        collisions,
    }
}
