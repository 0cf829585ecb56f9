//! Genetic operators on character candidates.
//!
//! # Crossover
//!
//! - [`crossover`]: single-point crossover at the midpoint, two parents to
//!   two children, no randomness
//! - [`swap_tails`]: the head/tail exchange underlying it, at any cut point
//!
//! # Mutation
//!
//! - [`mutate`]: per-position uniform replacement on both members of a pair
//! - [`mutate_candidate`]: the same on a single candidate
//!
//! All operators return fresh candidates; inputs are never modified.

use crate::error::{EvoError, Result};
use crate::fitness;
use crate::gene::GeneSource;
use crate::types::{Candidate, Pair, Target};

// ============================================================================
// Crossover
// ============================================================================

/// Crossover point for candidates of `len` characters: `len / 2` rounded
/// half to even.
///
/// Odd lengths therefore split at the even neighbour of the midpoint:
/// 1 → 0, 3 → 2, 5 → 2, 7 → 4.
pub fn crossover_point(len: usize) -> usize {
    (len as f64 / 2.0).round_ties_even() as usize
}

/// Exchanges the tails of `a` and `b` after position `cut`.
///
/// Returns `(a[..cut] ++ b[cut..], b[..cut] ++ a[cut..])`. Applying it twice
/// with the same cut restores the original pair.
///
/// # Errors
/// [`EvoError::LengthMismatch`] if `a` and `b` differ in length.
///
/// # Panics
/// Panics if `cut` exceeds the candidate length.
pub fn swap_tails(a: &Candidate, b: &Candidate, cut: usize) -> Result<(Candidate, Candidate)> {
    if a.len() != b.len() {
        return Err(EvoError::LengthMismatch {
            expected: a.len(),
            actual: b.len(),
        });
    }
    let (a_head, a_tail) = a.genes().split_at(cut);
    let (b_head, b_tail) = b.genes().split_at(cut);

    let first = Candidate::from_chars([a_head, b_tail].concat());
    let second = Candidate::from_chars([b_head, a_tail].concat());
    Ok((first, second))
}

/// Single-point crossover of a parent pair at [`crossover_point`].
///
/// `child0 = p0[..cp] ++ p1[cp..]`, `child1 = p1[..cp] ++ p0[cp..]`, each
/// scored against `target`.
///
/// # Errors
/// [`EvoError::LengthMismatch`] if the parents differ in length from each
/// other or from the target.
pub fn crossover(parents: &Pair, target: &Target) -> Result<Pair> {
    let p0 = &parents.first().candidate;
    let p1 = &parents.second().candidate;
    let cp = crossover_point(p0.len());

    let (c0, c1) = swap_tails(p0, p1, cp)?;
    Ok(Pair::new(
        fitness::score(c0, target)?,
        fitness::score(c1, target)?,
    ))
}

// ============================================================================
// Mutation
// ============================================================================

/// Returns a copy of `candidate` in which each position is independently
/// replaced, with probability `rate`, by a fresh alphabet character.
///
/// Every position consumes one `roll()`; positions that mutate consume one
/// more `gene()`. A position mutates when `roll() < rate`, so a rate of 0
/// never mutates and a rate of 1 redraws every position. The replacement is
/// drawn independently of the original and may coincide with it.
pub fn mutate_candidate<S: GeneSource + ?Sized>(
    candidate: &Candidate,
    rate: f64,
    source: &mut S,
) -> Candidate {
    let genes = candidate
        .genes()
        .iter()
        .map(|&g| if source.roll() < rate { source.gene() } else { g })
        .collect();
    Candidate::from_chars(genes)
}

/// Mutates both members of `children` and rescores the results.
///
/// # Errors
/// [`EvoError::LengthMismatch`] if a child does not match the target length.
pub fn mutate<S: GeneSource + ?Sized>(
    children: &Pair,
    rate: f64,
    target: &Target,
    source: &mut S,
) -> Result<Pair> {
    let m0 = mutate_candidate(&children.first().candidate, rate, source);
    let m1 = mutate_candidate(&children.second().candidate, rate, source);
    Ok(Pair::new(
        fitness::score(m0, target)?,
        fitness::score(m1, target)?,
    ))
}
