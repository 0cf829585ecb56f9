//! Fitness evaluation: positional match percentage against the target.

use crate::error::{EvoError, Result};
use crate::types::{Candidate, Scored, Target};

/// Fitness of an exact match.
pub const PERFECT: f64 = 100.0;

/// Percentage of positions where `candidate` and `target` hold the same
/// character, in `[0, 100]`.
///
/// Characters are compared by code point, never by locale-aware collation.
///
/// # Errors
/// [`EvoError::LengthMismatch`] if the lengths differ.
pub fn evaluate(candidate: &Candidate, target: &Target) -> Result<f64> {
    if candidate.len() != target.len() {
        return Err(EvoError::LengthMismatch {
            expected: target.len(),
            actual: candidate.len(),
        });
    }
    let matches = candidate
        .genes()
        .iter()
        .zip(target.chars())
        .filter(|(a, b)| a == b)
        .count();
    Ok(matches as f64 / target.len() as f64 * PERFECT)
}

/// Evaluates `candidate` and bundles it with its fitness.
pub fn score(candidate: Candidate, target: &Target) -> Result<Scored> {
    let fitness = evaluate(&candidate, target)?;
    Ok(Scored::new(candidate, fitness))
}
