//! Gene generation.
//!
//! Candidates are drawn from a closed alphabet of printable ASCII codes
//! [`ALPHABET_LOW`]`..=`[`ALPHABET_HIGH`] (space through `}`). Randomness
//! reaches the generator and the mutator through the [`GeneSource`] trait,
//! which every [`rand::Rng`] implements.

use crate::error::{EvoError, Result};
use crate::types::Candidate;
use rand::Rng;

/// Lowest character code in the gene alphabet (space).
pub const ALPHABET_LOW: u8 = 32;

/// Highest character code in the gene alphabet (`}`).
pub const ALPHABET_HIGH: u8 = 125;

/// Returns `true` if `c` can appear in a generated or mutated candidate.
///
/// A target containing any character outside the alphabet can never be
/// matched exactly.
pub fn in_alphabet(c: char) -> bool {
    (u32::from(ALPHABET_LOW)..=u32::from(ALPHABET_HIGH)).contains(&u32::from(c))
}

/// Source of the two kinds of random draws the engine consumes.
pub trait GeneSource {
    /// A uniformly random character from the gene alphabet.
    fn gene(&mut self) -> char;

    /// A uniformly random number in `[0, 1)`.
    fn roll(&mut self) -> f64;
}

impl<R: Rng> GeneSource for R {
    fn gene(&mut self) -> char {
        char::from(self.random_range(ALPHABET_LOW..=ALPHABET_HIGH))
    }

    fn roll(&mut self) -> f64 {
        self.random::<f64>()
    }
}

/// Generates a random candidate of `len` characters.
///
/// # Errors
/// [`EvoError::InvalidLength`] if `len` is zero.
pub fn generate<S: GeneSource + ?Sized>(len: usize, source: &mut S) -> Result<Candidate> {
    if len == 0 {
        return Err(EvoError::InvalidLength);
    }
    Ok(Candidate::from_chars((0..len).map(|_| source.gene()).collect()))
}
