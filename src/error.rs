//! Error types for the evolutionary engine.
//!
//! All variants except [`EvoError::Io`] are local precondition violations:
//! they are reported immediately and never retried. A generation that fails
//! to improve on its parents is *not* an error (see
//! [`StepOutcome::Discarded`](crate::StepOutcome::Discarded)).

use thiserror::Error;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, EvoError>;

/// Errors raised by the engine, its configuration, and progress reporting.
#[derive(Debug, Error)]
pub enum EvoError {
    /// A candidate or target of length zero was requested.
    #[error("invalid length: candidates and targets must have at least one character")]
    InvalidLength,

    /// A candidate was compared or recombined with a sequence of another length.
    #[error("length mismatch: expected {expected} characters, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },

    /// Fewer than two distinct candidates are available for parent selection.
    #[error("degenerate population: need at least 2 distinct candidates, found {distinct}")]
    DegeneratePopulation { distinct: usize },

    /// A configuration parameter is out of range.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Writing a progress line failed.
    #[error("report output failed: {0}")]
    Io(#[from] std::io::Error),
}
