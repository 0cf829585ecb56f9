//! Run configuration.
//!
//! [`EvoConfig`] holds all parameters that control the evolutionary loop.

use crate::error::{EvoError, Result};

/// Configuration for a string-evolution run.
///
/// # Defaults
///
/// ```
/// use u_strevo::EvoConfig;
///
/// let config = EvoConfig::default();
/// assert_eq!(config.target, "Hello World!");
/// assert_eq!(config.max_population, 10);
/// assert!(config.max_generations.is_none());
/// ```
///
/// # Builder Pattern
///
/// ```
/// use u_strevo::EvoConfig;
///
/// let config = EvoConfig::default()
///     .with_target("Hi")
///     .with_max_population(20)
///     .with_mutation_rate(0.1)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EvoConfig {
    /// The string candidates evolve toward. Must not be empty.
    ///
    /// Characters outside the gene alphabet (codes 32–125) can never be
    /// produced, so a target containing one is unreachable.
    pub target: String,

    /// Number of candidates generated for the initial population.
    ///
    /// Collisions between candidates can leave the live population smaller.
    pub max_population: usize,

    /// Per-character probability of replacement during mutation (0.0–1.0).
    pub mutation_rate: f64,

    /// Random seed for reproducibility.
    ///
    /// `None` uses a random seed.
    pub seed: Option<u64>,

    /// Optional cap on attempted generation cycles, discarded ones included.
    ///
    /// `None` (the default) loops until an exact match, which never ends
    /// for an unreachable target.
    pub max_generations: Option<u64>,
}

impl Default for EvoConfig {
    fn default() -> Self {
        Self {
            target: "Hello World!".to_string(),
            max_population: 10,
            mutation_rate: 0.2,
            seed: None,
            max_generations: None,
        }
    }
}

impl EvoConfig {
    /// Sets the target string.
    pub fn with_target(mut self, target: impl Into<String>) -> Self {
        self.target = target.into();
        self
    }

    /// Sets the population size.
    pub fn with_max_population(mut self, n: usize) -> Self {
        self.max_population = n;
        self
    }

    /// Sets the mutation rate, clamped to `[0, 1]`.
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate.clamp(0.0, 1.0);
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Caps the number of attempted generation cycles.
    pub fn with_max_generations(mut self, n: u64) -> Self {
        self.max_generations = Some(n);
        self
    }

    /// Validates the configuration.
    ///
    /// # Errors
    /// [`EvoError::InvalidLength`] for an empty target,
    /// [`EvoError::InvalidConfig`] for any other out-of-range parameter.
    pub fn validate(&self) -> Result<()> {
        if self.target.is_empty() {
            return Err(EvoError::InvalidLength);
        }
        if self.max_population == 0 {
            return Err(EvoError::InvalidConfig(
                "max_population must be at least 1".into(),
            ));
        }
        if !(0.0..=1.0).contains(&self.mutation_rate) {
            return Err(EvoError::InvalidConfig(format!(
                "mutation_rate must be within [0, 1], got {}",
                self.mutation_rate
            )));
        }
        if self.max_generations == Some(0) {
            return Err(EvoError::InvalidConfig(
                "max_generations must be positive or None".into(),
            ));
        }
        Ok(())
    }
}
