//! String-approximation genetic algorithm.
//!
//! Starting from random fixed-length character sequences, the engine
//! repeatedly selects the two fittest candidates, recombines them, mutates
//! the offspring, and merges improving offspring back into the population
//! until a candidate matches the target string exactly.
//!
//! # Components
//!
//! - [`gene`]: random candidates over printable ASCII codes 32–125
//! - [`fitness`]: positional match percentage against the target
//! - [`Population`]: unique candidates with their fitness
//! - [`select_parents`]: the two fittest members
//! - [`operators`]: midpoint crossover and per-character mutation
//! - [`regenerate`]: evict the two worst members, admit the mutants
//! - [`Engine`]: one generation cycle
//! - [`EvoRunner`]: the generation loop with progress reporting
//!
//! # Example
//!
//! ```
//! use u_strevo::{EvoConfig, EvoRunner, SilentReporter};
//!
//! let config = EvoConfig::default()
//!     .with_target("GA")
//!     .with_max_population(10)
//!     .with_mutation_rate(0.2)
//!     .with_seed(42);
//!
//! let result = EvoRunner::run(&config, &mut SilentReporter).unwrap();
//! assert!(result.converged);
//! ```
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*
//! - Syswerda (1991), "A Study of Reproduction in Generational and Steady-State
//!   Genetic Algorithms"

mod config;
mod engine;
mod error;
pub mod fitness;
pub mod gene;
pub mod operators;
mod population;
pub mod random;
mod regeneration;
pub mod report;
mod runner;
mod selection;
mod types;

pub use config::EvoConfig;
pub use engine::{Engine, StepOutcome};
pub use error::{EvoError, Result};
pub use gene::GeneSource;
pub use population::{Insertion, Population};
pub use regeneration::{regenerate, Regeneration};
pub use report::{ConsoleReporter, GenerationReport, Reporter, RunClock, SilentReporter};
pub use runner::{EvoResult, EvoRunner};
pub use selection::select_parents;
pub use types::{Candidate, Pair, Scored, Target};
