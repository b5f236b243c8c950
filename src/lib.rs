//! Genetic-algorithm solver for the 8-queens puzzle.
//!
//! Searches for placements of 8 queens on an 8×8 board with zero pairwise
//! attacks. A board is encoded as one row value per column ([`Candidate`]),
//! fitness is the number of attacking queen pairs ([`conflicts`], minimized),
//! and a generational GA ([`GaRunner`]) evolves a population using tournament
//! selection, one-point crossover, and single-gene mutation.
//!
//! # Modules
//!
//! - [`board`]: Candidate encoding and the pairwise attack test
//! - [`fitness`]: Conflict counting
//! - [`selection`]: Tournament selection with replacement
//! - [`operators`]: One-point crossover and mutation
//! - [`config`]: [`GaConfig`] parameters and validation
//! - [`runner`]: The generational loop
//! - [`sweep`]: Hyperparameter sweep driver with stream reporting
//!
//! # Example
//!
//! ```
//! use queens_ga::{conflicts, GaConfig, GaRunner};
//!
//! let config = GaConfig::default()
//!     .with_generations(20)
//!     .with_population_size(30)
//!     .with_tournament_size(5)
//!     .with_mutation_rate(0.25)
//!     .with_seed(42);
//!
//! let result = GaRunner::run(&config);
//! assert_eq!(result.best_conflicts, conflicts(&result.best));
//! ```

pub mod board;
pub mod config;
pub mod fitness;
pub mod operators;
pub mod runner;
pub mod selection;
pub mod sweep;

pub use board::{attacks, Candidate, BOARD_SIZE};
pub use config::GaConfig;
pub use fitness::{conflicts, MAX_CONFLICTS};
pub use runner::{GaResult, GaRunner};
