//! Hyperparameter sweep driver.
//!
//! Runs the GA over a grid of (generations, population size, tournament
//! size, mutation rate) combinations with elitism always on, reporting each
//! new global best and each zero-conflict solution as human-readable lines
//! on an injected writer. The running global best is owned by the sweep, and
//! one RNG stream is threaded through every run in grid order, so a seeded
//! sweep is fully reproducible.

use crate::board::Candidate;
use crate::config::GaConfig;
use crate::fitness::conflicts;
use crate::runner::GaRunner;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::io::{self, Write};
use std::ops::Range;

/// One point in the hyperparameter grid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SweepParams {
    pub generations: usize,
    pub population_size: usize,
    pub tournament_size: usize,
    pub mutation_rate: f64,
}

/// The grid of hyperparameter combinations to try.
///
/// Tournament sizes are derived per population size `n` as `1..n`. Elitism
/// is always enabled.
///
/// ```
/// use queens_ga::sweep::SweepGrid;
///
/// let grid = SweepGrid::default()
///     .with_generations(5..8)
///     .with_population_sizes(10..12)
///     .with_seed(42);
/// ```
#[derive(Debug, Clone)]
pub struct SweepGrid {
    /// Generation counts to try.
    pub generations: Range<usize>,

    /// Population sizes to try.
    pub population_sizes: Range<usize>,

    /// Mutation rates to try.
    pub mutation_rates: Vec<f64>,

    /// Random seed for the sweep-wide RNG stream.
    ///
    /// `None` uses a random seed.
    pub seed: Option<u64>,
}

impl Default for SweepGrid {
    fn default() -> Self {
        Self {
            generations: 5..20,
            population_sizes: 10..30,
            mutation_rates: vec![0.0, 0.25, 0.5, 0.75, 1.0],
            seed: None,
        }
    }
}

impl SweepGrid {
    /// Sets the generation-count range.
    pub fn with_generations(mut self, generations: Range<usize>) -> Self {
        self.generations = generations;
        self
    }

    /// Sets the population-size range.
    pub fn with_population_sizes(mut self, sizes: Range<usize>) -> Self {
        self.population_sizes = sizes;
        self
    }

    /// Sets the mutation rates to try.
    pub fn with_mutation_rates(mut self, rates: Vec<f64>) -> Self {
        self.mutation_rates = rates;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

/// Aggregate outcome of a sweep.
#[derive(Debug, Clone)]
pub struct SweepOutcome {
    /// Lowest conflict count observed across the whole grid.
    pub best_conflicts: u32,

    /// Parameters that first reached `best_conflicts`, if any run happened.
    pub best_params: Option<SweepParams>,

    /// Every zero-conflict candidate found, with the parameters that
    /// produced it, in discovery order.
    pub solutions: Vec<(SweepParams, Candidate)>,
}

/// Runs the GA for every combination in `grid`, writing report lines to
/// `out`.
///
/// A line is written whenever a run's result beats the running global best,
/// and whenever a run returns a zero-conflict board (including the board
/// itself). Errors from the writer are propagated.
pub fn run_sweep<W: Write>(grid: &SweepGrid, out: &mut W) -> io::Result<SweepOutcome> {
    let mut rng = match grid.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::seed_from_u64(rand::random()),
    };

    let mut best_conflicts = u32::MAX;
    let mut best_params = None;
    let mut solutions = Vec::new();

    for g in grid.generations.clone() {
        for n in grid.population_sizes.clone() {
            for k in 1..n {
                for &m in &grid.mutation_rates {
                    let config = GaConfig::default()
                        .with_generations(g)
                        .with_population_size(n)
                        .with_tournament_size(k)
                        .with_mutation_rate(m)
                        .with_elitism(true);

                    let result = GaRunner::run_with_rng(&config, &mut rng);
                    let score = conflicts(&result.best);
                    let params = SweepParams {
                        generations: g,
                        population_size: n,
                        tournament_size: k,
                        mutation_rate: m,
                    };

                    if score < best_conflicts {
                        writeln!(
                            out,
                            "new best found with g={g} n={n} k={k} m={m} with value={score}"
                        )?;
                        best_conflicts = score;
                        best_params = Some(params);
                    }
                    if score == 0 {
                        writeln!(
                            out,
                            "solution found with g={g} n={n} k={k} m={m}, solution={}",
                            result.best
                        )?;
                        solutions.push((params, result.best));
                    }
                }
            }
        }
    }

    Ok(SweepOutcome {
        best_conflicts,
        best_params,
        solutions,
    })
}
