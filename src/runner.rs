//! GA generational loop execution.
//!
//! [`GaRunner`] orchestrates the complete evolutionary process:
//! initialization → elitism → selection → crossover → mutation → replacement.

use crate::board::{Candidate, BOARD_SIZE};
use crate::config::GaConfig;
use crate::fitness::conflicts;
use crate::operators::{mutate, one_point_crossover};
use crate::selection::select_parent;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Result of one GA run.
#[derive(Debug, Clone)]
pub struct GaResult {
    /// The best candidate in the final population.
    pub best: Candidate,

    /// Conflict count of `best` (same as `conflicts(&best)`).
    pub best_conflicts: u32,

    /// Number of generations executed.
    pub generations: usize,

    /// Best conflict count at initialization and after each generation
    /// (`generations + 1` entries).
    pub conflict_history: Vec<u32>,
}

/// Executes the GA generational loop.
///
/// # Usage
///
/// ```
/// use queens_ga::{conflicts, GaConfig, GaRunner};
///
/// let config = GaConfig::default().with_seed(42);
/// let result = GaRunner::run(&config);
/// assert_eq!(result.best_conflicts, conflicts(&result.best));
/// ```
pub struct GaRunner;

impl GaRunner {
    /// Runs the GA with its own RNG, seeded from [`GaConfig::seed`] or
    /// randomly when no seed is set.
    ///
    /// # Panics
    /// Panics if the configuration is invalid (call [`GaConfig::validate`]
    /// first to get a descriptive error).
    pub fn run(config: &GaConfig) -> GaResult {
        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::seed_from_u64(rand::random()),
        };
        Self::run_with_rng(config, &mut rng)
    }

    /// Runs the GA drawing all randomness from `rng`.
    ///
    /// Callers that execute many runs in sequence (the hyperparameter sweep)
    /// thread one RNG through every call, so the whole sequence is
    /// reproducible from a single seed.
    ///
    /// With elitism and an even population size, the offspring loop pushes
    /// children in pairs past the elite and the next generation holds
    /// `population_size + 1` candidates. The overshoot is kept, not
    /// truncated.
    ///
    /// # Panics
    /// Panics if the configuration is invalid.
    pub fn run_with_rng<R: Rng>(config: &GaConfig, rng: &mut R) -> GaResult {
        config.validate().expect("invalid GaConfig");

        let mut population: Vec<Candidate> = (0..config.population_size)
            .map(|_| Candidate::random(rng))
            .collect();

        let mut conflict_history = Vec::with_capacity(config.generations + 1);
        conflict_history.push(conflicts(find_best(&population)));

        for _ in 0..config.generations {
            let mut next_gen: Vec<Candidate> =
                Vec::with_capacity(config.population_size + 1);

            if config.elitism {
                next_gen.push(*find_best(&population));
            }

            while next_gen.len() < config.population_size {
                let parent1 = select_parent(&population, config.tournament_size, rng);
                let parent2 = select_parent(&population, config.tournament_size, rng);

                let index = rng.random_range(0..=BOARD_SIZE);
                let (child_a, child_b) = one_point_crossover(parent1, parent2, index);

                next_gen.push(mutate(&child_a, config.mutation_rate, rng));
                next_gen.push(mutate(&child_b, config.mutation_rate, rng));
            }

            population = next_gen;
            conflict_history.push(conflicts(find_best(&population)));
        }

        let best = *find_best(&population);
        GaResult {
            best_conflicts: conflicts(&best),
            best,
            generations: config.generations,
            conflict_history,
        }
    }
}

/// Candidate with the fewest conflicts; first occurrence wins ties.
fn find_best(population: &[Candidate]) -> &Candidate {
    population
        .iter()
        .min_by_key(|c| conflicts(c))
        .expect("population must not be empty")
}
