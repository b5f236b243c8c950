//! GA configuration.
//!
//! [`GaConfig`] holds all parameters that control the generational loop.

/// Configuration for one GA run.
///
/// # Defaults
///
/// ```
/// use queens_ga::GaConfig;
///
/// let config = GaConfig::default();
/// assert_eq!(config.generations, 20);
/// assert_eq!(config.population_size, 30);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use queens_ga::GaConfig;
///
/// let config = GaConfig::default()
///     .with_generations(15)
///     .with_tournament_size(4)
///     .with_mutation_rate(0.5)
///     .with_seed(42);
/// ```
#[derive(Debug, Clone)]
pub struct GaConfig {
    /// Number of generations to run.
    ///
    /// Zero is permitted: the run returns the best of the initial random
    /// population without any evolution.
    pub generations: usize,

    /// Number of candidates in the population.
    pub population_size: usize,

    /// Number of candidates sampled (with replacement) per tournament.
    ///
    /// Must be in `1..=population_size`.
    pub tournament_size: usize,

    /// Probability that a child receives a single-gene mutation (0.0–1.0).
    pub mutation_rate: f64,

    /// Whether the current best candidate is copied unchanged into the next
    /// generation, bypassing crossover and mutation.
    pub elitism: bool,

    /// Random seed for reproducibility.
    ///
    /// `None` uses a random seed.
    pub seed: Option<u64>,
}

impl Default for GaConfig {
    fn default() -> Self {
        Self {
            generations: 20,
            population_size: 30,
            tournament_size: 5,
            mutation_rate: 0.25,
            elitism: true,
            seed: None,
        }
    }
}

impl GaConfig {
    /// Sets the generation count.
    pub fn with_generations(mut self, g: usize) -> Self {
        self.generations = g;
        self
    }

    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the tournament size.
    pub fn with_tournament_size(mut self, k: usize) -> Self {
        self.tournament_size = k;
        self
    }

    /// Sets the mutation rate, clamped to `[0, 1]`.
    pub fn with_mutation_rate(mut self, m: f64) -> Self {
        self.mutation_rate = m.clamp(0.0, 1.0);
        self
    }

    /// Enables or disables elitism.
    pub fn with_elitism(mut self, e: bool) -> Self {
        self.elitism = e;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    ///
    /// Returns `Err` with a description if any parameter is invalid.
    pub fn validate(&self) -> Result<(), String> {
        if self.population_size == 0 {
            return Err("population_size must be at least 1".into());
        }
        if self.tournament_size == 0 {
            return Err("tournament_size must be at least 1".into());
        }
        if self.tournament_size > self.population_size {
            return Err("tournament_size must not exceed population_size".into());
        }
        if !(0.0..=1.0).contains(&self.mutation_rate) {
            return Err("mutation_rate must be in [0, 1]".into());
        }
        Ok(())
    }
}
