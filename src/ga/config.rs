//! GA configuration.
//!
//! [`GaConfig`] holds all parameters that control the evolutionary loop.

use crate::error::{TspError, TspResult};

/// Configuration for the genetic search.
///
/// Controls population size, parent selection, the adaptive mutation rate,
/// termination conditions, and parallelism.
///
/// # Defaults
///
/// ```
/// use tsp_metaheur::ga::GaConfig;
///
/// let config = GaConfig::default();
/// assert_eq!(config.population_size, 1566);
/// assert_eq!(config.max_generations, 3761);
/// assert_eq!(config.stagnation_limit, 33);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use tsp_metaheur::ga::GaConfig;
///
/// let config = GaConfig::default()
///     .with_population_size(200)
///     .with_elite_fraction(0.25)
///     .with_mutation_bounds(0.05, 0.6)
///     .with_seed(7);
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GaConfig {
    /// Number of individuals in the population.
    ///
    /// Must not exceed `n!` for an `n`-city instance, since the first
    /// generation consists of distinct tours.
    pub population_size: usize,

    /// Maximum number of generations before termination.
    pub max_generations: usize,

    /// Generations without a strict improvement before stopping.
    ///
    /// Set to 0 to disable stagnation-based termination.
    pub stagnation_limit: usize,

    /// Fraction of the population selected as parents each generation.
    ///
    /// The parent count is `max(1, round(selection_ratio · population_size))`.
    pub selection_ratio: f64,

    /// Fraction of the selected parents taken by rank (elitism).
    ///
    /// `ceil(elite_fraction · k)` of the `k` parents are the best
    /// individuals; the rest are drawn by roulette.
    pub elite_fraction: f64,

    /// Mutation rate for the first generation.
    pub initial_mutation_rate: f64,

    /// Lower bound for the adaptive mutation rate.
    pub min_mutation_rate: f64,

    /// Upper bound for the adaptive mutation rate.
    pub max_mutation_rate: f64,

    /// Amount the rate moves after each generation: down on improvement,
    /// up otherwise.
    pub mutation_step: f64,

    /// Whether to evaluate individuals in parallel using rayon.
    pub parallel: bool,

    /// Random seed for reproducibility.
    ///
    /// `None` uses a random seed.
    pub seed: Option<u64>,
}

impl Default for GaConfig {
    fn default() -> Self {
        Self {
            population_size: 1566,
            max_generations: 3761,
            stagnation_limit: 33,
            selection_ratio: 0.17,
            elite_fraction: 0.2,
            initial_mutation_rate: 0.42,
            min_mutation_rate: 0.01,
            max_mutation_rate: 0.8,
            mutation_step: 0.01,
            parallel: true,
            seed: None,
        }
    }
}

impl GaConfig {
    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the maximum number of generations.
    pub fn with_max_generations(mut self, n: usize) -> Self {
        self.max_generations = n;
        self
    }

    /// Sets the stagnation limit (0 to disable).
    pub fn with_stagnation_limit(mut self, limit: usize) -> Self {
        self.stagnation_limit = limit;
        self
    }

    /// Sets the fraction of the population kept as parents.
    pub fn with_selection_ratio(mut self, ratio: f64) -> Self {
        self.selection_ratio = ratio.clamp(0.0, 1.0);
        self
    }

    /// Sets the elite share of the selected parents.
    pub fn with_elite_fraction(mut self, fraction: f64) -> Self {
        self.elite_fraction = fraction.clamp(0.0, 1.0);
        self
    }

    /// Sets the starting mutation rate.
    pub fn with_initial_mutation_rate(mut self, rate: f64) -> Self {
        self.initial_mutation_rate = rate.clamp(0.0, 1.0);
        self
    }

    /// Sets the floor and ceiling of the adaptive mutation rate.
    pub fn with_mutation_bounds(mut self, min: f64, max: f64) -> Self {
        self.min_mutation_rate = min.clamp(0.0, 1.0);
        self.max_mutation_rate = max.clamp(0.0, 1.0);
        self
    }

    /// Sets the per-generation adjustment of the mutation rate.
    pub fn with_mutation_step(mut self, step: f64) -> Self {
        self.mutation_step = step.max(0.0);
        self
    }

    /// Enables or disables parallel evaluation.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Preset for small instances and quick experiments.
    ///
    /// - Population: 200, Generations: 500, Stagnation limit: 100
    pub fn fast() -> Self {
        Self {
            population_size: 200,
            max_generations: 500,
            stagnation_limit: 100,
            ..Self::default()
        }
    }

    /// Number of parents selected each generation.
    pub fn parent_count(&self) -> usize {
        let k = (self.population_size as f64 * self.selection_ratio).round() as usize;
        k.clamp(1, self.population_size.max(1))
    }

    /// Validates the configuration.
    ///
    /// # Errors
    /// [`TspError::Config`] describing the first invalid parameter.
    pub fn validate(&self) -> TspResult<()> {
        if self.population_size == 0 {
            return Err(TspError::config("population_size must be at least 1"));
        }
        if self.max_generations == 0 {
            return Err(TspError::config("max_generations must be at least 1"));
        }
        if !(self.selection_ratio > 0.0 && self.selection_ratio <= 1.0) {
            return Err(TspError::config("selection_ratio must be in (0, 1]"));
        }
        if !(0.0..=1.0).contains(&self.elite_fraction) {
            return Err(TspError::config("elite_fraction must be in [0, 1]"));
        }
        if self.min_mutation_rate > self.max_mutation_rate {
            return Err(TspError::config(
                "min_mutation_rate must not exceed max_mutation_rate",
            ));
        }
        if !(0.0..=1.0).contains(&self.min_mutation_rate)
            || !(0.0..=1.0).contains(&self.max_mutation_rate)
        {
            return Err(TspError::config("mutation rate bounds must be in [0, 1]"));
        }
        if !(0.0..=1.0).contains(&self.initial_mutation_rate) {
            return Err(TspError::config("initial_mutation_rate must be in [0, 1]"));
        }
        if !(self.mutation_step >= 0.0 && self.mutation_step.is_finite()) {
            return Err(TspError::config("mutation_step must be non-negative"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GaConfig::default();
        assert_eq!(config.population_size, 1566);
        assert_eq!(config.max_generations, 3761);
        assert_eq!(config.stagnation_limit, 33);
        assert!((config.selection_ratio - 0.17).abs() < 1e-10);
        assert!((config.elite_fraction - 0.2).abs() < 1e-10);
        assert!((config.initial_mutation_rate - 0.42).abs() < 1e-10);
        assert!((config.min_mutation_rate - 0.01).abs() < 1e-10);
        assert!((config.max_mutation_rate - 0.8).abs() < 1e-10);
        assert!((config.mutation_step - 0.01).abs() < 1e-10);
        assert!(config.parallel);
        assert!(config.seed.is_none());
    }

    #[test]
    fn test_builder_pattern() {
        let config = GaConfig::default()
            .with_population_size(200)
            .with_max_generations(1000)
            .with_stagnation_limit(100)
            .with_selection_ratio(0.3)
            .with_elite_fraction(0.1)
            .with_initial_mutation_rate(0.2)
            .with_mutation_bounds(0.05, 0.5)
            .with_mutation_step(0.02)
            .with_parallel(false)
            .with_seed(42);

        assert_eq!(config.population_size, 200);
        assert_eq!(config.max_generations, 1000);
        assert_eq!(config.stagnation_limit, 100);
        assert!((config.selection_ratio - 0.3).abs() < 1e-10);
        assert!((config.elite_fraction - 0.1).abs() < 1e-10);
        assert!((config.initial_mutation_rate - 0.2).abs() < 1e-10);
        assert!((config.min_mutation_rate - 0.05).abs() < 1e-10);
        assert!((config.max_mutation_rate - 0.5).abs() < 1e-10);
        assert!((config.mutation_step - 0.02).abs() < 1e-10);
        assert!(!config.parallel);
        assert_eq!(config.seed, Some(42));
    }

    #[test]
    fn test_validate_ok() {
        assert!(GaConfig::default().validate().is_ok());
        assert!(GaConfig::fast().validate().is_ok());
    }

    #[test]
    fn test_validate_zero_population() {
        let config = GaConfig::default().with_population_size(0);
        assert!(matches!(config.validate(), Err(TspError::Config(_))));
    }

    #[test]
    fn test_validate_zero_generations() {
        let config = GaConfig::default().with_max_generations(0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_zero_selection_ratio() {
        let config = GaConfig::default().with_selection_ratio(0.0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_inverted_bounds() {
        let config = GaConfig::default().with_mutation_bounds(0.6, 0.2);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_clamp_rates() {
        let config = GaConfig::default()
            .with_elite_fraction(1.5)
            .with_initial_mutation_rate(-0.5)
            .with_mutation_step(-1.0);

        assert!((config.elite_fraction - 1.0).abs() < 1e-10);
        assert!(config.initial_mutation_rate.abs() < 1e-10);
        assert!(config.mutation_step.abs() < 1e-10);
    }

    #[test]
    fn test_parent_count() {
        assert_eq!(GaConfig::default().parent_count(), 266);
        assert_eq!(GaConfig::default().with_population_size(3).parent_count(), 1);
        assert_eq!(
            GaConfig::default()
                .with_population_size(10)
                .with_selection_ratio(1.0)
                .parent_count(),
            10
        );
    }

    #[test]
    fn test_preset_fast() {
        let config = GaConfig::fast().with_seed(1);
        assert_eq!(config.population_size, 200);
        assert_eq!(config.max_generations, 500);
        assert_eq!(config.stagnation_limit, 100);
        assert_eq!(config.seed, Some(1));
    }
}
