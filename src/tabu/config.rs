//! Tabu Search configuration.

use crate::error::{TspError, TspResult};

/// Configuration parameters for Tabu Search.
///
/// # Examples
///
/// ```
/// use tsp_metaheur::tabu::TabuConfig;
///
/// let config = TabuConfig::default()
///     .with_max_iterations(1000)
///     .with_capacity(7)
///     .with_neighborhood_size(50);
/// assert_eq!(config.max_iterations, 1000);
/// assert_eq!(config.capacity, 7);
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TabuConfig {
    /// Maximum number of iterations; the only termination condition.
    pub max_iterations: usize,
    /// How many recently accepted tours stay forbidden.
    pub capacity: usize,
    /// Swap neighbors sampled per iteration.
    pub neighborhood_size: usize,
    /// Extra samples of the whole neighborhood when every neighbor is tabu.
    pub max_resamples: usize,
    /// Whether neighbors are generated and evaluated in parallel using rayon.
    pub parallel: bool,
    /// Random seed (None for random).
    pub seed: Option<u64>,
}

impl Default for TabuConfig {
    fn default() -> Self {
        Self {
            max_iterations: 100_000,
            capacity: 10,
            neighborhood_size: 100,
            max_resamples: 3,
            parallel: false,
            seed: None,
        }
    }
}

impl TabuConfig {
    /// Sets the maximum number of iterations.
    pub fn with_max_iterations(mut self, n: usize) -> Self {
        self.max_iterations = n;
        self
    }

    /// Sets the tabu memory capacity.
    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    /// Sets the number of neighbors sampled per iteration.
    pub fn with_neighborhood_size(mut self, n: usize) -> Self {
        self.neighborhood_size = n;
        self
    }

    /// Sets how many times an all-tabu neighborhood is resampled.
    pub fn with_max_resamples(mut self, n: usize) -> Self {
        self.max_resamples = n;
        self
    }

    /// Enables or disables parallel neighbor evaluation.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Sets the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    ///
    /// # Errors
    /// [`TspError::Config`] describing the first invalid parameter.
    pub fn validate(&self) -> TspResult<()> {
        if self.max_iterations == 0 {
            return Err(TspError::config("max_iterations must be at least 1"));
        }
        if self.capacity == 0 {
            return Err(TspError::config("tabu capacity must be at least 1"));
        }
        if self.neighborhood_size == 0 {
            return Err(TspError::config("neighborhood_size must be at least 1"));
        }
        Ok(())
    }
}
