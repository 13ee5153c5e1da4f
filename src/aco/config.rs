//! Ant colony configuration.

use crate::error::{TspError, TspResult};

/// Configuration for the ant colony search (Ant System).
///
/// # Transition Rule
///
/// From city `i`, an ant moves to unvisited city `j` with probability
/// proportional to `τ(i,j)^alpha · η(i,j)^beta`, where `τ` is pheromone and
/// `η = 1 / d(i,j)` is visibility.
///
/// # Pheromone Update
///
/// After all ants finish, every entry is multiplied by
/// `1 - evaporation_rate`, then each ant adds `deposit / L` to both
/// directions of every edge on its closed tour of length `L`.
///
/// # References
///
/// Dorigo, Maniezzo & Colorni (1996), "Ant System: Optimization by a Colony
/// of Cooperating Agents"
///
/// # Examples
///
/// ```
/// use tsp_metaheur::aco::AcoConfig;
///
/// let config = AcoConfig::default()
///     .with_num_ants(30)
///     .with_max_iterations(200)
///     .with_evaporation_rate(0.5)
///     .with_seed(42);
/// assert_eq!(config.num_ants, 30);
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AcoConfig {
    /// Ants (paths built) per iteration.
    pub num_ants: usize,

    /// Number of iterations; the only termination condition.
    pub max_iterations: usize,

    /// Pheromone exponent (alpha).
    pub alpha: f64,

    /// Visibility exponent (beta).
    pub beta: f64,

    /// Fraction of pheromone removed each iteration, in [0, 1].
    pub evaporation_rate: f64,

    /// Pheromone amount `Q` spread as `Q / L` over a tour of length `L`.
    pub deposit: f64,

    /// Initial pheromone entries are drawn uniformly from
    /// `[initial_pheromone_min, initial_pheromone_max)`.
    pub initial_pheromone_min: f64,

    /// Upper end of the initial pheromone range.
    pub initial_pheromone_max: f64,

    /// Whether ants build their paths in parallel using rayon.
    ///
    /// Results are identical either way for a fixed seed.
    pub parallel: bool,

    /// Random seed (None for random).
    pub seed: Option<u64>,
}

impl Default for AcoConfig {
    fn default() -> Self {
        Self {
            num_ants: 100,
            max_iterations: 500,
            alpha: 1.0,
            beta: 2.0,
            evaporation_rate: 0.3,
            deposit: 1.0,
            initial_pheromone_min: 0.1,
            initial_pheromone_max: 1.0,
            parallel: true,
            seed: None,
        }
    }
}

impl AcoConfig {
    /// Sets the number of ants.
    pub fn with_num_ants(mut self, n: usize) -> Self {
        self.num_ants = n;
        self
    }

    /// Sets the number of iterations.
    pub fn with_max_iterations(mut self, n: usize) -> Self {
        self.max_iterations = n;
        self
    }

    /// Sets the pheromone exponent (alpha).
    pub fn with_alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha;
        self
    }

    /// Sets the visibility exponent (beta).
    pub fn with_beta(mut self, beta: f64) -> Self {
        self.beta = beta;
        self
    }

    /// Sets the evaporation rate.
    pub fn with_evaporation_rate(mut self, rate: f64) -> Self {
        self.evaporation_rate = rate.clamp(0.0, 1.0);
        self
    }

    /// Sets the deposit amount.
    pub fn with_deposit(mut self, deposit: f64) -> Self {
        self.deposit = deposit;
        self
    }

    /// Sets the range of the initial pheromone entries.
    pub fn with_initial_pheromone(mut self, min: f64, max: f64) -> Self {
        self.initial_pheromone_min = min;
        self.initial_pheromone_max = max;
        self
    }

    /// Enables or disables parallel construction.
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
        if self.num_ants == 0 {
            return Err(TspError::config("num_ants must be at least 1"));
        }
        if self.max_iterations == 0 {
            return Err(TspError::config("max_iterations must be at least 1"));
        }
        if !self.alpha.is_finite() || !self.beta.is_finite() {
            return Err(TspError::config("alpha and beta must be finite"));
        }
        if !(0.0..=1.0).contains(&self.evaporation_rate) {
            return Err(TspError::config("evaporation_rate must be in [0, 1]"));
        }
        if !(self.deposit >= 0.0 && self.deposit.is_finite()) {
            return Err(TspError::config("deposit must be finite and non-negative"));
        }
        let (lo, hi) = (self.initial_pheromone_min, self.initial_pheromone_max);
        if !(lo >= 0.0 && hi.is_finite() && lo <= hi) {
            return Err(TspError::config(
                "initial pheromone range must satisfy 0 <= min <= max < inf",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aco_config_defaults() {
        let config = AcoConfig::default();
        assert_eq!(config.num_ants, 100);
        assert_eq!(config.max_iterations, 500);
        assert!((config.alpha - 1.0).abs() < 1e-10);
        assert!((config.beta - 2.0).abs() < 1e-10);
        assert!((config.evaporation_rate - 0.3).abs() < 1e-10);
        assert!((config.deposit - 1.0).abs() < 1e-10);
        assert!((config.initial_pheromone_min - 0.1).abs() < 1e-10);
        assert!((config.initial_pheromone_max - 1.0).abs() < 1e-10);
        assert!(config.parallel);
        assert!(config.seed.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_aco_config_builder() {
        let config = AcoConfig::default()
            .with_num_ants(50)
            .with_max_iterations(100)
            .with_alpha(2.0)
            .with_beta(3.0)
            .with_evaporation_rate(0.2)
            .with_deposit(5.0)
            .with_initial_pheromone(1.0, 1.0)
            .with_parallel(false)
            .with_seed(7);

        assert_eq!(config.num_ants, 50);
        assert_eq!(config.max_iterations, 100);
        assert!((config.alpha - 2.0).abs() < 1e-10);
        assert!((config.beta - 3.0).abs() < 1e-10);
        assert!((config.evaporation_rate - 0.2).abs() < 1e-10);
        assert!((config.deposit - 5.0).abs() < 1e-10);
        assert!(!config.parallel);
        assert_eq!(config.seed, Some(7));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_zero_ants() {
        let config = AcoConfig::default().with_num_ants(0);
        assert!(matches!(config.validate(), Err(TspError::Config(_))));
    }

    #[test]
    fn test_validate_zero_iterations() {
        assert!(AcoConfig::default().with_max_iterations(0).validate().is_err());
    }

    #[test]
    fn test_validate_negative_deposit() {
        assert!(AcoConfig::default().with_deposit(-1.0).validate().is_err());
    }

    #[test]
    fn test_validate_pheromone_range() {
        assert!(AcoConfig::default()
            .with_initial_pheromone(0.5, 0.1)
            .validate()
            .is_err());
        assert!(AcoConfig::default()
            .with_initial_pheromone(-0.1, 0.1)
            .validate()
            .is_err());
    }

    #[test]
    fn test_evaporation_clamped() {
        let config = AcoConfig::default().with_evaporation_rate(1.7);
        assert!((config.evaporation_rate - 1.0).abs() < 1e-10);
    }
}
