//! Driver configuration.

use crate::aco::AcoConfig;
use crate::error::{TspError, TspResult};
use crate::ga::GaConfig;
use crate::tabu::TabuConfig;

/// Which strategy to run, with its parameters.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StrategyConfig {
    Genetic(GaConfig),
    AntColony(AcoConfig),
    Tabu(TabuConfig),
}

impl StrategyConfig {
    /// Validates the wrapped strategy configuration.
    pub fn validate(&self) -> TspResult<()> {
        match self {
            Self::Genetic(c) => c.validate(),
            Self::AntColony(c) => c.validate(),
            Self::Tabu(c) => c.validate(),
        }
    }

    /// Overrides the seed of the wrapped configuration.
    pub fn with_seed(self, seed: u64) -> Self {
        match self {
            Self::Genetic(c) => Self::Genetic(c.with_seed(seed)),
            Self::AntColony(c) => Self::AntColony(c.with_seed(seed)),
            Self::Tabu(c) => Self::Tabu(c.with_seed(seed)),
        }
    }
}

impl From<GaConfig> for StrategyConfig {
    fn from(c: GaConfig) -> Self {
        Self::Genetic(c)
    }
}

impl From<AcoConfig> for StrategyConfig {
    fn from(c: AcoConfig) -> Self {
        Self::AntColony(c)
    }
}

impl From<TabuConfig> for StrategyConfig {
    fn from(c: TabuConfig) -> Self {
        Self::Tabu(c)
    }
}

/// Run-level options around a strategy.
///
/// The strategy's own termination policy always applies; `max_steps` and
/// `time_limit_ms` can only stop a run earlier.
///
/// # Examples
///
/// ```
/// use tsp_metaheur::driver::DriverConfig;
/// use tsp_metaheur::tabu::TabuConfig;
///
/// let config = DriverConfig::new(TabuConfig::default().with_seed(1))
///     .with_max_steps(5_000)
///     .with_time_limit_ms(2_000)
///     .with_report_interval(500);
/// assert_eq!(config.max_steps, Some(5_000));
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DriverConfig {
    /// Strategy and its parameters.
    pub strategy: StrategyConfig,
    /// Hard cap on steps, on top of the strategy's own policy.
    pub max_steps: Option<usize>,
    /// Wall-clock budget in milliseconds, checked between steps.
    pub time_limit_ms: Option<u64>,
    /// Emit a progress event every this many steps (0 disables).
    pub report_interval: usize,
}

impl DriverConfig {
    pub fn new(strategy: impl Into<StrategyConfig>) -> Self {
        Self {
            strategy: strategy.into(),
            max_steps: None,
            time_limit_ms: None,
            report_interval: 100,
        }
    }

    /// Sets the step cap.
    pub fn with_max_steps(mut self, n: usize) -> Self {
        self.max_steps = Some(n);
        self
    }

    /// Sets the wall-clock budget.
    pub fn with_time_limit_ms(mut self, ms: u64) -> Self {
        self.time_limit_ms = Some(ms);
        self
    }

    /// Sets the progress reporting interval.
    pub fn with_report_interval(mut self, n: usize) -> Self {
        self.report_interval = n;
        self
    }

    /// Validates the strategy configuration and the run options.
    ///
    /// # Errors
    /// [`TspError::Config`] describing the first invalid parameter.
    pub fn validate(&self) -> TspResult<()> {
        if self.max_steps == Some(0) {
            return Err(TspError::config("max_steps must be at least 1"));
        }
        self.strategy.validate()
    }
}

impl Default for DriverConfig {
    fn default() -> Self {
        Self::new(GaConfig::default())
    }
}
