//! Step loop shared by every strategy.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use super::config::{DriverConfig, StrategyConfig};
use super::types::{SolveReport, StopReason};
use crate::aco::AntColonySearch;
use crate::error::TspResult;
use crate::ga::GeneticSearch;
use crate::geometry::{DistanceOracle, Instance};
use crate::optimizer::Optimizer;
use crate::tabu::TabuSearch;

/// Runs a configured strategy on an instance.
pub struct Driver;

impl Driver {
    /// Solves `instance` with the configured strategy.
    ///
    /// # Errors
    /// [`TspError::Config`](crate::TspError::Config) if the configuration is
    /// invalid; raised before any step runs.
    ///
    /// # Examples
    ///
    /// ```
    /// use tsp_metaheur::driver::{Driver, DriverConfig};
    /// use tsp_metaheur::geometry::Instance;
    /// use tsp_metaheur::tabu::TabuConfig;
    ///
    /// let square = [(0.0, 0.0), (0.0, 1.0), (1.0, 1.0), (1.0, 0.0)];
    /// let instance = Instance::from_coords("square", &square).unwrap();
    /// let config = DriverConfig::new(TabuConfig::default().with_seed(7))
    ///     .with_max_steps(100);
    ///
    /// let report = Driver::run(&instance, &config).unwrap();
    /// assert!((report.cost - 4.0).abs() < 1e-9);
    /// ```
    pub fn run(instance: &Instance, config: &DriverConfig) -> TspResult<SolveReport> {
        Self::run_with_cancel(instance, config, None)
    }

    /// Like [`run`](Self::run), stopping early once `cancel` is set.
    ///
    /// The flag is checked between steps only.
    #[tracing::instrument(skip_all, fields(instance = instance.name(), cities = instance.len()))]
    pub fn run_with_cancel(
        instance: &Instance,
        config: &DriverConfig,
        cancel: Option<Arc<AtomicBool>>,
    ) -> TspResult<SolveReport> {
        config.validate()?;
        let start = Instant::now();

        let oracle = Arc::new(DistanceOracle::new(instance));
        oracle.warm_up();
        let mut optimizer = build_optimizer(oracle, &config.strategy)?;

        tracing::info!(
            strategy = optimizer.name(),
            cost = optimizer.best().cost(),
            "starting search"
        );

        let deadline = config.time_limit_ms.map(Duration::from_millis);
        let mut cost_history = vec![optimizer.best().cost()];

        let stop_reason = loop {
            if cancel.as_ref().is_some_and(|c| c.load(Ordering::Relaxed)) {
                break StopReason::Cancelled;
            }
            if optimizer.is_finished() {
                break StopReason::StrategyFinished;
            }
            if config.max_steps.is_some_and(|m| optimizer.steps() >= m) {
                break StopReason::StepLimit;
            }
            if deadline.is_some_and(|d| start.elapsed() >= d) {
                break StopReason::TimeLimit;
            }

            optimizer.step();
            cost_history.push(optimizer.best().cost());

            let steps = optimizer.steps();
            if config.report_interval > 0 && steps % config.report_interval == 0 {
                tracing::info!(
                    step = steps,
                    best_cost = optimizer.best().cost(),
                    elapsed_ms = start.elapsed().as_millis() as u64,
                    "progress"
                );
            }
        };

        let best = optimizer.best();
        let report = SolveReport {
            strategy: optimizer.name().to_string(),
            tour: best.tour().clone(),
            cost: best.cost(),
            steps: optimizer.steps(),
            stop_reason,
            cost_history,
            elapsed: start.elapsed(),
        };

        tracing::info!(
            cost = report.cost,
            steps = report.steps,
            reason = ?report.stop_reason,
            elapsed_ms = report.elapsed.as_millis() as u64,
            "search finished"
        );
        Ok(report)
    }
}

fn build_optimizer(
    oracle: Arc<DistanceOracle>,
    strategy: &StrategyConfig,
) -> TspResult<Box<dyn Optimizer>> {
    Ok(match strategy {
        StrategyConfig::Genetic(c) => Box::new(GeneticSearch::new(oracle, c.clone())?),
        StrategyConfig::AntColony(c) => Box::new(AntColonySearch::new(oracle, c.clone())?),
        StrategyConfig::Tabu(c) => Box::new(TabuSearch::new(oracle, c.clone())?),
    })
}
