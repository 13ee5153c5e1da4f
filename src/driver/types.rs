//! Run outcome types.

use std::time::Duration;

use crate::geometry::Tour;

/// Why a run stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StopReason {
    /// The strategy's own termination policy was met.
    StrategyFinished,
    /// The driver's step cap was reached.
    StepLimit,
    /// The wall-clock budget ran out.
    TimeLimit,
    /// The cancellation flag was raised.
    Cancelled,
}

/// Result of a driver run.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SolveReport {
    /// Name of the strategy that produced the tour.
    pub strategy: String,
    /// Best tour found (0-based city indices).
    pub tour: Tour,
    /// Closed-cycle length of `tour`.
    pub cost: f64,
    /// Steps executed.
    pub steps: usize,
    pub stop_reason: StopReason,
    /// Best-known cost before the first step and after every step.
    pub cost_history: Vec<f64>,
    pub elapsed: Duration,
}

impl SolveReport {
    /// The best tour with 1-based city numbers, as TSPLIB tours are written.
    pub fn one_based_tour(&self) -> Vec<usize> {
        self.tour.to_one_based()
    }
}
