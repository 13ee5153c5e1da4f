//! Strategy-agnostic solve loop.
//!
//! Builds the distance oracle once, constructs the configured strategy
//! behind [`Optimizer`](crate::Optimizer), and steps it until the strategy
//! finishes, a step cap or time budget is hit, or the run is cancelled.
//! Progress is reported through `tracing`.

mod config;
mod runner;
mod types;

pub use config::{DriverConfig, StrategyConfig};
pub use runner::Driver;
pub use types::{SolveReport, StopReason};
