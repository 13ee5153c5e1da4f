//! The capability shared by every search strategy.
//!
//! A strategy owns its own state and advances it one generation or
//! iteration per [`step`](Optimizer::step). The driver only ever talks to
//! this trait, so it does not need to know which strategy it is running.

use crate::geometry::BestKnown;

/// A step-driven TSP search strategy.
pub trait Optimizer: Send {
    /// Human-readable strategy name.
    fn name(&self) -> &'static str;

    /// Runs one generation / iteration.
    ///
    /// Returns `true` when the best-known cost strictly improved.
    fn step(&mut self) -> bool;

    /// Best tour found so far. Defined from construction onward.
    fn best(&self) -> &BestKnown;

    /// Steps executed so far.
    fn steps(&self) -> usize;

    /// Whether the strategy's own termination policy has been met.
    fn is_finished(&self) -> bool;
}
