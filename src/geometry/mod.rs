//! Shared geometric substrate for every strategy.
//!
//! - [`Point`] / [`Instance`]: the immutable city list; a city's position in
//!   the list is its identifier.
//! - [`DistanceOracle`]: lazily memoized, symmetric Euclidean distances,
//!   safe to share across worker threads.
//! - [`Tour`]: a permutation of city indices with cycle-cost evaluation.
//! - [`BestKnown`]: the best tour seen so far and its cost.

mod best;
mod distance;
mod instance;
mod tour;

pub use best::BestKnown;
pub use distance::DistanceOracle;
pub use instance::{Instance, Point};
pub use tour::Tour;
