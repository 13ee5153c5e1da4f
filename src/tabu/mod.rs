//! Tabu Search (TS).
//!
//! A single-solution trajectory metaheuristic that keeps a short memory of
//! recently accepted tours and refuses to return to them, which pushes the
//! search out of local minima instead of cycling.
//!
//! # References
//!
//! - Glover, F. (1989). "Tabu Search—Part I", *ORSA Journal on Computing* 1(3), 190-206.
//! - Glover, F. (1990). "Tabu Search—Part II", *ORSA Journal on Computing* 2(1), 4-32.

mod config;
mod memory;
mod runner;

pub use config::TabuConfig;
pub use memory::TabuMemory;
pub use runner::{generate_neighbor, TabuSearch};
