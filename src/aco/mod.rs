//! Ant Colony Optimization (Ant System).
//!
//! A colony of ants repeatedly builds tours guided by pheromone trails and
//! inverse-distance visibility; good tours reinforce their edges while
//! evaporation forgets stale ones.
//!
//! # References
//!
//! - Dorigo, M., Maniezzo, V., & Colorni, A. (1996). "Ant System:
//!   Optimization by a Colony of Cooperating Agents", *IEEE Trans. SMC-B* 26(1).

mod config;
mod matrix;
mod runner;

pub use config::AcoConfig;
pub use matrix::SquareMatrix;
pub use runner::AntColonySearch;
