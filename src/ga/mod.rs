//! Genetic search.
//!
//! A generational GA over permutation tours with the parent pool built from
//! elites plus roulette draws, order crossover, inversion mutation, and a
//! mutation rate that adapts to progress: it drops while the best tour keeps
//! improving and climbs while the search stagnates.
//!
//! # Key Types
//!
//! - [`GaConfig`]: Algorithm parameters (population, selection, mutation bounds)
//! - [`GeneticSearch`]: The step-driven search state
//! - [`Individual`]: A tour with its cached cost
//!
//! # Submodules
//!
//! - [`operators`]: Order crossover and inversion mutation
//! - [`selection`]: Elitism + roulette parent selection
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*

mod config;
pub mod operators;
mod runner;
pub mod selection;
mod types;

pub use config::GaConfig;
pub use runner::GeneticSearch;
pub use types::Individual;
