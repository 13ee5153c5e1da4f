//! Metaheuristic solvers for the Euclidean Traveling Salesman Problem.
//!
//! Three interchangeable strategies share one geometry and tour model:
//!
//! - **Genetic Search**: population of tours evolved with elitism plus
//!   roulette selection, order crossover, inversion mutation and an
//!   adaptive mutation rate.
//! - **Ant Colony Search**: Ant System construction guided by pheromone
//!   and inverse-distance visibility, with evaporate-then-deposit updates.
//! - **Tabu Search**: swap-neighborhood sampling with a bounded memory of
//!   recently accepted tours.
//!
//! Each strategy implements [`Optimizer`] and is stepped by the
//! [`Driver`], which adds step caps, time budgets, cancellation and
//! `tracing` progress events. Instances come from coordinates or from
//! TSPLIB `EUC_2D` files via [`TsplibParser`].
//!
//! # Example
//!
//! ```
//! use tsp_metaheur::{Driver, DriverConfig, Instance};
//! use tsp_metaheur::aco::AcoConfig;
//!
//! let coords = [(0.0, 0.0), (0.0, 1.0), (1.0, 1.0), (1.0, 0.0)];
//! let instance = Instance::from_coords("square", &coords)?;
//! let config = DriverConfig::new(
//!     AcoConfig::default()
//!         .with_num_ants(10)
//!         .with_max_iterations(20)
//!         .with_seed(42),
//! );
//!
//! let report = Driver::run(&instance, &config)?;
//! assert!((report.cost - 4.0).abs() < 1e-9);
//! # Ok::<(), tsp_metaheur::TspError>(())
//! ```

pub mod aco;
pub mod driver;
pub mod error;
pub mod ga;
pub mod geometry;
pub mod optimizer;
pub mod random;
pub mod tabu;
pub mod tsplib;

pub use driver::{Driver, DriverConfig, SolveReport, StopReason, StrategyConfig};
pub use error::{TspError, TspResult};
pub use geometry::{BestKnown, DistanceOracle, Instance, Point, Tour};
pub use optimizer::Optimizer;
pub use tsplib::TsplibParser;
