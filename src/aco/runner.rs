//! Ant colony iteration loop.
//!
//! # Algorithm
//!
//! 1. Every ant builds a closed tour from a random start city, choosing
//!    each next city by the pheromone/visibility transition rule
//! 2. Each tour is evaluated and offered to the best-known record
//! 3. Pheromone evaporates, then every ant deposits on its edges
//!
//! Step 1 only reads the matrices, so ants run independently (in parallel
//! when configured). Step 3 is the single writer and starts after every
//! ant has finished.

use std::sync::Arc;

use rand::rngs::StdRng;
use rand::Rng;
use rayon::prelude::*;

use super::config::AcoConfig;
use super::matrix::SquareMatrix;
use crate::error::TspResult;
use crate::geometry::{BestKnown, DistanceOracle, Tour};
use crate::optimizer::Optimizer;
use crate::random::{derive_rngs, rng_from_seed};

/// Ant System search.
pub struct AntColonySearch {
    oracle: Arc<DistanceOracle>,
    config: AcoConfig,
    rng: StdRng,
    pheromone: SquareMatrix,
    visibility: SquareMatrix,
    iteration: usize,
    best: BestKnown,
}

impl AntColonySearch {
    /// Initializes pheromone and visibility and seeds the best-known record
    /// with one path built on the initial pheromone.
    ///
    /// # Errors
    /// [`TspError::Config`](crate::TspError::Config) if the configuration is
    /// invalid.
    pub fn new(oracle: Arc<DistanceOracle>, config: AcoConfig) -> TspResult<Self> {
        config.validate()?;
        let n = oracle.size();
        let mut rng = rng_from_seed(config.seed);

        let (lo, hi) = (config.initial_pheromone_min, config.initial_pheromone_max);
        let pheromone = SquareMatrix::from_fn(n, |_, _| {
            if lo < hi {
                rng.random_range(lo..hi)
            } else {
                lo
            }
        });
        let visibility = visibility_matrix(&oracle);

        let first = construct_path(&pheromone, &visibility, config.alpha, config.beta, &mut rng);
        let cost = first.cost(&oracle);

        Ok(Self {
            oracle,
            config,
            rng,
            pheromone,
            visibility,
            iteration: 0,
            best: BestKnown::new(first, cost),
        })
    }

    /// Builds one path with the search's own random stream.
    pub fn construct_path(&mut self) -> Tour {
        construct_path(
            &self.pheromone,
            &self.visibility,
            self.config.alpha,
            self.config.beta,
            &mut self.rng,
        )
    }

    pub fn pheromone(&self) -> &SquareMatrix {
        &self.pheromone
    }

    pub fn visibility(&self) -> &SquareMatrix {
        &self.visibility
    }

    pub fn iteration(&self) -> usize {
        self.iteration
    }

    pub fn config(&self) -> &AcoConfig {
        &self.config
    }

    /// Builds and evaluates one path per ant against the current pheromone.
    fn run_ants(&mut self) -> Vec<(Tour, f64)> {
        let rngs = derive_rngs(&mut self.rng, self.config.num_ants);
        let (pheromone, visibility) = (&self.pheromone, &self.visibility);
        let (alpha, beta) = (self.config.alpha, self.config.beta);
        let oracle = &*self.oracle;

        let ant = |mut rng: StdRng| {
            let tour = construct_path(pheromone, visibility, alpha, beta, &mut rng);
            let cost = tour.cost(oracle);
            (tour, cost)
        };

        if self.config.parallel {
            rngs.into_par_iter().map(ant).collect()
        } else {
            rngs.into_iter().map(ant).collect()
        }
    }
}

impl Optimizer for AntColonySearch {
    fn name(&self) -> &'static str {
        "Ant Colony Search"
    }

    fn step(&mut self) -> bool {
        let paths = self.run_ants();

        let mut improved = false;
        for (tour, cost) in &paths {
            improved |= self.best.offer(tour, *cost);
        }

        update_pheromone(
            &mut self.pheromone,
            &paths,
            self.config.evaporation_rate,
            self.config.deposit,
        );
        self.iteration += 1;

        if improved {
            tracing::debug!(
                iteration = self.iteration,
                cost = self.best.cost(),
                "ant colony improved best tour"
            );
        }
        improved
    }

    fn best(&self) -> &BestKnown {
        &self.best
    }

    fn steps(&self) -> usize {
        self.iteration
    }

    fn is_finished(&self) -> bool {
        self.iteration >= self.config.max_iterations
    }
}

/// `1 / d(i, j)` off the diagonal, 0 on it and for coincident cities.
fn visibility_matrix(oracle: &DistanceOracle) -> SquareMatrix {
    SquareMatrix::from_fn(oracle.size(), |i, j| {
        let d = oracle.edge(i, j);
        if i != j && d != 0.0 {
            1.0 / d
        } else {
            0.0
        }
    })
}

/// Builds one closed tour with the Ant System transition rule.
///
/// When every remaining candidate has zero weight the next city is drawn
/// uniformly, so construction always completes.
pub(crate) fn construct_path<R: Rng + ?Sized>(
    pheromone: &SquareMatrix,
    visibility: &SquareMatrix,
    alpha: f64,
    beta: f64,
    rng: &mut R,
) -> Tour {
    let n = pheromone.size();
    let start = rng.random_range(0..n);
    let mut path = Vec::with_capacity(n);
    path.push(start);

    let mut unvisited: Vec<usize> = (0..n).filter(|&c| c != start).collect();
    let mut weights: Vec<f64> = Vec::with_capacity(n);

    let mut current = start;
    while !unvisited.is_empty() {
        weights.clear();
        let mut total = 0.0;
        for &j in &unvisited {
            let w = pheromone[(current, j)].powf(alpha) * visibility[(current, j)].powf(beta);
            weights.push(w);
            total += w;
        }

        let pick = if total > 0.0 && total.is_finite() {
            let threshold = rng.random_range(0.0..total);
            let mut cumulative = 0.0;
            let mut chosen = weights.len() - 1; // floating-point fallback
            for (k, &w) in weights.iter().enumerate() {
                cumulative += w;
                if cumulative > threshold {
                    chosen = k;
                    break;
                }
            }
            chosen
        } else {
            rng.random_range(0..unvisited.len())
        };

        current = unvisited.swap_remove(pick);
        path.push(current);
    }

    Tour::new(path)
}

/// Evaporates every entry, then deposits `deposit / cost` on both directions
/// of each edge of every path. Zero-cost paths deposit nothing.
pub(crate) fn update_pheromone(
    pheromone: &mut SquareMatrix,
    paths: &[(Tour, f64)],
    evaporation_rate: f64,
    deposit: f64,
) {
    pheromone.scale(1.0 - evaporation_rate);
    for (tour, cost) in paths {
        if *cost == 0.0 {
            continue;
        }
        let amount = deposit / cost;
        for (a, b) in tour.edges() {
            pheromone[(a, b)] += amount;
            pheromone[(b, a)] += amount;
        }
    }
}
