//! Tabu Search execution engine.
//!
//! # Algorithm
//!
//! 1. Start from the instance order and remember it as tabu
//! 2. At each iteration:
//!    a. Sample `neighborhood_size` swap neighbors of the current tour
//!    b. Drop neighbors present in the tabu memory
//!    c. Move to the cheapest remaining neighbor, even if it is worse
//!    d. Update the best-known tour and push the new tour into memory
//! 3. Terminate after `max_iterations`
//!
//! When a whole sample is tabu it is redrawn up to `max_resamples` times.
//! If that still fails, the candidate remembered longest ago is released
//! from memory and accepted, so a tour is never accepted while tabu.
//!
//! # Reference
//!
//! Glover, F. (1989). "Tabu Search—Part I", *ORSA Journal on Computing* 1(3), 190-206.

use std::sync::Arc;

use rand::rngs::StdRng;
use rand::Rng;
use rayon::prelude::*;

use super::config::TabuConfig;
use super::memory::TabuMemory;
use crate::error::TspResult;
use crate::geometry::{BestKnown, DistanceOracle, Tour};
use crate::optimizer::Optimizer;
use crate::random::{derive_rngs, distinct_pair, rng_from_seed};

/// Swap-neighborhood tabu search over tours.
pub struct TabuSearch {
    oracle: Arc<DistanceOracle>,
    config: TabuConfig,
    rng: StdRng,
    current: Tour,
    current_cost: f64,
    memory: TabuMemory,
    iteration: usize,
    exhaustions: usize,
    best: BestKnown,
}

impl TabuSearch {
    /// Starts from the identity tour, which is also the first best-known.
    ///
    /// # Errors
    /// [`TspError::Config`](crate::TspError::Config) if the configuration is
    /// invalid.
    pub fn new(oracle: Arc<DistanceOracle>, config: TabuConfig) -> TspResult<Self> {
        config.validate()?;
        let rng = rng_from_seed(config.seed);
        let current = Tour::identity(oracle.size());
        let current_cost = current.cost(&oracle);

        let mut memory = TabuMemory::new(config.capacity);
        memory.insert(current.clone());

        Ok(Self {
            best: BestKnown::new(current.clone(), current_cost),
            oracle,
            config,
            rng,
            current,
            current_cost,
            memory,
            iteration: 0,
            exhaustions: 0,
        })
    }

    pub fn current(&self) -> &Tour {
        &self.current
    }

    pub fn current_cost(&self) -> f64 {
        self.current_cost
    }

    pub fn memory(&self) -> &TabuMemory {
        &self.memory
    }

    pub fn iteration(&self) -> usize {
        self.iteration
    }

    /// Iterations that fell back to releasing a tabu tour.
    pub fn exhaustions(&self) -> usize {
        self.exhaustions
    }

    pub fn config(&self) -> &TabuConfig {
        &self.config
    }

    /// Samples and evaluates one neighborhood of the current tour.
    fn sample_neighborhood(&mut self) -> Vec<(Tour, f64)> {
        let rngs = derive_rngs(&mut self.rng, self.config.neighborhood_size);
        let current = &self.current;
        let oracle = &*self.oracle;

        let neighbor = |mut rng: StdRng| {
            let tour = generate_neighbor(current, &mut rng);
            let cost = tour.cost(oracle);
            (tour, cost)
        };

        if self.config.parallel {
            rngs.into_par_iter().map(neighbor).collect()
        } else {
            rngs.into_iter().map(neighbor).collect()
        }
    }

    /// Cheapest non-tabu candidate, first one on ties.
    fn best_admissible(&self, candidates: &[(Tour, f64)]) -> Option<usize> {
        let mut chosen: Option<usize> = None;
        for (i, (tour, cost)) in candidates.iter().enumerate() {
            if self.memory.contains(tour) {
                continue;
            }
            match chosen {
                Some(c) if candidates[c].1 <= *cost => {}
                _ => chosen = Some(i),
            }
        }
        chosen
    }

    /// Chooses the next tour, applying the exhaustion fallback if needed.
    fn choose(&mut self) -> (Tour, f64) {
        let mut candidates = self.sample_neighborhood();
        for _ in 0..self.config.max_resamples {
            if self.best_admissible(&candidates).is_some() {
                break;
            }
            candidates = self.sample_neighborhood();
        }

        if let Some(i) = self.best_admissible(&candidates) {
            return candidates.swap_remove(i);
        }

        // Every candidate is tabu: free the one remembered longest ago.
        self.exhaustions += 1;
        let oldest = candidates
            .iter()
            .enumerate()
            .min_by_key(|(_, (tour, _))| self.memory.age_rank(tour).unwrap_or(usize::MAX))
            .map_or(0, |(i, _)| i);
        let (tour, cost) = candidates.swap_remove(oldest);
        self.memory.release(&tour);
        tracing::warn!(
            iteration = self.iteration,
            resamples = self.config.max_resamples,
            "tabu neighborhood exhausted, releasing oldest entry"
        );
        (tour, cost)
    }
}

impl Optimizer for TabuSearch {
    fn name(&self) -> &'static str {
        "Tabu Search"
    }

    fn step(&mut self) -> bool {
        let (tour, cost) = self.choose();
        debug_assert!(!self.memory.contains(&tour));

        let improved = self.best.offer(&tour, cost);
        self.memory.insert(tour.clone());
        self.current = tour;
        self.current_cost = cost;
        self.iteration += 1;

        if improved {
            tracing::debug!(
                iteration = self.iteration,
                cost,
                "tabu search improved best tour"
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

/// Copy of `tour` with two distinct random positions swapped.
pub fn generate_neighbor<R: Rng + ?Sized>(tour: &Tour, rng: &mut R) -> Tour {
    let mut next = tour.clone();
    let (a, b) = distinct_pair(next.len(), rng);
    next.as_mut_slice().swap(a, b);
    next
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Instance;
    use crate::random::create_rng;

    fn oracle_of(coords: &[(f64, f64)]) -> Arc<DistanceOracle> {
        Arc::new(DistanceOracle::precomputed(
            &Instance::from_coords("t", coords).unwrap(),
        ))
    }

    fn scattered(n: usize) -> Arc<DistanceOracle> {
        let coords: Vec<(f64, f64)> = (0..n)
            .map(|i| ((i * 37 % 17) as f64, (i * 11 % 13) as f64))
            .collect();
        oracle_of(&coords)
    }

    fn small_config() -> TabuConfig {
        TabuConfig::default()
            .with_max_iterations(200)
            .with_capacity(5)
            .with_neighborhood_size(20)
            .with_seed(42)
    }

    #[test]
    fn test_generate_neighbor_swaps_two() {
        let tour = Tour::identity(6);
        let mut rng = create_rng(1);
        for _ in 0..50 {
            let next = generate_neighbor(&tour, &mut rng);
            assert!(next.is_valid(6));
            let moved = next
                .cities()
                .iter()
                .zip(tour.cities())
                .filter(|(a, b)| a != b)
                .count();
            assert_eq!(moved, 2, "neighbor {next:?}");
        }
    }

    #[test]
    fn test_starts_from_identity() {
        let tabu = TabuSearch::new(scattered(6), small_config()).unwrap();
        assert_eq!(tabu.current(), &Tour::identity(6));
        assert_eq!(tabu.best().tour(), &Tour::identity(6));
        assert!(tabu.memory().contains(&Tour::identity(6)));
    }

    #[test]
    fn test_unit_square() {
        let oracle = oracle_of(&[(0.0, 0.0), (1.0, 1.0), (0.0, 1.0), (1.0, 0.0)]);
        let mut tabu = TabuSearch::new(oracle, small_config()).unwrap();
        while !tabu.is_finished() {
            tabu.step();
        }
        assert!((tabu.best().cost() - 4.0).abs() < 1e-9);
    }

    #[test]
    fn test_accepted_tour_was_not_tabu() {
        let mut tabu = TabuSearch::new(scattered(7), small_config()).unwrap();
        for _ in 0..100 {
            let before = tabu.memory().clone();
            let exhaustions = tabu.exhaustions();
            tabu.step();
            if tabu.exhaustions() == exhaustions {
                assert!(
                    !before.contains(tabu.current()),
                    "accepted tabu tour {:?}",
                    tabu.current()
                );
            }
        }
    }

    #[test]
    fn test_best_monotone_and_valid() {
        let mut tabu = TabuSearch::new(scattered(9), small_config()).unwrap();
        let mut last = tabu.best().cost();
        for _ in 0..150 {
            tabu.step();
            assert!(tabu.best().cost() <= last);
            assert!(tabu.best().tour().is_valid(9));
            assert!(tabu.current().is_valid(9));
            last = tabu.best().cost();
        }
    }

    #[test]
    fn test_memory_bounded_by_capacity() {
        let mut tabu = TabuSearch::new(scattered(8), small_config()).unwrap();
        for _ in 0..40 {
            tabu.step();
            assert!(tabu.memory().len() <= 5);
        }
    }

    #[test]
    fn test_two_cities_exhaust_and_recover() {
        let oracle = oracle_of(&[(0.0, 0.0), (3.0, 4.0)]);
        let config = small_config().with_max_iterations(6);
        let mut tabu = TabuSearch::new(oracle, config).unwrap();
        while !tabu.is_finished() {
            tabu.step();
            assert!(tabu.current().is_valid(2));
        }
        // Only two tours exist and both end up remembered.
        assert!(tabu.exhaustions() > 0);
        assert!((tabu.best().cost() - 10.0).abs() < 1e-9);
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let oracle = scattered(10);
        let run = |parallel: bool| {
            let mut tabu =
                TabuSearch::new(oracle.clone(), small_config().with_parallel(parallel)).unwrap();
            for _ in 0..50 {
                tabu.step();
            }
            tabu.best().clone()
        };
        assert_eq!(run(false), run(true));
    }

    #[test]
    fn test_invalid_config_rejected() {
        assert!(TabuSearch::new(scattered(5), small_config().with_capacity(0)).is_err());
    }
}
