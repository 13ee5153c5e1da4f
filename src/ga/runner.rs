//! Generational loop.
//!
//! [`GeneticSearch`] advances one generation per step:
//! selection → crossover → mutation → evaluation → bookkeeping.

use std::collections::HashSet;
use std::sync::Arc;

use rand::rngs::StdRng;
use rand::Rng;
use rayon::prelude::*;

use super::config::GaConfig;
use super::operators::{inversion_mutation, order_crossover};
use super::selection::select_indices;
use super::types::{best_index, Individual};
use crate::error::{TspError, TspResult};
use crate::geometry::{BestKnown, DistanceOracle, Tour};
use crate::optimizer::Optimizer;
use crate::random::rng_from_seed;

/// Genetic search over permutation tours.
///
/// # Usage
///
/// ```
/// use std::sync::Arc;
/// use tsp_metaheur::ga::{GaConfig, GeneticSearch};
/// use tsp_metaheur::geometry::{DistanceOracle, Instance};
/// use tsp_metaheur::Optimizer;
///
/// let instance = Instance::from_coords(
///     "square",
///     &[(0.0, 0.0), (0.0, 1.0), (1.0, 1.0), (1.0, 0.0)],
/// ).unwrap();
/// let oracle = Arc::new(DistanceOracle::precomputed(&instance));
/// let config = GaConfig::default()
///     .with_population_size(20)
///     .with_max_generations(50)
///     .with_seed(42);
///
/// let mut ga = GeneticSearch::new(oracle, config).unwrap();
/// while !ga.is_finished() {
///     ga.step();
/// }
/// assert!((ga.best().cost() - 4.0).abs() < 1e-9);
/// ```
pub struct GeneticSearch {
    oracle: Arc<DistanceOracle>,
    config: GaConfig,
    rng: StdRng,
    population: Vec<Individual>,
    mutation_rate: f64,
    generation: usize,
    stagnation: usize,
    best: BestKnown,
}

impl GeneticSearch {
    /// Builds and evaluates the initial population.
    ///
    /// # Errors
    /// [`TspError::Config`] if the configuration is invalid or the
    /// population is larger than the number of distinct tours (`n!`).
    pub fn new(oracle: Arc<DistanceOracle>, config: GaConfig) -> TspResult<Self> {
        config.validate()?;
        let n = oracle.size();
        if !permutations_at_least(n, config.population_size) {
            return Err(TspError::config(format!(
                "population_size {} exceeds the {n}! distinct tours of a {n}-city instance",
                config.population_size
            )));
        }

        let mut rng = rng_from_seed(config.seed);
        let tours = distinct_tours(n, config.population_size, &mut rng);
        let population = evaluate(&oracle, tours, config.parallel);

        let first = &population[best_index(&population)];
        let best = BestKnown::new(first.tour.clone(), first.cost);

        Ok(Self {
            mutation_rate: config.initial_mutation_rate,
            oracle,
            config,
            rng,
            population,
            generation: 0,
            stagnation: 0,
            best,
        })
    }

    /// Current population with cached costs.
    pub fn population(&self) -> &[Individual] {
        &self.population
    }

    /// Mutation rate that the next generation will use.
    pub fn mutation_rate(&self) -> f64 {
        self.mutation_rate
    }

    /// Consecutive generations without a strict improvement.
    pub fn stagnation(&self) -> usize {
        self.stagnation
    }

    pub fn generation(&self) -> usize {
        self.generation
    }

    pub fn config(&self) -> &GaConfig {
        &self.config
    }

    /// Selects `k` parents from the current population (copies).
    pub fn select(&mut self, k: usize) -> Vec<Tour> {
        select_indices(
            &self.population,
            k,
            self.config.elite_fraction,
            &mut self.rng,
        )
        .into_iter()
        .map(|i| self.population[i].tour.clone())
        .collect()
    }

    /// Order crossover of two parents.
    pub fn crossover(&mut self, a: &Tour, b: &Tour) -> Tour {
        order_crossover(a, b, &mut self.rng)
    }

    /// Inversion mutation at the current adaptive rate.
    pub fn mutate(&mut self, tour: &mut Tour) -> bool {
        inversion_mutation(tour, self.mutation_rate, &mut self.rng)
    }

    /// Breeds the next generation's tours from `parents`.
    fn breed(&mut self, parents: Vec<Tour>) -> Vec<Tour> {
        let target = self.config.population_size;
        let k = parents.len();
        let mut next = parents;
        next.reserve(target.saturating_sub(k));

        while next.len() < target {
            let (i, j) = ordered_pair(k, &mut self.rng);
            let mut child = self.crossover(&next[i], &next[j]);
            self.mutate(&mut child);
            next.push(child);
        }
        next
    }

    fn adapt(&mut self, improved: bool) {
        let c = &self.config;
        if improved {
            self.stagnation = 0;
            self.mutation_rate = (self.mutation_rate - c.mutation_step).max(c.min_mutation_rate);
        } else {
            self.stagnation += 1;
            self.mutation_rate = (self.mutation_rate + c.mutation_step).min(c.max_mutation_rate);
        }
    }
}

impl Optimizer for GeneticSearch {
    fn name(&self) -> &'static str {
        "Genetic Search"
    }

    fn step(&mut self) -> bool {
        let parents = self.select(self.config.parent_count());
        let tours = self.breed(parents);
        self.population = evaluate(&self.oracle, tours, self.config.parallel);
        self.generation += 1;

        let gen_best = &self.population[best_index(&self.population)];
        let improved = self.best.offer(&gen_best.tour, gen_best.cost);
        self.adapt(improved);

        if improved {
            tracing::debug!(
                generation = self.generation,
                cost = self.best.cost(),
                mutation_rate = self.mutation_rate,
                "genetic search improved best tour"
            );
        }
        improved
    }

    fn best(&self) -> &BestKnown {
        &self.best
    }

    fn steps(&self) -> usize {
        self.generation
    }

    fn is_finished(&self) -> bool {
        self.generation >= self.config.max_generations
            || (self.config.stagnation_limit > 0
                && self.stagnation >= self.config.stagnation_limit)
    }
}

/// Evaluate all tours, in parallel when requested.
fn evaluate(oracle: &DistanceOracle, tours: Vec<Tour>, parallel: bool) -> Vec<Individual> {
    if parallel {
        tours
            .into_par_iter()
            .map(|t| Individual::evaluated(t, oracle))
            .collect()
    } else {
        tours
            .into_iter()
            .map(|t| Individual::evaluated(t, oracle))
            .collect()
    }
}

/// `count` distinct random tours, duplicates rejected until the target is met.
fn distinct_tours<R: Rng + ?Sized>(n: usize, count: usize, rng: &mut R) -> Vec<Tour> {
    let mut seen = HashSet::with_capacity(count);
    let mut tours = Vec::with_capacity(count);
    while tours.len() < count {
        let tour = Tour::random(n, rng);
        if seen.insert(tour.clone()) {
            tours.push(tour);
        }
    }
    tours
}

/// Whether `n! >= target`, without overflowing.
fn permutations_at_least(n: usize, target: usize) -> bool {
    let mut acc: usize = 1;
    for i in 2..=n {
        if acc >= target {
            return true;
        }
        acc = acc.saturating_mul(i);
    }
    acc >= target
}

/// Two positions in `0..k`, distinct when `k >= 2`, in random order.
fn ordered_pair<R: Rng + ?Sized>(k: usize, rng: &mut R) -> (usize, usize) {
    if k < 2 {
        return (0, 0);
    }
    let i = rng.random_range(0..k);
    let mut j = rng.random_range(0..k - 1);
    if j >= i {
        j += 1;
    }
    (i, j)
}

// ============================================================================
// Tests
// ============================================================================
