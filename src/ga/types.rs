//! Population members.

use crate::geometry::{DistanceOracle, Tour};

/// A tour together with its evaluated cycle cost.
#[derive(Debug, Clone, PartialEq)]
pub struct Individual {
    pub tour: Tour,
    pub cost: f64,
}

impl Individual {
    /// Evaluates `tour` against the oracle.
    pub fn evaluated(tour: Tour, oracle: &DistanceOracle) -> Self {
        let cost = tour.cost(oracle);
        Self { tour, cost }
    }
}

/// Index of the lowest-cost individual; ties go to the earliest.
///
/// # Panics
/// Panics if `population` is empty.
pub(crate) fn best_index(population: &[Individual]) -> usize {
    assert!(!population.is_empty(), "population must not be empty");
    let mut best = 0;
    for (i, ind) in population.iter().enumerate().skip(1) {
        if ind.cost < population[best].cost {
            best = i;
        }
    }
    best
}
