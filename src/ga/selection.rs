//! Parent selection: elitism plus fitness-proportionate (roulette) sampling.
//!
//! Of `k` parents, the best `ceil(elite_fraction · k)` are taken by rank and
//! the remainder are drawn with replacement, individual `i` weighted by
//! `1 / (cost_i + 1)`.
//!
//! # References
//!
//! - Goldberg & Deb (1991), "A Comparative Analysis of Selection Schemes
//!   Used in Genetic Algorithms"

use rand::Rng;

use super::types::Individual;

/// Number of elites among `k` parents.
pub fn elite_count(k: usize, elite_fraction: f64) -> usize {
    // Guard against 0.2 * 15 = 3.0000000000000004 rounding up to 4.
    let raw = (k as f64 * elite_fraction - 1e-9).ceil();
    (raw.max(0.0) as usize).min(k)
}

/// Selects `k` parent indices: elites first, then roulette draws.
///
/// # Panics
/// Panics if `population` is empty.
pub fn select_indices<R: Rng + ?Sized>(
    population: &[Individual],
    k: usize,
    elite_fraction: f64,
    rng: &mut R,
) -> Vec<usize> {
    assert!(
        !population.is_empty(),
        "cannot select from empty population"
    );

    let n_elite = elite_count(k, elite_fraction).min(population.len());
    let mut chosen = elite_indices(population, n_elite);
    chosen.extend(roulette(population, k - n_elite, rng));
    chosen
}

/// The `count` lowest-cost indices; ties keep population order.
fn elite_indices(population: &[Individual], count: usize) -> Vec<usize> {
    let mut order: Vec<usize> = (0..population.len()).collect();
    order.sort_by(|&a, &b| {
        population[a]
            .cost
            .partial_cmp(&population[b].cost)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    order.truncate(count);
    order
}

/// Roulette wheel selection with `weight_i = 1 / (cost_i + 1)`.
fn roulette<R: Rng + ?Sized>(population: &[Individual], count: usize, rng: &mut R) -> Vec<usize> {
    let n = population.len();
    let mut cumulative = Vec::with_capacity(n);
    let mut total = 0.0;
    for ind in population {
        let w = 1.0 / (ind.cost + 1.0);
        if w.is_finite() && w > 0.0 {
            total += w;
        }
        cumulative.push(total);
    }

    if !(total > 0.0 && total.is_finite()) {
        return (0..count).map(|_| rng.random_range(0..n)).collect();
    }

    (0..count)
        .map(|_| {
            let threshold = rng.random_range(0.0..total);
            cumulative
                .partition_point(|&c| c <= threshold)
                .min(n - 1) // floating-point fallback
        })
        .collect()
}
