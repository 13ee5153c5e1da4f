//! Permutation genetic operators.
//!
//! # Crossover
//!
//! - [`order_crossover`] (OX, Davis 1985) keeps a segment of one parent
//!   in place and the relative order of the other parent elsewhere
//!
//! # Mutation
//!
//! - [`inversion_mutation`]: reverse a random segment (2-opt move), O(n)
//!
//! Both operators map valid tours to valid tours.
//!
//! # References
//!
//! - Davis (1985), "Applying Adaptive Algorithms to Epistatic Domains"
//! - Cicirello (2023), "Genetic Operators for Permutation Representation"

use rand::Rng;

use crate::geometry::Tour;
use crate::random::distinct_pair;

// ============================================================================
// Crossover
// ============================================================================

/// Order Crossover (OX) producing a single child.
///
/// # Algorithm
///
/// 1. Pick cut points `0 <= p1 < p2 <= n`
/// 2. Copy `template[p1..p2]` to the child at the same positions
/// 3. Fill the remaining positions left to right with the genes of
///    `donor` that are not in the child yet, in `donor`'s order
///
/// # Complexity
/// O(n) time, O(n) space
///
/// # Panics
/// Panics if parents have different lengths or are empty.
pub fn order_crossover<R: Rng + ?Sized>(template: &Tour, donor: &Tour, rng: &mut R) -> Tour {
    let n = template.len();
    assert_eq!(n, donor.len(), "parents must have equal length");
    assert!(n > 0, "parents must not be empty");

    let (p1, p2) = distinct_pair(n + 1, rng);
    ox_child(template.cities(), donor.cities(), p1, p2)
}

/// Build the OX child for a fixed segment `[p1, p2)`.
pub(crate) fn ox_child(template: &[usize], donor: &[usize], p1: usize, p2: usize) -> Tour {
    let n = template.len();
    let mut child = vec![usize::MAX; n];
    let mut present = vec![false; n];

    for i in p1..p2 {
        child[i] = template[i];
        present[template[i]] = true;
    }

    let mut fill = donor.iter().copied().filter(|&g| !present[g]);
    let (head, rest) = child.split_at_mut(p1);
    let tail = &mut rest[p2 - p1..];
    for slot in head.iter_mut().chain(tail.iter_mut()) {
        // Donor holds exactly the n - (p2 - p1) genes missing from the child.
        if let Some(g) = fill.next() {
            *slot = g;
        }
    }

    Tour::new(child)
}

// ============================================================================
// Mutation
// ============================================================================

/// Inversion mutation: with probability `rate`, reverse `tour[p1..=p2]`
/// for random `p1 < p2`.
///
/// Returns whether the tour was mutated.
pub fn inversion_mutation<R: Rng + ?Sized>(tour: &mut Tour, rate: f64, rng: &mut R) -> bool {
    let n = tour.len();
    if n < 2 || rng.random_range(0.0..1.0) >= rate {
        return false;
    }
    let (p1, p2) = distinct_pair(n, rng);
    tour.as_mut_slice()[p1..=p2].reverse();
    true
}

// ============================================================================
// Tests
// ============================================================================
