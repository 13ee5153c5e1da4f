//! Seedable random sources.
//!
//! Every strategy owns one [`StdRng`] created from its configured seed.
//! Work that fans out across rayon workers draws one child seed per unit
//! from that parent, so each worker has an independent stream and the
//! result does not depend on thread scheduling.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

/// Creates a deterministic RNG from a seed.
pub fn create_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Creates an RNG from an optional seed; `None` draws a fresh seed.
pub fn rng_from_seed(seed: Option<u64>) -> StdRng {
    match seed {
        Some(s) => create_rng(s),
        None => create_rng(rand::random()),
    }
}

/// Shuffles a slice in place (Fisher–Yates).
pub fn shuffle<T, R: Rng + ?Sized>(items: &mut [T], rng: &mut R) {
    items.shuffle(rng);
}

/// Derives `count` independent child RNGs from `parent`.
///
/// The parent advances by exactly `count` draws regardless of how the
/// children are later scheduled.
pub fn derive_rngs<R: Rng + ?Sized>(parent: &mut R, count: usize) -> Vec<StdRng> {
    (0..count).map(|_| create_rng(parent.random())).collect()
}

/// Picks two distinct values from `0..n`, returned in ascending order.
///
/// # Panics
/// Panics if `n < 2`.
pub fn distinct_pair<R: Rng + ?Sized>(n: usize, rng: &mut R) -> (usize, usize) {
    assert!(n >= 2, "need at least two values to pick a distinct pair");
    let a = rng.random_range(0..n);
    let mut b = rng.random_range(0..n - 1);
    if b >= a {
        b += 1;
    }
    if a < b {
        (a, b)
    } else {
        (b, a)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_same_stream() {
        let mut a = create_rng(7);
        let mut b = create_rng(7);
        for _ in 0..10 {
            assert_eq!(a.random::<u64>(), b.random::<u64>());
        }
    }

    #[test]
    fn test_derive_rngs_is_deterministic() {
        let mut p1 = create_rng(42);
        let mut p2 = create_rng(42);
        let mut c1 = derive_rngs(&mut p1, 4);
        let mut c2 = derive_rngs(&mut p2, 4);
        for (x, y) in c1.iter_mut().zip(c2.iter_mut()) {
            assert_eq!(x.random::<u64>(), y.random::<u64>());
        }
        assert_eq!(p1.random::<u64>(), p2.random::<u64>());
    }

    #[test]
    fn test_distinct_pair_bounds() {
        let mut rng = create_rng(3);
        for _ in 0..1000 {
            let (a, b) = distinct_pair(5, &mut rng);
            assert!(a < b);
            assert!(b < 5);
        }
    }

    #[test]
    fn test_distinct_pair_two_values() {
        let mut rng = create_rng(3);
        for _ in 0..20 {
            assert_eq!(distinct_pair(2, &mut rng), (0, 1));
        }
    }

    #[test]
    fn test_shuffle_keeps_elements() {
        let mut rng = create_rng(1);
        let mut v: Vec<usize> = (0..20).collect();
        shuffle(&mut v, &mut rng);
        let mut sorted = v.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, (0..20).collect::<Vec<_>>());
    }
}
