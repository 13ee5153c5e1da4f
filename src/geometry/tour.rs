//! Permutation tours.

use rand::Rng;

use super::distance::DistanceOracle;
use crate::random::shuffle;

/// A closed visiting order over all cities.
///
/// Holds a permutation of `0..n`; the edge from the last city back to the
/// first is implicit. Tours are plain values: strategies clone them when
/// moving between stages instead of sharing them.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tour(Vec<usize>);

impl Tour {
    /// Wraps a city sequence. Validity is checked in debug builds only.
    pub fn new(cities: Vec<usize>) -> Self {
        debug_assert!(
            Self::is_permutation(&cities),
            "tour is not a permutation: {cities:?}"
        );
        Self(cities)
    }

    /// The instance order `0, 1, …, n-1`.
    pub fn identity(n: usize) -> Self {
        Self((0..n).collect())
    }

    /// A uniformly random permutation of `0..n`.
    pub fn random<R: Rng + ?Sized>(n: usize, rng: &mut R) -> Self {
        let mut cities: Vec<usize> = (0..n).collect();
        shuffle(&mut cities, rng);
        Self(cities)
    }

    pub fn cities(&self) -> &[usize] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_inner(self) -> Vec<usize> {
        self.0
    }

    /// Total cycle length, including the closing edge.
    pub fn cost(&self, oracle: &DistanceOracle) -> f64 {
        match self.0.as_slice() {
            [] | [_] => 0.0,
            cities => {
                let open: f64 = cities.windows(2).map(|w| oracle.edge(w[0], w[1])).sum();
                open + oracle.edge(cities[cities.len() - 1], cities[0])
            }
        }
    }

    /// `true` iff the tour visits each of `0..n` exactly once.
    pub fn is_valid(&self, n: usize) -> bool {
        self.0.len() == n && Self::is_permutation(&self.0)
    }

    /// City identifiers as 1-based numbers, the way instance files count them.
    pub fn to_one_based(&self) -> Vec<usize> {
        self.0.iter().map(|&c| c + 1).collect()
    }

    /// Edges of the closed cycle, closing edge last.
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let n = self.0.len();
        (0..n).map(move |k| (self.0[k], self.0[(k + 1) % n]))
    }

    pub(crate) fn as_mut_slice(&mut self) -> &mut [usize] {
        &mut self.0
    }

    fn is_permutation(cities: &[usize]) -> bool {
        let mut seen = vec![false; cities.len()];
        for &c in cities {
            match seen.get_mut(c) {
                Some(slot) if !*slot => *slot = true,
                _ => return false,
            }
        }
        true
    }
}

impl AsRef<[usize]> for Tour {
    fn as_ref(&self) -> &[usize] {
        &self.0
    }
}
