//! Memoized Euclidean distances.

use std::sync::OnceLock;

use super::instance::{Instance, Point};
use crate::error::{TspError, TspResult};

/// Symmetric, lazily populated distance table.
///
/// Each unordered pair `{i, j}` with `i != j` owns one write-once cell in
/// a dense upper-triangular arena. The first query for a pair, in either
/// order, computes and stores the value; every later query reads it back.
/// Cells are [`OnceLock`]s, so the oracle is `Sync` and concurrent first
/// queries for the same pair agree on one stored value.
///
/// Call [`warm_up`](Self::warm_up) to fill the whole table up front before
/// handing the oracle to parallel workers.
#[derive(Debug)]
pub struct DistanceOracle {
    points: Vec<Point>,
    cells: Box<[OnceLock<f64>]>,
}

impl DistanceOracle {
    /// Creates an empty (cold) oracle over the instance's cities.
    pub fn new(instance: &Instance) -> Self {
        let points = instance.points().to_vec();
        let n = points.len();
        let cells = (0..n * n.saturating_sub(1) / 2)
            .map(|_| OnceLock::new())
            .collect();
        Self { points, cells }
    }

    /// Creates an oracle with every pair already computed.
    pub fn precomputed(instance: &Instance) -> Self {
        let oracle = Self::new(instance);
        oracle.warm_up();
        oracle
    }

    /// Number of cities.
    pub fn size(&self) -> usize {
        self.points.len()
    }

    /// Distance between cities `i` and `j`.
    ///
    /// # Errors
    /// [`TspError::InvalidIndex`] if either index is outside `0..size()`.
    pub fn distance(&self, i: usize, j: usize) -> TspResult<f64> {
        let size = self.size();
        for index in [i, j] {
            if index >= size {
                return Err(TspError::InvalidIndex { index, size });
            }
        }
        Ok(self.edge(i, j))
    }

    /// Distance between two cities known to be in range.
    ///
    /// # Panics
    /// Panics if either index is out of range.
    #[inline]
    pub fn edge(&self, i: usize, j: usize) -> f64 {
        if i == j {
            assert!(i < self.size(), "city index {i} out of range");
            return 0.0;
        }
        let (a, b) = if i < j { (i, j) } else { (j, i) };
        *self.cells[self.cell_index(a, b)]
            .get_or_init(|| self.points[a].distance_to(&self.points[b]))
    }

    /// Computes every pair that has not been queried yet.
    pub fn warm_up(&self) {
        let n = self.size();
        for a in 0..n {
            for b in (a + 1)..n {
                self.edge(a, b);
            }
        }
    }

    /// Number of unordered pairs currently cached.
    pub fn cached_pairs(&self) -> usize {
        self.cells.iter().filter(|c| c.get().is_some()).count()
    }

    #[inline]
    fn cell_index(&self, a: usize, b: usize) -> usize {
        let n = self.size();
        a * n - a * (a + 1) / 2 + (b - a - 1)
    }
}
