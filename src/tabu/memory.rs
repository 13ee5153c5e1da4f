//! Bounded tabu memory.

use std::collections::{HashSet, VecDeque};

use crate::geometry::Tour;

/// FIFO ring buffer of recently accepted tours.
///
/// Membership is exact tour equality. Once full, each insert evicts the
/// oldest entry.
#[derive(Debug, Clone)]
pub struct TabuMemory {
    capacity: usize,
    queue: VecDeque<Tour>,
    set: HashSet<Tour>,
}

impl TabuMemory {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            queue: VecDeque::with_capacity(capacity),
            set: HashSet::with_capacity(capacity),
        }
    }

    pub fn contains(&self, tour: &Tour) -> bool {
        self.set.contains(tour)
    }

    /// Records `tour`, evicting the oldest entry when at capacity.
    ///
    /// A tour already present is left where it is.
    pub fn insert(&mut self, tour: Tour) {
        if self.capacity == 0 || self.set.contains(&tour) {
            return;
        }
        if self.queue.len() == self.capacity {
            if let Some(old) = self.queue.pop_front() {
                self.set.remove(&old);
            }
        }
        self.set.insert(tour.clone());
        self.queue.push_back(tour);
    }

    /// Removes `tour` from memory. Returns whether it was present.
    pub fn release(&mut self, tour: &Tour) -> bool {
        if !self.set.remove(tour) {
            return false;
        }
        if let Some(pos) = self.queue.iter().position(|t| t == tour) {
            self.queue.remove(pos);
        }
        true
    }

    /// Position of `tour` counted from the oldest entry (0 = oldest).
    pub fn age_rank(&self, tour: &Tour) -> Option<usize> {
        if !self.set.contains(tour) {
            return None;
        }
        self.queue.iter().position(|t| t == tour)
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}
