//! Best-so-far record.

use super::tour::Tour;

/// The best tour seen during a run.
///
/// Only a strictly lower cost replaces the record, so the cost never
/// increases over a run.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BestKnown {
    tour: Tour,
    cost: f64,
}

impl BestKnown {
    pub fn new(tour: Tour, cost: f64) -> Self {
        Self { tour, cost }
    }

    pub fn tour(&self) -> &Tour {
        &self.tour
    }

    pub fn cost(&self) -> f64 {
        self.cost
    }

    /// Replaces the record if `cost` is strictly lower. Returns whether it did.
    pub fn offer(&mut self, tour: &Tour, cost: f64) -> bool {
        if cost < self.cost {
            self.tour = tour.clone();
            self.cost = cost;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offer_strictly_lower_only() {
        let mut best = BestKnown::new(Tour::identity(3), 10.0);
        assert!(!best.offer(&Tour::new(vec![2, 1, 0]), 10.0));
        assert_eq!(best.tour(), &Tour::identity(3));

        assert!(best.offer(&Tour::new(vec![1, 0, 2]), 9.5));
        assert_eq!(best.cost(), 9.5);
        assert_eq!(best.tour().cities(), &[1, 0, 2]);

        assert!(!best.offer(&Tour::identity(3), 11.0));
        assert_eq!(best.cost(), 9.5);
    }

    #[test]
    fn test_nan_never_replaces() {
        let mut best = BestKnown::new(Tour::identity(2), 1.0);
        assert!(!best.offer(&Tour::identity(2), f64::NAN));
        assert_eq!(best.cost(), 1.0);
    }
}
