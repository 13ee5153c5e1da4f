//! Cities and problem instances.

use crate::error::{TspError, TspResult};

/// A city location in the plane.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to `other`.
    pub fn distance_to(&self, other: &Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

/// An ordered, immutable list of cities.
///
/// City `i` is `points()[i]`; that index is the identifier every tour,
/// matrix and report uses.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Instance {
    name: String,
    points: Vec<Point>,
}

impl Instance {
    /// Builds an instance, rejecting inputs with fewer than two cities.
    ///
    /// # Errors
    /// [`TspError::DegenerateInstance`] when `points.len() < 2`.
    pub fn new(name: impl Into<String>, points: Vec<Point>) -> TspResult<Self> {
        if points.len() < 2 {
            return Err(TspError::DegenerateInstance {
                cities: points.len(),
            });
        }
        Ok(Self {
            name: name.into(),
            points,
        })
    }

    /// Convenience constructor from `(x, y)` pairs.
    pub fn from_coords(name: impl Into<String>, coords: &[(f64, f64)]) -> TspResult<Self> {
        Self::new(name, coords.iter().copied().map(Point::from).collect())
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Number of cities.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Always `false`: construction rejects empty instances.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_distance() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(3.0, 4.0);
        assert!((a.distance_to(&b) - 5.0).abs() < 1e-12);
        assert!((b.distance_to(&a) - 5.0).abs() < 1e-12);
    }

    #[test]
    fn test_instance_rejects_single_point() {
        let err = Instance::from_coords("one", &[(0.0, 0.0)]).unwrap_err();
        assert!(matches!(err, TspError::DegenerateInstance { cities: 1 }));
    }

    #[test]
    fn test_instance_rejects_empty() {
        let err = Instance::new("none", vec![]).unwrap_err();
        assert!(matches!(err, TspError::DegenerateInstance { cities: 0 }));
    }

    #[test]
    fn test_instance_keeps_order() {
        let inst = Instance::from_coords("sq", &[(0.0, 0.0), (0.0, 1.0), (1.0, 1.0)]).unwrap();
        assert_eq!(inst.len(), 3);
        assert_eq!(inst.name(), "sq");
        assert_eq!(inst.points()[1], Point::new(0.0, 1.0));
    }
}
