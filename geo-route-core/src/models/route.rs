#[cfg(test)]
#[path = "../../tests/unit/models/route_test.rs"]
mod route_test;

use super::Point;

/// An ordered sequence of points in visiting order. The first point is always the start point.
#[derive(Clone, Debug, PartialEq)]
pub struct OrderedRoute {
    points: Vec<Point>,
}

impl OrderedRoute {
    pub(crate) fn new(points: Vec<Point>) -> Self {
        Self { points }
    }

    /// Returns points in visiting order.
    pub fn points(&self) -> &[Point] {
        self.points.as_slice()
    }

    /// Returns amount of points in the route.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns true if route has no points. Never the case for routes returned by optimizer.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Returns geodesic distances of consecutive legs in kilometers.
    pub fn legs(&self) -> Vec<f64> {
        self.points.windows(2).map(|pair| pair[0].coordinate().distance_to(&pair[1].coordinate())).collect()
    }

    /// Returns total route distance in kilometers.
    pub fn total_distance(&self) -> f64 {
        self.legs().iter().sum()
    }

    /// Consumes the route and returns its points.
    pub fn into_points(self) -> Vec<Point> {
        self.points
    }
}
