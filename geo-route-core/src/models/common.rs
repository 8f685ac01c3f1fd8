#[cfg(test)]
#[path = "../../tests/unit/models/common_test.rs"]
mod common_test;

use crate::algorithms::geodesy::geodesic_distance;

/// Represents a geographic coordinate in degrees.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Coordinate {
    /// Latitude in degrees, valid range is `[-90, 90]`.
    pub lat: f64,
    /// Longitude in degrees, valid range is `[-180, 180]`.
    pub lng: f64,
}

impl Coordinate {
    /// Creates a new instance of `Coordinate`.
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Returns true if latitude and longitude are finite and within their valid ranges.
    pub fn is_valid(&self) -> bool {
        (-90. ..=90.).contains(&self.lat) && (-180. ..=180.).contains(&self.lng)
    }

    /// Returns geodesic distance to the other coordinate in kilometers.
    pub fn distance_to(&self, other: &Coordinate) -> f64 {
        geodesic_distance((self.lat, self.lng), (other.lat, other.lng))
    }
}
