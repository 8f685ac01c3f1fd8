use super::Coordinate;
use crate::utils::RouteError;
use serde::{Deserialize, Serialize};

/// A named geographic location. Names are used for display only and are not required to be unique.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Point {
    /// A display name.
    pub name: String,
    /// Latitude in degrees.
    pub lat: f64,
    /// Longitude in degrees.
    pub lng: f64,
}

impl Point {
    /// Creates a new instance of `Point`.
    pub fn new(name: impl Into<String>, lat: f64, lng: f64) -> Self {
        Self { name: name.into(), lat, lng }
    }

    /// Returns point's coordinate.
    pub fn coordinate(&self) -> Coordinate {
        Coordinate::new(self.lat, self.lng)
    }

    /// Checks that point's coordinate is within valid range. The `index` is point's position in
    /// `[start] + waypoints` and is reported back as a part of the error.
    pub fn validate(&self, index: usize) -> Result<(), RouteError> {
        if self.coordinate().is_valid() {
            Ok(())
        } else {
            Err(RouteError::InvalidCoordinate { index, name: self.name.clone(), lat: self.lat, lng: self.lng })
        }
    }
}
