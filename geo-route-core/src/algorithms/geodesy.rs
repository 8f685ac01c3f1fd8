//! Geodesic distance between geographic coordinates given as `(latitude, longitude)` in degrees.
//!
//! Distances are measured on the WGS-84 ellipsoid with Karney's method from the `geo` crate. Unlike
//! Vincenty's iteration, it converges everywhere, including nearly antipodal points and pairs which
//! lie on different sides of the antimeridian.

#[cfg(test)]
#[path = "../../tests/unit/algorithms/geodesy_test.rs"]
mod geodesy_test;

use geo::{Distance, Geodesic, Point};

/// A pair of latitude and longitude in degrees.
pub type LatLng = (f64, f64);

const METERS_IN_KILOMETER: f64 = 1000.;

/// Returns geodesic distance in kilometers between two coordinates on WGS-84 ellipsoid.
///
/// The function is commutative (arguments are put in a canonical order first) and returns
/// exactly zero for identical coordinates. It does not validate ranges.
pub fn geodesic_distance(from: LatLng, to: LatLng) -> f64 {
    if from == to {
        return 0.;
    }

    let (from, to) = if (from.0, from.1) <= (to.0, to.1) { (from, to) } else { (to, from) };

    // geo points are (x, y), that is (longitude, latitude)
    let (from, to) = (Point::new(from.1, from.0), Point::new(to.1, to.0));

    Geodesic::distance(from, to) / METERS_IN_KILOMETER
}
