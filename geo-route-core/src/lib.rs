//! Core crate contains building blocks to order geographic waypoints into a visiting sequence which
//! approximately minimizes total travel distance of an ***open route*** anchored at a fixed start point.
//!
//! # Overview
//!
//! The pipeline consists of three parts, each depending only on the one below it:
//!
//! - **geodesic distance**: [`algorithms::geodesy`] computes distance between two coordinates on
//!   the WGS-84 ellipsoid (Karney's geodesic algorithm)
//! - **graph builder**: [`models::DistanceGraph`] is a complete undirected weighted graph over
//!   `[start] + waypoints`, node `0` is always the start point
//! - **route optimizer**: [`solver::RouteOptimizer`] runs a minimum spanning tree construction
//!   followed by Lin-Kernighan-Helsgaun k-opt and 2-opt improvements, then anchors the resulting
//!   path so it begins at the start point
//!
//! # Examples
//!
//! ```
//! use geo_route_core::prelude::*;
//!
//! let start = Point::new("Paris", 48.8566, 2.3522);
//! let waypoints = vec![Point::new("London", 51.5074, -0.1278), Point::new("Brussels", 50.8503, 4.3517)];
//!
//! let route = optimize_route(&start, &waypoints)?;
//!
//! assert_eq!(route.len(), 3);
//! assert_eq!(route.points()[0], start);
//! # Ok::<(), RouteError>(())
//! ```

#![warn(missing_docs)]

#[cfg(test)]
#[path = "../tests/helpers/mod.rs"]
#[macro_use]
pub mod helpers;

pub mod algorithms;
pub mod models;
pub mod prelude;
pub mod solver;
pub mod utils;
