//! A crate contains the command line interface of the geo route optimizer and the functionality
//! to read routing requests and write routing results in json format.
//!
//! # Examples
//!
//! ```
//! use geo_route_cli::extensions::optimize::formats::{read_request, write_result};
//! use geo_route_cli::extensions::optimize::optimize_request;
//! use std::io::{BufReader, BufWriter};
//!
//! let request = r#"{
//!   "start": { "name": "Paris", "lat": 48.8566, "lng": 2.3522 },
//!   "waypoints": [{ "name": "London", "lat": 51.5074, "lng": -0.1278 }]
//! }"#;
//!
//! let request = read_request(BufReader::new(request.as_bytes()))?;
//! let result = optimize_request(&request, Default::default(), Default::default())?;
//!
//! let mut buffer = Vec::new();
//! write_result(BufWriter::new(&mut buffer), &result)?;
//!
//! assert_eq!(result.route.len(), 2);
//! assert_eq!(result.total_distance_text, "343.9 km");
//! # Ok::<(), geo_route_cli::core::prelude::GenericError>(())
//! ```

#![warn(missing_docs)]

#[cfg(test)]
#[path = "../tests/features/mod.rs"]
mod features;

pub use geo_route_core as core;

pub mod extensions;
