//! Contains routing request reader and routing result writer.

#[cfg(test)]
#[path = "../../../tests/unit/extensions/optimize/formats_test.rs"]
mod formats_test;

use geo_route_core::prelude::*;
use serde::{Deserialize, Serialize};
use std::io::{BufReader, BufWriter, Read, Write};

/// A routing request: the start point and waypoints to visit.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct RouteRequest {
    /// A point where the route begins.
    pub start: Point,
    /// Points to visit in any order. Might be empty.
    #[serde(default)]
    pub waypoints: Vec<Point>,
}

/// A routing result.
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteResult {
    /// Points in visiting order, the start point is always first.
    pub route: Vec<Point>,
    /// Distances in kilometers between consecutive points.
    pub legs: Vec<f64>,
    /// A total route distance in kilometers.
    pub total_distance: f64,
    /// A human readable total route distance.
    pub total_distance_text: String,
}

impl From<OrderedRoute> for RouteResult {
    fn from(route: OrderedRoute) -> Self {
        let legs = route.legs();
        let total_distance = legs.iter().sum();

        Self { route: route.into_points(), legs, total_distance, total_distance_text: format_distance(total_distance) }
    }
}

/// Reads routing request from json.
pub fn read_request<R: Read>(reader: BufReader<R>) -> GenericResult<RouteRequest> {
    serde_json::from_reader(reader).map_err(|err| format!("cannot deserialize request: '{err}'").into())
}

/// Writes routing result as json.
pub fn write_result<W: Write>(writer: BufWriter<W>, result: &RouteResult) -> GenericResult<()> {
    let mut writer = writer;

    serde_json::to_writer_pretty(&mut writer, result).map_err(|err| format!("cannot serialize result: '{err}'"))?;
    writer.flush().map_err(|err| format!("cannot write result: '{err}'"))?;

    Ok(())
}
