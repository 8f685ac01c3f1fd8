//! Contains functionality to optimize a routing request.

pub mod config;
pub mod formats;

use self::formats::{RouteRequest, RouteResult};
use geo_route_core::prelude::*;
use std::sync::Arc;

/// Orders request's waypoints using the given optimizer configuration and environment.
pub fn optimize_request(
    request: &RouteRequest,
    config: OptimizerConfig,
    environment: Arc<Environment>,
) -> GenericResult<RouteResult> {
    RouteOptimizer::new(config, environment)
        .optimize(&request.start, request.waypoints.as_slice())
        .map(RouteResult::from)
        .map_err(|err| format!("cannot optimize route: '{err}'").into())
}
