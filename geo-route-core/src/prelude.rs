//! This module reimports commonly used types.

pub use crate::models::{Coordinate, DistanceGraph, OrderedRoute, Point};

pub use crate::solver::{OpenPathPolicy, OptimizerConfig, RouteOptimizer, optimize_route};

pub use crate::utils::{Environment, GenericError, GenericResult, InfoLogger, RouteError, format_distance};
