//! A collection of models to represent the route ordering problem and its result.

mod common;
pub use self::common::Coordinate;

mod graph;
pub use self::graph::DistanceGraph;

mod point;
pub use self::point::Point;

mod route;
pub use self::route::OrderedRoute;
