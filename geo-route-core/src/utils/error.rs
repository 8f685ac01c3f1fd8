#[cfg(test)]
#[path = "../../tests/unit/utils/error_test.rs"]
mod error_test;

use std::fmt;

/// A basic error type which, essentially, a wrapper on String type.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct GenericError(String);

/// A type alias for result type with `GenericError`.
pub type GenericResult<T> = Result<T, GenericError>;

impl fmt::Display for GenericError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::error::Error for GenericError {}

impl From<String> for GenericError {
    fn from(msg: String) -> Self {
        Self(msg)
    }
}

impl<'a> From<&'a str> for GenericError {
    fn from(value: &'a str) -> Self {
        Self(value.to_string())
    }
}

impl From<std::io::Error> for GenericError {
    fn from(value: std::io::Error) -> Self {
        Self(value.to_string())
    }
}

impl From<RouteError> for GenericError {
    fn from(value: RouteError) -> Self {
        Self(value.to_string())
    }
}

/// Specifies a reason why route ordering has failed.
///
/// Any given input either succeeds or fails deterministically, there is no partial result.
#[derive(Clone, Debug, PartialEq)]
pub enum RouteError {
    /// A point has latitude or longitude outside of its valid range.
    InvalidCoordinate {
        /// Position of the point in `[start] + waypoints`.
        index: usize,
        /// A point name.
        name: String,
        /// Latitude in degrees.
        lat: f64,
        /// Longitude in degrees.
        lng: f64,
    },
    /// Internal consistency violation: the graph or the discovered ordering is malformed.
    InvalidGraph(String),
}

impl fmt::Display for RouteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidCoordinate { index, name, lat, lng } => {
                write!(f, "invalid coordinate of point '{name}' at index {index}: lat={lat}, lng={lng}")
            }
            Self::InvalidGraph(reason) => write!(f, "invalid graph: {reason}"),
        }
    }
}

impl std::error::Error for RouteError {}
