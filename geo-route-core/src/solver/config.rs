#[cfg(test)]
#[path = "../../tests/unit/solver/config_test.rs"]
mod config_test;

use serde::Deserialize;
use std::str::FromStr;

/// Specifies how a closed tour found by the heuristic is turned into an open path which starts
/// at the start point.
#[derive(Clone, Copy, Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum OpenPathPolicy {
    /// The start point is constrained to be the first node during tour construction and
    /// improvement: a virtual end node is connected to the start with zero cost, so the tour
    /// is opened exactly between them.
    #[default]
    FixedStart,

    /// The longest edge of the closed tour is dropped wherever it is, then the path is linearly
    /// rotated to begin at the start point. If the start point ends up in the interior of the path,
    /// the rotation breaks a different edge and re-adds the dropped one.
    DropLongestEdge,
}

impl FromStr for OpenPathPolicy {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "fixed-start" => Ok(Self::FixedStart),
            "drop-longest-edge" => Ok(Self::DropLongestEdge),
            _ => Err(format!("unknown open path policy: '{value}'")),
        }
    }
}

/// An optimizer configuration.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct OptimizerConfig {
    /// Max amount of improvements applied by each local search phase. Default is 100.
    pub max_iterations: usize,
    /// Amount of closest neighbours considered as candidates for a new edge. Default is 10.
    pub max_neighbours: usize,
    /// Specifies how the route is opened and anchored at the start point.
    pub open_path: OpenPathPolicy,
}

impl Default for OptimizerConfig {
    fn default() -> Self {
        Self { max_iterations: 100, max_neighbours: 10, open_path: OpenPathPolicy::default() }
    }
}
