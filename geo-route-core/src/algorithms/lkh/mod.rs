//! The modified Lin-Kernighan-Helsgaun algorithm for the Traveling Salesman Problem.
//!
//! This implementation is based on the Lin-Kernighan-Helsgaun algorithm
//! implementation from https://gitlab.com/Soha/local-tsp
//!
//! Tours are closed: the last node is connected back to the first one. The first node of the
//! initial tour stays first in every improved tour.

use super::*;
use std::collections::{BTreeMap, BTreeSet};

mod tour;
use self::tour::Tour;

mod kopt;
use self::kopt::KOpt;

/// Improves the given closed tour using k-opt moves until no improvement is found or the limit of
/// improvements is reached. Returns the best discovered tour.
///
/// The search is deterministic: identical inputs produce identical tours.
pub fn optimize_tour<T: AdjacencySpec>(adjacency: T, path: Path, max_iterations: usize) -> Path {
    KOpt::new(adjacency, max_iterations).optimize(path).pop().unwrap_or_default()
}
