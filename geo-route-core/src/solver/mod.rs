//! The solver module contains the route optimizer: the entry point of the crate.
//!
//! # Algorithm
//!
//! The optimizer works on the complete distance graph over `[start] + waypoints`:
//!
//! 1. an initial tour is a depth-first preorder walk over minimum spanning tree rooted at the start
//! 2. the tour is improved by the modified Lin-Kernighan-Helsgaun k-opt moves
//! 3. the tour is polished by 2-opt moves
//! 4. the closed tour is opened according to [`OpenPathPolicy`]
//! 5. the path is anchored: linearly rotated, so it begins at the start point
//!
//! All choices are deterministic: ties are resolved in favor of the lowest node index, so identical
//! inputs produce identical routes.
//!
//! If there are no waypoints, the optimizer is not invoked at all and the route consists of the
//! start point only. A single waypoint is simply appended to the start.

#[cfg(test)]
#[path = "../../tests/unit/solver/optimizer_test.rs"]
mod optimizer_test;

mod adjacency;
use self::adjacency::TourAdjacency;

mod anchor;
pub use self::anchor::anchor_path;
use self::anchor::*;

mod config;
pub use self::config::*;

use crate::algorithms::lkh::optimize_tour;
use crate::algorithms::local::optimize_two_opt;
use crate::algorithms::mst::get_preorder_path;
use crate::algorithms::{AdjacencySpec, Node, Path, get_path_cost, get_tour_cost};
use crate::models::{DistanceGraph, OrderedRoute, Point};
use crate::utils::{Environment, RouteError, Timer};
use std::sync::Arc;

/// A node index of the start point in the distance graph.
pub const START_NODE: Node = 0;

/// Minimal amount of nodes in a tour for k-opt moves to be tried.
const MIN_KOPT_TOUR_SIZE: usize = 5;

/// Orders waypoints into a short open route which begins at the start point using default
/// configuration and silent environment.
pub fn optimize_route(start: &Point, waypoints: &[Point]) -> Result<OrderedRoute, RouteError> {
    RouteOptimizer::default().optimize(start, waypoints)
}

/// Orders waypoints into a visiting sequence which approximately minimizes total travel distance.
///
/// The optimizer holds no state between calls and can be shared between threads.
#[derive(Clone, Default)]
pub struct RouteOptimizer {
    config: OptimizerConfig,
    environment: Arc<Environment>,
}

impl RouteOptimizer {
    /// Creates a new instance of `RouteOptimizer`.
    pub fn new(config: OptimizerConfig, environment: Arc<Environment>) -> Self {
        Self { config, environment }
    }

    /// Returns a permutation of `[start] + waypoints` in visiting order, the start point is always first.
    ///
    /// Fails with [`RouteError::InvalidCoordinate`] if any point is outside of the valid range: bad
    /// points are never dropped or clamped.
    pub fn optimize(&self, start: &Point, waypoints: &[Point]) -> Result<OrderedRoute, RouteError> {
        start.validate(START_NODE)?;

        if waypoints.is_empty() {
            (self.environment.logger)("no waypoints: the route consists of the start point only");
            return Ok(OrderedRoute::new(vec![start.clone()]));
        }

        if let [waypoint] = waypoints {
            waypoint.validate(START_NODE + 1)?;
            (self.environment.logger)("single waypoint: the route has only one possible order");
            return Ok(OrderedRoute::new(vec![start.clone(), waypoint.clone()]));
        }

        let timer = Timer::start();
        let graph = DistanceGraph::new(start, waypoints)?;

        if graph.size() != waypoints.len() + 1 {
            return Err(RouteError::InvalidGraph(format!(
                "graph has {} nodes, expected {}",
                graph.size(),
                waypoints.len() + 1
            )));
        }

        let path = anchor_path(self.find_path(&graph)?, START_NODE)?;
        validate_path(&path, graph.size())?;

        (self.environment.logger)(
            format!(
                "ordered {} waypoints in {}μs, route distance: {:.3}km",
                waypoints.len(),
                timer.elapsed_micros(),
                get_path_cost(&graph, &path)
            )
            .as_str(),
        );

        let points = path
            .into_iter()
            .map(|node| if node == START_NODE { start } else { &waypoints[node - 1] })
            .cloned()
            .collect();

        Ok(OrderedRoute::new(points))
    }

    /// Returns an open path over the graph's nodes, not necessarily anchored.
    fn find_path(&self, graph: &DistanceGraph) -> Result<Path, RouteError> {
        match self.config.open_path {
            OpenPathPolicy::FixedStart => {
                let adjacency = TourAdjacency::new_open(graph, START_NODE, self.config.max_neighbours);
                let end = adjacency
                    .virtual_end()
                    .ok_or_else(|| RouteError::InvalidGraph("no virtual end node".to_string()))?;

                let initial = get_preorder_path(graph, START_NODE).into_iter().chain(std::iter::once(end)).collect();
                let tour = self.improve_tour(&adjacency, initial);

                open_at_virtual_end(&tour, end, START_NODE)
            }
            OpenPathPolicy::DropLongestEdge => {
                let adjacency = TourAdjacency::new_closed(graph, self.config.max_neighbours);

                let initial = get_preorder_path(graph, START_NODE);
                let tour = self.improve_tour(&adjacency, initial);

                Ok(open_at_longest_edge(&adjacency, &tour))
            }
        }
    }

    /// Applies k-opt and 2-opt improvements to the closed tour.
    fn improve_tour(&self, adjacency: &TourAdjacency<'_>, tour: Path) -> Path {
        let max_iterations = self.config.max_iterations;
        let initial_cost = get_tour_cost(adjacency, &tour);

        let tour = if tour.len() >= MIN_KOPT_TOUR_SIZE { optimize_tour(adjacency, tour, max_iterations) } else { tour };
        let kopt_cost = get_tour_cost(adjacency, &tour);

        let tour = optimize_two_opt(adjacency, tour, max_iterations);
        let final_cost = get_tour_cost(adjacency, &tour);

        (self.environment.logger)(
            format!(
                "tour of {} nodes improved by {:.3}km with k-opt and by {:.3}km with 2-opt",
                adjacency.size(),
                initial_cost - kopt_cost,
                kopt_cost - final_cost
            )
            .as_str(),
        );

        tour
    }
}
