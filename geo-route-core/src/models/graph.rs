#[cfg(test)]
#[path = "../../tests/unit/models/graph_test.rs"]
mod graph_test;

use super::{Coordinate, Point};
use crate::algorithms::{AdjacencySpec, Cost, Edge, Node};
use crate::utils::RouteError;
use std::iter::once;

/// A complete undirected weighted graph over `[start] + waypoints`.
///
/// Node `0` always corresponds to the start point as the graph is built in that order. Edge weight
/// is a geodesic distance in kilometers between endpoint coordinates. The graph is built per call
/// and holds no state across calls.
pub struct DistanceGraph {
    size: usize,
    weights: Vec<Cost>,
    neighbours: Vec<Vec<Node>>,
}

impl DistanceGraph {
    /// Creates a graph from the start point and waypoints. Fails with [`RouteError::InvalidCoordinate`]
    /// for the first point which has its coordinate outside of valid range.
    pub fn new(start: &Point, waypoints: &[Point]) -> Result<Self, RouteError> {
        let coordinates = once(start)
            .chain(waypoints.iter())
            .enumerate()
            .map(|(index, point)| point.validate(index).map(|_| point.coordinate()))
            .collect::<Result<Vec<_>, _>>()?;

        Self::from_coordinates(&coordinates, |from, to| from.distance_to(to))
    }

    /// Creates a graph from coordinates using the given distance function. The function is called
    /// exactly once for each unordered pair of distinct nodes.
    pub fn from_coordinates<F>(coordinates: &[Coordinate], mut distance: F) -> Result<Self, RouteError>
    where
        F: FnMut(&Coordinate, &Coordinate) -> Cost,
    {
        if let Some((index, coordinate)) = coordinates.iter().enumerate().find(|(_, c)| !c.is_valid()) {
            return Err(RouteError::InvalidCoordinate {
                index,
                name: String::default(),
                lat: coordinate.lat,
                lng: coordinate.lng,
            });
        }

        let size = coordinates.len();
        let mut weights = vec![0.; size * size];

        for from in 0..size {
            for to in (from + 1)..size {
                let weight = distance(&coordinates[from], &coordinates[to]);

                if !weight.is_finite() || weight < 0. {
                    return Err(RouteError::InvalidGraph(format!("edge ({from}, {to}) has invalid weight: {weight}")));
                }

                weights[from * size + to] = weight;
                weights[to * size + from] = weight;
            }
        }

        let neighbours = (0..size)
            .map(|node| {
                let mut neighbours = (0..size).filter(|&other| other != node).collect::<Vec<_>>();
                // NOTE sort is stable, so nodes with equal weight keep ascending index order
                neighbours.sort_by(|&a, &b| weights[node * size + a].total_cmp(&weights[node * size + b]));
                neighbours
            })
            .collect();

        Ok(Self { size, weights, neighbours })
    }

    /// Returns weight of the edge between two nodes, if both nodes belong to the graph.
    pub fn weight(&self, from: Node, to: Node) -> Option<Cost> {
        if from < self.size && to < self.size { self.weights.get(from * self.size + to).copied() } else { None }
    }
}

impl AdjacencySpec for DistanceGraph {
    fn size(&self) -> usize {
        self.size
    }

    fn cost(&self, edge: &Edge) -> Cost {
        self.weights[edge.0 * self.size + edge.1]
    }

    fn neighbours(&self, node: Node) -> &[Node] {
        self.neighbours[node].as_slice()
    }
}
