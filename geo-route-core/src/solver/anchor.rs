//! Turns a closed tour into an open path and anchors the path at the start node.

#[cfg(test)]
#[path = "../../tests/unit/solver/anchor_test.rs"]
mod anchor_test;

use crate::algorithms::{AdjacencySpec, Node, Path};
use crate::utils::RouteError;

/// Opens the closed tour by removing the virtual end node. The resulting path begins with
/// the node which was connected to the virtual end and it is reversed when the start node
/// ends up last.
pub(crate) fn open_at_virtual_end(tour: &[Node], end: Node, start: Node) -> Result<Path, RouteError> {
    let index = tour
        .iter()
        .position(|&node| node == end)
        .ok_or_else(|| RouteError::InvalidGraph(format!("virtual end node {end} is not in the tour")))?;

    let mut path = tour[(index + 1)..].iter().chain(tour[..index].iter()).copied().collect::<Path>();

    if path.first() != Some(&start) && path.last() == Some(&start) {
        path.reverse();
    }

    Ok(path)
}

/// Opens the closed tour by dropping its longest edge, ties are resolved in favor of the first
/// edge in the tour order. The resulting path starts right after the dropped edge.
pub(crate) fn open_at_longest_edge<T: AdjacencySpec + ?Sized>(adjacency: &T, tour: &[Node]) -> Path {
    let size = tour.len();

    let longest = (0..size)
        .map(|idx| (idx, adjacency.cost(&(tour[idx], tour[(idx + 1) % size]))))
        .fold(None, |acc: Option<(usize, f64)>, (idx, cost)| match acc {
            Some((_, longest)) if longest >= cost => acc,
            _ => Some((idx, cost)),
        })
        .map_or(0, |(idx, _)| idx);

    tour.iter().skip(longest + 1).chain(tour.iter().take(longest + 1)).copied().collect()
}

/// Anchors the path at the start node: if the start node is not first, the path is linearly
/// rotated, so it begins at the start node while the relative order of the remaining nodes is kept.
///
/// Please note that when the start node is in the interior of the path, the rotation breaks
/// the edge before the start node and joins path's ends instead.
pub fn anchor_path(path: Path, start: Node) -> Result<Path, RouteError> {
    match path.iter().position(|&node| node == start) {
        Some(0) => Ok(path),
        Some(index) => Ok(path[index..].iter().chain(path[..index].iter()).copied().collect()),
        None => Err(RouteError::InvalidGraph(format!("start node {start} is not in the path"))),
    }
}

/// Checks that the path visits each node of `0..size` exactly once.
pub(crate) fn validate_path(path: &[Node], size: usize) -> Result<(), RouteError> {
    if path.len() != size {
        return Err(RouteError::InvalidGraph(format!("path has {} nodes, expected {size}", path.len())));
    }

    let mut visited = vec![false; size];
    path.iter().try_for_each(|&node| match visited.get_mut(node) {
        Some(seen) if !*seen => {
            *seen = true;
            Ok(())
        }
        Some(_) => Err(RouteError::InvalidGraph(format!("node {node} is visited more than once"))),
        None => Err(RouteError::InvalidGraph(format!("node {node} does not belong to the graph"))),
    })
}
