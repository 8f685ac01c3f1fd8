#[cfg(test)]
#[path = "../../../tests/unit/algorithms/lkh/tour_test.rs"]
mod tour_test;

use super::*;
use crate::utils::Either;
use rustc_hash::{FxHashMap, FxHashSet};
use std::iter::{empty, once};

/// A closed tour: the last node is connected back to the first one.
pub struct Tour {
    nodes: Path,
    edges: EdgeSet,
}

impl Tour {
    /// Creates a new tour from a sequence of nodes.
    pub fn new<I>(nodes: I) -> Self
    where
        I: IntoIterator<Item = Node>,
    {
        let nodes: Path = nodes.into_iter().collect();
        let closing = nodes.last().copied().zip(nodes.first().copied());
        let edges = make_edge_set(nodes.windows(2).map(|pair| (pair[0], pair[1])).chain(closing));

        Self { nodes, edges }
    }

    /// Checks whether the edge belongs to the tour.
    pub fn contains(&self, edge: &Edge) -> bool {
        self.edges.contains(edge)
    }

    /// Returns predecessor and successor of the node, or nothing if the node is not in the tour.
    pub fn around(&self, node: Node) -> impl Iterator<Item = Node> {
        let size = self.nodes.len();

        match self.nodes.iter().position(|&other| other == node) {
            Some(idx) => {
                let (pred, succ) = (self.nodes[(idx + size - 1) % size], self.nodes[(idx + 1) % size]);
                Either::Left(once(pred).chain(once(succ)))
            }
            None => Either::Right(empty()),
        }
    }

    /// Returns tour's nodes in visiting order.
    pub fn nodes(&self) -> impl Iterator<Item = Node> + '_ {
        self.nodes.iter().copied()
    }

    /// Returns amount of nodes in the tour.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Replaces `removed` edges with `added` ones and returns the new tour if it is still a single
    /// cycle over all nodes. The new tour begins with the same node as this one.
    pub(crate) fn reconnect(&self, removed: &EdgeSet, added: &EdgeSet) -> Option<Path> {
        let edges: EdgeSet = self.edges.difference(removed).chain(added.iter()).copied().collect();
        if edges.len() < self.len() {
            return None;
        }

        let first = self.nodes.first().copied()?;
        let successors = walk_edges(edges, first);
        if successors.len() != self.len() {
            return None;
        }

        let mut seen = FxHashSet::default();
        seen.insert(first);
        let nodes: Path =
            std::iter::successors(Some(first), |node| successors.get(node).copied().filter(|&next| seen.insert(next)))
                .collect();

        (nodes.len() == self.len()).then_some(nodes)
    }
}

/// Walks from `first` consuming one incident edge per step (the lowest one) until the walk gets stuck.
/// Returns the last successor taken from every visited node.
fn walk_edges(mut edges: EdgeSet, first: Node) -> FxHashMap<Node, Node> {
    let mut successors = FxHashMap::default();
    let mut current = first;

    while let Some(edge) = edges.iter().find(|&&(a, b)| a == current || b == current).copied() {
        edges.remove(&edge);

        let next = if edge.0 == current { edge.1 } else { edge.0 };
        successors.insert(current, next);
        current = next;
    }

    successors
}
