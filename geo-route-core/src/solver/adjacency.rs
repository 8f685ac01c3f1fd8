use crate::algorithms::{AdjacencySpec, Cost, Edge, Node};
use crate::models::DistanceGraph;
use std::iter::once;

/// An adjacency used to search for a tour over the distance graph with a limited candidate set.
///
/// When a virtual end node is added, it has index equal to the graph size, zero cost edge to the
/// start node and a large constant cost to any other node. Any tour which keeps the zero cost edge
/// is cheaper than any tour which does not, and removing the virtual end from such tour gives an
/// open path which begins at the start node.
pub(crate) struct TourAdjacency<'a> {
    graph: &'a DistanceGraph,
    virtual_end: Option<VirtualEnd>,
    neighbours: Vec<Vec<Node>>,
}

struct VirtualEnd {
    start: Node,
    penalty: Cost,
}

impl<'a> TourAdjacency<'a> {
    /// Creates an adjacency for closed tours over the graph.
    pub fn new_closed(graph: &'a DistanceGraph, max_neighbours: usize) -> Self {
        let neighbours = (0..graph.size()).map(|node| get_candidates(graph, node, max_neighbours).collect()).collect();

        Self { graph, virtual_end: None, neighbours }
    }

    /// Creates an adjacency for open paths which begin at the `start` node of the graph.
    pub fn new_open(graph: &'a DistanceGraph, start: Node, max_neighbours: usize) -> Self {
        let size = graph.size();
        let end = size;

        let max_weight = (0..size)
            .flat_map(|from| ((from + 1)..size).map(move |to| (from, to)))
            .map(|edge| graph.cost(&edge))
            .fold(0., Cost::max);

        // NOTE any path is cheaper than the penalty
        let penalty = max_weight * size as Cost + 1.;

        let neighbours = (0..size)
            .map(|node| get_candidates(graph, node, max_neighbours).chain(once(end)).collect())
            .chain(once(once(start).chain((0..size).filter(|&node| node != start)).collect()))
            .collect();

        Self { graph, virtual_end: Some(VirtualEnd { start, penalty }), neighbours }
    }

    /// Returns a virtual end node, if present.
    pub fn virtual_end(&self) -> Option<Node> {
        self.virtual_end.as_ref().map(|_| self.graph.size())
    }
}

impl AdjacencySpec for TourAdjacency<'_> {
    fn size(&self) -> usize {
        self.neighbours.len()
    }

    fn cost(&self, edge: &Edge) -> Cost {
        let end = self.graph.size();

        match (self.virtual_end.as_ref(), *edge) {
            (Some(_), (from, to)) if from == end && to == end => 0.,
            (Some(VirtualEnd { start, penalty }), (from, to)) if from == end || to == end => {
                let other = if from == end { to } else { from };
                if other == *start { 0. } else { *penalty }
            }
            _ => self.graph.cost(edge),
        }
    }

    fn neighbours(&self, node: Node) -> &[Node] {
        self.neighbours[node].as_slice()
    }
}

fn get_candidates(graph: &DistanceGraph, node: Node, max_neighbours: usize) -> impl Iterator<Item = Node> + '_ {
    graph.neighbours(node).iter().copied().take(max_neighbours.max(1))
}
