use std::collections::BTreeSet;

/// A node is a unique identifier for a location in a tour.
pub type Node = usize;

/// An edge is a pair of nodes that are connected in a tour.
pub type Edge = (usize, usize);

/// A path is a sequence of nodes that are connected in a tour.
pub type Path = Vec<Node>;

/// Represents the cost of a transition.
pub type Cost = f64;

/// A set of edges.
pub(crate) type EdgeSet = BTreeSet<Edge>;

/// Represents graph structure with weighted edges and neighborhood relationships.
pub trait AdjacencySpec {
    /// Returns amount of nodes in the graph.
    fn size(&self) -> usize;

    /// Returns transition cost for the given edge. Cost is symmetric.
    fn cost(&self, edge: &Edge) -> Cost;

    /// Returns the neighbours of a node ordered by their preference.
    fn neighbours(&self, node: Node) -> &[Node];
}

impl<T: AdjacencySpec + ?Sized> AdjacencySpec for &T {
    fn size(&self) -> usize {
        (**self).size()
    }

    fn cost(&self, edge: &Edge) -> Cost {
        (**self).cost(edge)
    }

    fn neighbours(&self, node: Node) -> &[Node] {
        (**self).neighbours(node)
    }
}

/// Returns cost of the closed tour: the last node is connected back to the first one.
pub fn get_tour_cost<T: AdjacencySpec + ?Sized>(adjacency: &T, path: &[Node]) -> Cost {
    get_path_cost(adjacency, path) + path.last().zip(path.first()).map_or(0., |(&l, &f)| adjacency.cost(&(l, f)))
}

/// Returns cost of the open path.
pub fn get_path_cost<T: AdjacencySpec + ?Sized>(adjacency: &T, path: &[Node]) -> Cost {
    path.windows(2).map(|w| adjacency.cost(&(w[0], w[1]))).sum()
}

/// Creates an edge from a pair of nodes.
pub(crate) fn make_edge(i: Node, j: Node) -> Edge {
    if i < j { (i, j) } else { (j, i) }
}

/// Creates a set of edges from an iterator of edges.
pub(crate) fn make_edge_set<I>(edges: I) -> EdgeSet
where
    I: IntoIterator<Item = (Node, Node)>,
{
    edges.into_iter().map(|(i, j)| make_edge(i, j)).collect()
}
