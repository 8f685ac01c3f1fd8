use crate::algorithms::{AdjacencySpec, Cost, Edge, Node};

/// A test adjacency with euclidean distances between points on a plane.
pub struct EuclideanAdjacency {
    points: Vec<(f64, f64)>,
    neighbours: Vec<Vec<Node>>,
}

impl EuclideanAdjacency {
    pub fn new(points: &[(f64, f64)]) -> Self {
        let neighbours =
            (0..points.len()).map(|node| (0..points.len()).filter(|&other| other != node).collect()).collect();

        Self { points: points.to_vec(), neighbours }
    }
}

impl AdjacencySpec for EuclideanAdjacency {
    fn size(&self) -> usize {
        self.points.len()
    }

    fn cost(&self, edge: &Edge) -> Cost {
        let (from, to) = (self.points[edge.0], self.points[edge.1]);

        ((from.0 - to.0).powi(2) + (from.1 - to.1).powi(2)).sqrt()
    }

    fn neighbours(&self, node: Node) -> &[Node] {
        self.neighbours[node].as_slice()
    }
}
