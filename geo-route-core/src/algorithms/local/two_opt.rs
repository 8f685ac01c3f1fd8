#[cfg(test)]
#[path = "../../../tests/unit/algorithms/local/two_opt_test.rs"]
mod two_opt_test;

use crate::algorithms::{AdjacencySpec, Cost, Node, Path};

/// Minimal cost decrease for a swap to be applied.
const IMPROVEMENT_THRESHOLD: Cost = 1E-9;

/// Implements a classical TSP's two opt swap operation on a closed tour: two edges are removed
/// and the segment between them is reversed. The first node of the tour is never moved.
///
/// Swaps are applied in a first improvement manner until the tour is 2-optimal or `max_iterations`
/// swaps are applied. For algorithm details, see https://en.wikipedia.org/wiki/2-opt
pub fn optimize_two_opt<T: AdjacencySpec + ?Sized>(adjacency: &T, mut path: Path, max_iterations: usize) -> Path {
    let size = path.len();
    if size < 4 {
        return path;
    }

    let cost = |a: Node, b: Node| adjacency.cost(&(a, b));
    let mut iterations = 0;
    let mut has_improvement = true;

    while has_improvement && iterations < max_iterations {
        has_improvement = false;

        'search: for i in 0..(size - 2) {
            for j in (i + 2)..size {
                // edges (i, i + 1) and (size - 1, 0) are adjacent
                if i == 0 && j == size - 1 {
                    continue;
                }

                let next_j = (j + 1) % size;
                let delta = cost(path[i], path[j]) + cost(path[i + 1], path[next_j])
                    - cost(path[i], path[i + 1])
                    - cost(path[j], path[next_j]);

                if delta < -IMPROVEMENT_THRESHOLD {
                    path[(i + 1)..=j].reverse();
                    has_improvement = true;
                    iterations += 1;
                    break 'search;
                }
            }
        }
    }

    path
}
