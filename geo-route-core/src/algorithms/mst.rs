//! Minimum spanning tree construction used to build an initial tour (double-tree heuristic).

#[cfg(test)]
#[path = "../../tests/unit/algorithms/mst_test.rs"]
mod mst_test;

use super::*;

/// Builds a minimum spanning tree of a complete graph using Prim's algorithm rooted at `root`.
/// Returns a parent of each node, root and nodes outside of the graph have no parent.
///
/// Ties are resolved in favor of the lowest node index, so the tree is deterministic.
pub fn get_spanning_tree<T: AdjacencySpec + ?Sized>(adjacency: &T, root: Node) -> Vec<Option<Node>> {
    let size = adjacency.size();
    let mut parents = vec![None; size];

    if root >= size {
        return parents;
    }

    let mut in_tree = vec![false; size];
    let mut keys = vec![Cost::INFINITY; size];
    keys[root] = 0.;

    for _ in 0..size {
        let next = (0..size).filter(|&node| !in_tree[node]).fold(None, |best: Option<Node>, node| match best {
            Some(best) if keys[best] <= keys[node] => Some(best),
            _ => Some(node),
        });

        let Some(node) = next else { break };
        in_tree[node] = true;

        for other in (0..size).filter(|&other| !in_tree[other]) {
            let cost = adjacency.cost(&(node, other));
            if cost < keys[other] {
                keys[other] = cost;
                parents[other] = Some(node);
            }
        }
    }

    parents
}

/// Returns nodes of minimum spanning tree in depth-first preorder starting from `root`. Children
/// are visited in ascending order of their edge cost, ties by lowest node index.
///
/// Shortcutting the preorder walk gives a tour which is at most twice as long as the optimal one
/// when costs satisfy triangle inequality.
pub fn get_preorder_path<T: AdjacencySpec + ?Sized>(adjacency: &T, root: Node) -> Path {
    let parents = get_spanning_tree(adjacency, root);

    let mut children = vec![Vec::new(); parents.len()];
    parents.iter().enumerate().filter_map(|(node, parent)| parent.map(|parent| (parent, node))).for_each(
        |(parent, node)| {
            children[parent].push(node);
        },
    );
    children.iter_mut().enumerate().for_each(|(parent, nodes)| {
        nodes.sort_by(|&a, &b| adjacency.cost(&(parent, a)).total_cmp(&adjacency.cost(&(parent, b))).then(a.cmp(&b)))
    });

    let mut path = Path::with_capacity(parents.len());
    let mut stack = if root < parents.len() { vec![root] } else { vec![] };

    while let Some(node) = stack.pop() {
        path.push(node);
        stack.extend(children[node].iter().rev().copied());
    }

    path
}
