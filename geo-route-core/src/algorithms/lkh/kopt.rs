#[cfg(test)]
#[path = "../../../tests/unit/algorithms/lkh/kopt_test.rs"]
mod kopt_test;

use super::*;
use crate::utils::Either;
use std::iter::once;

/// Amount of candidates tried for the first added edge.
const FIRST_LEVEL_TRIES: usize = 5;

/// Minimal cost decrease for a tour to be accepted as an improvement.
const IMPROVEMENT_THRESHOLD: Cost = 1E-9;

/// A candidate node for the next added edge with its (edge length difference, running gain).
type Candidate = (Node, (Cost, Cost));

/// Searches for sequential k-opt moves: the move removes edges `X = {x1, x2, ..}` from the tour and
/// adds edges `Y = {y1, y2, ..}` while the running gain `G_i = sum(|x|) - sum(|y|)` stays positive.
pub(crate) struct KOpt<T> {
    adjacency: T,
    solutions: Vec<Path>,
    max_iterations: usize,
}

impl<T> KOpt<T>
where
    T: AdjacencySpec,
{
    /// Creates a new instance of `KOpt`.
    pub fn new(adjacency: T, max_iterations: usize) -> Self {
        Self { adjacency, solutions: Vec::default(), max_iterations }
    }

    /// Applies improving moves starting from the given tour. Returns the initial tour followed by
    /// every accepted improvement, so the last one is the best.
    pub fn optimize(mut self, path: Path) -> Vec<Path> {
        let mut best_cost = get_tour_cost(&self.adjacency, &path);
        self.solutions.push(path);

        while self.solutions.len() <= self.max_iterations {
            let tour = self.solutions.last().map(|path| Tour::new(path.iter().copied()));
            let Some(path) = tour.and_then(|tour| self.improve(&tour)) else { break };

            let cost = get_tour_cost(&self.adjacency, &path);
            if cost > best_cost - IMPROVEMENT_THRESHOLD {
                break;
            }

            best_cost = cost;
            self.solutions.push(path);
        }

        self.solutions
    }

    /// Returns the first improved tour found from any node `t1` and its tour neighbour `t2`.
    fn improve(&self, tour: &Tour) -> Option<Path> {
        tour.nodes().find_map(|t1| {
            let around: BTreeSet<_> = tour.around(t1).collect();
            around.iter().find_map(|&t2| self.improve_from(tour, t1, t2, &around))
        })
    }

    fn improve_from(&self, tour: &Tour, t1: Node, t2: Node, around: &BTreeSet<Node>) -> Option<Path> {
        let removed = make_edge_set(once((t1, t2)));
        let gain = self.adjacency.cost(&(t1, t2));

        // t3 must not be a tour neighbour of t1, otherwise y1 is already in the tour
        self.rank_candidates(tour, t2, gain, &removed, &EdgeSet::new())
            .into_iter()
            .filter(|(t3, _)| !around.contains(t3))
            .take(FIRST_LEVEL_TRIES)
            .find_map(|(t3, (_, gain))| {
                self.remove_edge(tour, t1, t3, gain, &removed, &make_edge_set(once((t2, t3))))
            })
    }

    /// Returns nodes which can be joined with `from` as the next added edge ordered by how much
    /// longer the following removed edge is than the added one, ties by node index.
    ///
    /// A candidate must keep the running gain positive, must not be joined by a tour or already
    /// removed edge, and must have an edge around it which can still be removed.
    fn rank_candidates(
        &self,
        tour: &Tour,
        from: Node,
        gain: Cost,
        removed: &EdgeSet,
        added: &EdgeSet,
    ) -> Vec<Candidate> {
        let mut candidates = BTreeMap::<Node, (Cost, Cost)>::new();

        for &node in self.adjacency.neighbours(from) {
            let y_cost = self.adjacency.cost(&(from, node));
            let y_gain = gain - y_cost;
            let y = make_edge(from, node);

            if y_gain <= 0. || removed.contains(&y) || tour.contains(&y) {
                continue;
            }

            for next in tour.around(node) {
                let x = make_edge(node, next);
                if removed.contains(&x) || added.contains(&x) {
                    continue;
                }

                let diff = self.adjacency.cost(&(node, next)) - y_cost;
                candidates
                    .entry(node)
                    .and_modify(|(best_diff, best_gain)| {
                        if diff > *best_diff {
                            *best_diff = diff;
                            *best_gain = y_gain;
                        }
                    })
                    .or_insert((diff, y_gain));
            }
        }

        let mut candidates = candidates.into_iter().collect::<Vec<_>>();
        candidates.sort_by(|(_, (a, _)), (_, (b, _))| b.total_cmp(a));

        candidates
    }

    /// Removes an edge `(last, t2i)` and tries to close the tour with `(t2i, t1)`. When closing does
    /// not give a new valid tour, the search continues with the next added edge.
    fn remove_edge(
        &self,
        tour: &Tour,
        t1: Node,
        last: Node,
        gain: Cost,
        removed: &EdgeSet,
        added: &EdgeSet,
    ) -> Option<Path> {
        let ends = if removed.len() == 4 {
            // from x5 on only the longer edge around the last node is tried
            let mut around = tour.around(last);
            let (pred, succ) = around.next().zip(around.next())?;
            let is_pred_longer = self.adjacency.cost(&(pred, last)) > self.adjacency.cost(&(succ, last));

            Either::Left(once(if is_pred_longer { pred } else { succ }))
        } else {
            Either::Right(tour.around(last))
        };

        for t2i in ends {
            let x = make_edge(last, t2i);
            if added.contains(&x) || removed.contains(&x) {
                return None;
            }

            let removed = with_edge(removed, x);
            let gain = gain + self.adjacency.cost(&(last, t2i));

            if gain - self.adjacency.cost(&(t2i, t1)) > 0. {
                let closed = with_edge(added, make_edge(t2i, t1));

                match tour.reconnect(&removed, &closed) {
                    Some(path) if !self.is_known_path(&path) => return Some(path),
                    Some(_) => return None,
                    None if closed.len() > 2 => continue,
                    None => {}
                }
            }

            return self.add_edge(tour, t1, t2i, gain, &removed, added);
        }

        None
    }

    /// Adds an edge from `t2i` to one of the best ranked candidates and continues with removal.
    fn add_edge(
        &self,
        tour: &Tour,
        t1: Node,
        t2i: Node,
        gain: Cost,
        removed: &EdgeSet,
        added: &EdgeSet,
    ) -> Option<Path> {
        let tries = if removed.len() == 2 { FIRST_LEVEL_TRIES } else { 1 };

        self.rank_candidates(tour, t2i, gain, removed, added).into_iter().take(tries).find_map(|(node, (_, gain))| {
            self.remove_edge(tour, t1, node, gain, removed, &with_edge(added, make_edge(t2i, node)))
        })
    }

    fn is_known_path(&self, path: &[Node]) -> bool {
        self.solutions.iter().any(|known| known.as_slice() == path)
    }
}

fn with_edge(edges: &EdgeSet, edge: Edge) -> EdgeSet {
    edges.iter().copied().chain(once(edge)).collect()
}
