//! Vertex orderings used as ILST priorities.
//!
//! Besides the static descending degree ordering, the heuristics repeatedly pick a vertex by a
//! key that changes while the ordering is built. They keep the vertices in a `BTreeSet` of
//! `(key, vertex)` tuples and re-key a vertex by removing and reinserting its tuple whenever one
//! of its key components changes.

use std::cmp::Reverse;
use std::collections::BTreeSet;
use fxhash::FxHashSet;
use itertools::Itertools;
use crate::cust_errors::ProcessingError;
use crate::graph::Graph;

/// Largest accepted value of the smallest-log-last parameter `r`.
pub const MAX_ROUNDS: usize = 32;

/// The available ordering strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Heuristic {
    DescendingDegree,
    SmallestLast,
    /// Smallest-log-last with the number of vertices peeled per round.
    SmallestLogLast(usize),
    SaturationDegree,
    /// Degeneracy ordering of the bucket-queue peeling.
    Degeneracy,
}

impl Heuristic {

    /// Returns the heuristic for the short names `dd`, `sl`, `sll`, `sd` and `dg`, or `None` if
    /// `name` is unknown. `rounds` is only used by `sll`.
    pub fn from_name(name: &str, rounds: usize) -> Option<Self> {
        match name {
            "dd" => Some(Heuristic::DescendingDegree),
            "sl" => Some(Heuristic::SmallestLast),
            "sll" => Some(Heuristic::SmallestLogLast(rounds)),
            "sd" => Some(Heuristic::SaturationDegree),
            "dg" => Some(Heuristic::Degeneracy),
            _ => None,
        }
    }
}

/// Turns an ordering into priorities: the first vertex of `ordering` gets the highest priority
/// `n - 1`, the last one priority 0.
pub fn ordering_to_priorities(ordering: &[usize]) -> Vec<usize> {
    let n = ordering.len();
    let mut priority = vec![0; n];
    for (i, &v) in ordering.iter().enumerate() {
        priority[v] = n - i - 1;
    }
    priority
}

/// Vertices keyed by `(residual degree, id)`. Dequeuing a vertex lowers the residual degree of
/// its queued neighbors.
struct ResidualQueue<'a> {
    graph: &'a Graph,
    degrees: Vec<usize>,
    queued: Vec<bool>,
    todo: BTreeSet<(usize, usize)>,
}

impl<'a> ResidualQueue<'a> {

    fn new(graph: &'a Graph) -> Self {
        let degrees: Vec<usize> = graph.vertices().map(|v| graph.degree(v)).collect();
        let todo = graph.vertices().map(|v| (degrees[v], v)).collect();
        ResidualQueue {
            graph,
            degrees,
            queued: vec![true; graph.order()],
            todo,
        }
    }

    fn is_empty(&self) -> bool {
        self.todo.is_empty()
    }

    /// Residual degree of the vertex that is dequeued next.
    fn min_degree(&self) -> Option<usize> {
        self.todo.iter().next().map(|(d, _)| *d)
    }

    fn pop(&mut self) -> Option<usize> {
        let (_, v) = self.todo.pop_first()?;
        self.queued[v] = false;
        for &u in self.graph.neighbors(v) {
            if !self.queued[u] {
                continue;
            }
            self.todo.remove(&(self.degrees[u], u));
            self.degrees[u] -= 1;
            self.todo.insert((self.degrees[u], u));
        }
        Some(v)
    }
}

impl Graph {

    /// Returns the ordering for `heuristic`.
    pub fn ordering(&self, heuristic: Heuristic) -> Result<Vec<usize>, ProcessingError> {
        Ok(match heuristic {
            Heuristic::DescendingDegree => self.descending_degree_ordering(),
            Heuristic::SmallestLast => self.smallest_last_ordering(),
            Heuristic::SmallestLogLast(rounds) => self.smallest_log_last_ordering(rounds)?,
            Heuristic::SaturationDegree => self.saturation_degree_ordering(),
            Heuristic::Degeneracy => self.degeneracy_ordering(),
        })
    }

    /// Sorts the vertices by decreasing degree, ties by increasing id.
    pub fn descending_degree_ordering(&self) -> Vec<usize> {
        self.vertices()
            .sorted_by_key(|&v| (Reverse(self.degree(v)), v))
            .collect()
    }

    /// Repeatedly removes a vertex of minimum residual degree (ties by smallest id). The vertices
    /// are returned in reversed removal order, the first removed vertex comes last.
    pub fn smallest_last_ordering(&self) -> Vec<usize> {
        let mut queue = ResidualQueue::new(self);
        let mut removed = Vec::with_capacity(self.order());
        while let Some(v) = queue.pop() {
            removed.push(v);
        }
        removed.reverse();
        removed
    }

    /// Coarser variant of `smallest_last_ordering`. The threshold `d` grows by one per
    /// generation and in every generation at most `max_rounds` vertices are removed, each only if
    /// the power of two above its residual degree does not exceed `d`.
    ///
    /// Returns `ProcessingError::InvalidRounds` if `max_rounds` is not in `1..=MAX_ROUNDS`.
    pub fn smallest_log_last_ordering(&self, max_rounds: usize) -> Result<Vec<usize>, ProcessingError> {
        if !(1..=MAX_ROUNDS).contains(&max_rounds) {
            return Err(ProcessingError::InvalidRounds(max_rounds));
        }
        let mut queue = ResidualQueue::new(self);
        let mut removed = Vec::with_capacity(self.order());
        let mut d = 0;
        while !queue.is_empty() {
            for _ in 0..max_rounds {
                match queue.min_degree() {
                    Some(degree) if degree.next_power_of_two() <= d => {
                        removed.push(queue.pop().expect("queue is not empty"));
                    }
                    _ => break,
                }
            }
            d += 1;
        }
        removed.reverse();
        Ok(removed)
    }

    /// DSATUR-style ordering. Repeatedly picks the uncolored vertex with the most distinct colors
    /// among its neighbors, then the most uncolored neighbors, then the highest degree, ties by
    /// smallest id, and gives it the smallest color none of its neighbors has. The colors only
    /// steer the selection. The vertices are returned in reversed selection order.
    pub fn saturation_degree_ordering(&self) -> Vec<usize> {
        let n = self.order();
        let mut adj_colors: Vec<BTreeSet<usize>> = vec![BTreeSet::new(); n];
        let mut adj_uncolored: Vec<FxHashSet<usize>> = self.vertices()
            .map(|v| self.neighbors(v).iter().copied().collect())
            .collect();

        let key = |v: usize, adj_colors: &[BTreeSet<usize>], adj_uncolored: &[FxHashSet<usize>]| {
            (Reverse(adj_colors[v].len()), Reverse(adj_uncolored[v].len()), Reverse(self.degree(v)), v)
        };
        let mut uncolored: BTreeSet<_> = self.vertices()
            .map(|v| key(v, &adj_colors, &adj_uncolored))
            .collect();

        let mut selected = Vec::with_capacity(n);
        while let Some((_, _, _, v)) = uncolored.pop_first() {
            selected.push(v);
            let color = smallest_available_color(&adj_colors[v]);
            let neighbors = std::mem::take(&mut adj_uncolored[v]);
            for u in neighbors {
                uncolored.remove(&key(u, &adj_colors, &adj_uncolored));
                adj_colors[u].insert(color);
                adj_uncolored[u].remove(&v);
                uncolored.insert(key(u, &adj_colors, &adj_uncolored));
            }
        }
        selected.reverse();
        selected
    }
}

/// Smallest non-negative integer missing from `colors`.
fn smallest_available_color(colors: &BTreeSet<usize>) -> usize {
    let mut next = 0;
    for &color in colors {
        if color != next {
            break;
        }
        next += 1;
    }
    next
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use crate::testing::{cycle, petersen, random_connected_graph, star};
    use rand::SeedableRng;
    use rand_pcg::Pcg64Mcg;

    fn is_permutation(order: &[usize], n: usize) -> bool {
        order.iter().copied().sorted().eq(0..n)
    }

    #[test]
    fn descending_degree_test() {
        assert_eq!(cycle(4).descending_degree_ordering(), vec![0, 1, 2, 3]);
        let gr = Cursor::new("5 4\n0 1\n1 2\n1 3\n3 4\n");
        let g = Graph::read_graph(gr).unwrap();
        assert_eq!(g.descending_degree_ordering(), vec![1, 3, 0, 2, 4]);
    }

    #[test]
    fn smallest_last_test() {
        // Path 0-1-2-3: 0 goes first, then 1 (residual degree 0), 2 and 3.
        let gr = Cursor::new("4 3\n0 1\n1 2\n2 3\n");
        let g = Graph::read_graph(gr).unwrap();
        assert_eq!(g.smallest_last_ordering(), vec![3, 2, 1, 0]);
        // Once the center is down to residual degree 1 it ties with the last leaf and wins by id.
        let order = star(4).smallest_last_ordering();
        assert_eq!(order, vec![4, 0, 3, 2, 1]);
    }

    #[test]
    fn smallest_log_last_test() {
        let g = petersen();
        assert_eq!(g.smallest_log_last_ordering(0), Err(ProcessingError::InvalidRounds(0)));
        assert_eq!(g.smallest_log_last_ordering(33), Err(ProcessingError::InvalidRounds(33)));
        for r in 1..=MAX_ROUNDS {
            assert!(is_permutation(&g.smallest_log_last_ordering(r).unwrap(), 10));
        }
        // With a single vertex per generation on a path, vertex 0 (degree 1) is removed at d = 1,
        // then 1 at d = 2 with residual degree 1, and so on.
        let gr = Cursor::new("4 3\n0 1\n1 2\n2 3\n");
        let g = Graph::read_graph(gr).unwrap();
        assert_eq!(g.smallest_log_last_ordering(1).unwrap(), vec![3, 2, 1, 0]);
    }

    #[test]
    fn saturation_degree_test() {
        // Star: the center has the highest degree and is colored first, it ends up last.
        let order = star(3).saturation_degree_ordering();
        assert_eq!(order, vec![3, 2, 1, 0]);
        // Triangle 0-1-2 with pendant 3 at 2: 2 first, then 0 and 1 (saturation 1, one uncolored
        // neighbor), then 3.
        let gr = Cursor::new("4 4\n0 1\n1 2\n2 0\n2 3\n");
        let g = Graph::read_graph(gr).unwrap();
        assert_eq!(g.saturation_degree_ordering(), vec![3, 1, 0, 2]);
    }

    #[test]
    fn smallest_available_color_test() {
        assert_eq!(smallest_available_color(&BTreeSet::new()), 0);
        assert_eq!(smallest_available_color(&vec![0, 1, 3].into_iter().collect()), 2);
        assert_eq!(smallest_available_color(&vec![1, 2].into_iter().collect()), 0);
    }

    #[test]
    fn priorities_test() {
        assert_eq!(ordering_to_priorities(&[2, 0, 1]), vec![1, 0, 2]);
        assert_eq!(ordering_to_priorities(&[0, 1, 2, 3]), vec![3, 2, 1, 0]);
    }

    #[test]
    fn heuristics_are_permutations_test() {
        let rng = &mut Pcg64Mcg::seed_from_u64(5);
        let heuristics = [
            Heuristic::DescendingDegree,
            Heuristic::SmallestLast,
            Heuristic::SmallestLogLast(1),
            Heuristic::SmallestLogLast(4),
            Heuristic::SmallestLogLast(MAX_ROUNDS),
            Heuristic::SaturationDegree,
            Heuristic::Degeneracy,
        ];
        for n in [1, 2, 7, 40] {
            for extra in [0, 2 * n] {
                let g = random_connected_graph(rng, n, extra);
                for h in heuristics {
                    assert!(is_permutation(&g.ordering(h).unwrap(), n));
                }
            }
        }
    }

    #[test]
    fn from_name_test() {
        assert_eq!(Heuristic::from_name("sll", 3), Some(Heuristic::SmallestLogLast(3)));
        assert_eq!(Heuristic::from_name("dg", 0), Some(Heuristic::Degeneracy));
        assert_eq!(Heuristic::from_name("xx", 0), None);
    }
}
