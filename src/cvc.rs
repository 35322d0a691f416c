//! Reading a connected vertex cover off a spanning tree and checking arbitrary vertex sets.

use fxhash::FxHashSet;
use crate::cust_errors::GraphError;
use crate::graph::Graph;

impl Graph {

    /// Returns the vertices of tree degree greater than 1, sorted by id.
    ///
    /// If `tree` is a path whose two ends are adjacent in `self`, the smaller end is added as
    /// well, since the edge between the ends would stay uncovered otherwise.
    pub fn cvc_from_ilst(&self, tree: &Graph) -> Vec<usize> {
        let mut cover: Vec<usize> = tree.vertices().filter(|&v| tree.degree(v) > 1).collect();
        let leaves: Vec<usize> = tree.vertices().filter(|&v| tree.degree(v) == 1).collect();
        if let [first, second] = leaves[..] {
            if self.has_edge(first, second) {
                cover.push(first);
                cover.sort_unstable();
            }
        }
        cover
    }

    /// Checks if `selection` is a connected vertex cover: every edge has an endpoint in the
    /// selection and the selected vertices are connected by edges between selected vertices.
    /// The empty selection is no connected vertex cover. Repeated vertices are ignored.
    ///
    /// Returns `GraphError::OutOfRange` if `selection` holds a vertex that is not in the graph.
    pub fn selection_is_cvc(&self, selection: &[usize]) -> Result<bool, GraphError> {
        let mut selected = vec![false; self.order()];
        for &v in selection {
            self.check_vertex(v)?;
            selected[v] = true;
        }
        Ok(self.membership_is_cvc(&selected, self.size()))
    }

    /// Same as `selection_is_cvc` for a membership array with one entry per vertex. The selection
    /// covers the graph if the canonical pairs incident to it number `num_edges`.
    pub(crate) fn membership_is_cvc(&self, selected: &[bool], num_edges: usize) -> bool {
        debug_assert_eq!(selected.len(), self.order());
        let start = match selected.iter().position(|&s| s) {
            Some(v) => v,
            None => return false,
        };

        // Cover
        let mut covered = FxHashSet::default();
        for v in self.vertices().filter(|&v| selected[v]) {
            for &u in self.neighbors(v) {
                covered.insert((v.min(u), v.max(u)));
            }
        }
        if covered.len() != num_edges {
            return false;
        }

        // Connectivity inside the selection.
        let mut visited = vec![false; self.order()];
        let mut stack = vec![start];
        visited[start] = true;
        let mut reached = 1;
        while let Some(v) = stack.pop() {
            for &u in self.neighbors(v) {
                if selected[u] && !visited[u] {
                    visited[u] = true;
                    reached += 1;
                    stack.push(u);
                }
            }
        }
        reached == selected.iter().filter(|&&s| s).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use crate::ordering::{ordering_to_priorities, Heuristic};
    use crate::testing::{brute_force_min_cvc, cycle, path, petersen, random_connected_graph, star};
    use rand::SeedableRng;
    use rand_pcg::Pcg64Mcg;

    const HEURISTICS: [Heuristic; 6] = [
        Heuristic::DescendingDegree,
        Heuristic::SmallestLast,
        Heuristic::SmallestLogLast(1),
        Heuristic::SmallestLogLast(8),
        Heuristic::SaturationDegree,
        Heuristic::Degeneracy,
    ];

    fn ilst_cover(g: &Graph, ordering: &[usize]) -> Vec<usize> {
        let tree = g.ilst(&ordering_to_priorities(ordering)).unwrap();
        g.cvc_from_ilst(&tree)
    }

    fn assert_covers_for_all_heuristics(g: &Graph) {
        for h in HEURISTICS {
            let mut ordering = g.ordering(h).unwrap();
            assert!(g.selection_is_cvc(&ilst_cover(g, &ordering)).unwrap(), "{:?}", h);
            ordering.reverse();
            assert!(g.selection_is_cvc(&ilst_cover(g, &ordering)).unwrap(), "{:?} reversed", h);
        }
    }

    #[test]
    fn four_cycle_test() {
        let g = cycle(4);
        let cover = ilst_cover(&g, &g.descending_degree_ordering());
        // Path 0-1-2-3 plus the leaf 0, which closes the ring.
        assert_eq!(cover, vec![0, 1, 2]);
        assert!(g.selection_is_cvc(&cover).unwrap());
        assert_eq!(brute_force_min_cvc(&g), Some(3));
    }

    #[test]
    fn star_test() {
        let g = star(5);
        assert_eq!(ilst_cover(&g, &g.descending_degree_ordering()), vec![0]);
        let g = path(2);
        assert_eq!(ilst_cover(&g, &[0, 1]), vec![0]);
    }

    #[test]
    fn biconnected_graphs_test() {
        assert_covers_for_all_heuristics(&cycle(6));
        assert_covers_for_all_heuristics(&petersen());
        for n in 3..12 {
            assert_covers_for_all_heuristics(&cycle(n));
        }
    }

    #[test]
    fn random_graphs_test() {
        let rng = &mut Pcg64Mcg::seed_from_u64(11);
        for n in [2, 3, 4, 6, 9, 12] {
            for extra in [0, 1, n, 3 * n] {
                let g = random_connected_graph(rng, n, extra);
                assert_covers_for_all_heuristics(&g);
                let minimum = brute_force_min_cvc(&g).unwrap();
                let cover = ilst_cover(&g, &g.descending_degree_ordering());
                assert!(cover.len() >= minimum);
            }
        }
        for n in [50, 300] {
            assert_covers_for_all_heuristics(&random_connected_graph(rng, n, 2 * n));
        }
    }

    #[test]
    fn branch_correction_cover_test() {
        let gr = Cursor::new("5 5\n0 1\n1 2\n2 3\n2 4\n4 0\n");
        let g = Graph::read_graph(gr).unwrap();
        let cover = ilst_cover(&g, &[0, 1, 2, 3, 4]);
        // The corrected tree is the path 4-0-1-2-3 and its ends are not adjacent.
        assert_eq!(cover, vec![0, 1, 2]);
        assert!(g.selection_is_cvc(&cover).unwrap());
    }

    #[test]
    fn selection_test() {
        let g = path(4);
        assert_eq!(g.selection_is_cvc(&[1, 2]), Ok(true));
        assert_eq!(g.selection_is_cvc(&[2, 1, 2]), Ok(true));
        assert_eq!(g.selection_is_cvc(&[0, 1, 2, 3]), Ok(true));
        // Covers every edge but is not connected.
        assert_eq!(g.selection_is_cvc(&[0, 2]), Ok(false));
        // Connected but misses the edge 2-3.
        assert_eq!(g.selection_is_cvc(&[1]), Ok(false));
        assert_eq!(g.selection_is_cvc(&[]), Ok(false));
        assert_eq!(g.selection_is_cvc(&[1, 9]), Err(GraphError::OutOfRange { vertex: 9, order: 4 }));
    }

    #[test]
    fn single_vertex_test() {
        let g = Graph::new(1).unwrap();
        assert_eq!(g.selection_is_cvc(&[0]), Ok(true));
        assert_eq!(g.selection_is_cvc(&[]), Ok(false));
    }

    #[test]
    fn parallel_edges_fail_verification_test() {
        let g = Graph::read_graph(Cursor::new("3 3\n0 1\n0 1\n1 2\n")).unwrap();
        assert_eq!(g.selection_is_cvc(&[1]), Ok(false));
        assert_eq!(g.selection_is_cvc(&[0, 1, 2]), Ok(false));
    }

    #[test]
    fn parallel_edges_exact_solvers_agree_test() {
        let g = Graph::read_graph(Cursor::new("3 3\n0 1\n0 1\n1 2\n")).unwrap();
        assert_eq!(g.find_cvc_by_backtracking(), Ok(vec![1]));
        assert_eq!(g.find_cvc_by_bitmasking(), Ok(0b010));
    }
}
