//! Independent spanning trees: priority directed DFS trees whose leaves are pairwise
//! non-adjacent in the graph, up to the two ends of a Hamiltonian path.

use std::cmp::Reverse;
use itertools::Itertools;
use crate::cust_errors::ProcessingError;
use crate::graph::Graph;

impl Graph {

    /// Builds a spanning tree of `self` by a depth first search that starts in the vertex of
    /// highest priority (the first one on ties) and always continues with the unvisited neighbor
    /// of highest priority.
    ///
    /// If the search leaves a pendant vertex `l` that is adjacent to the root in `self`, the tree
    /// path from `l` towards the root is followed up to the first vertex `b` of tree degree at
    /// least 3. If such a vertex is met before (or at) the root, the tree edge between `b` and its
    /// neighbor on that path is replaced by the edge `{l, root}`.
    ///
    /// `self` has to be connected, otherwise the result only spans the component of the root.
    /// Returns `ProcessingError::InvalidPriority` if `priority` does not hold one entry per vertex.
    pub fn ilst(&self, priority: &[usize]) -> Result<Graph, ProcessingError> {
        if priority.len() != self.order() {
            return Err(ProcessingError::InvalidPriority { expected: self.order(), found: priority.len() });
        }
        let root = priority.iter()
            .position_min_by_key(|&&p| Reverse(p))
            .expect("graph has at least one vertex");

        let (mut tree, leaf_adj_to_root) = self.priority_dfs_tree(root, priority);
        if let Some(leaf) = leaf_adj_to_root {
            if let Some((child, branch)) = closest_branch(&tree, root, leaf) {
                tree.remove_edge(child, branch)?;
                tree.add_edge(leaf, root)?;
            }
        }
        Ok(tree)
    }

    /// Iterative depth first search from `root` visiting neighbors by decreasing priority.
    /// Returns the tree and the first finished pendant vertex that is adjacent to `root`.
    fn priority_dfs_tree(&self, root: usize, priority: &[usize]) -> (Graph, Option<usize>) {
        let adj: Vec<Vec<usize>> = self.vertices()
            .map(|v| self.neighbors(v).iter().copied().sorted_by_key(|&u| Reverse(priority[u])).collect())
            .collect();

        let mut tree = Graph::new(self.order()).expect("order is positive");
        let mut visited = vec![false; self.order()];
        let mut leaf_adj_to_root = None;
        // Frames of (vertex, offset of the next neighbor to look at).
        let mut stack = vec![(root, 0)];
        visited[root] = true;

        while let Some(frame) = stack.last_mut() {
            let (source, offset) = *frame;
            let neighbors = &adj[source];
            if let Some(i) = neighbors[offset..].iter().position(|&u| !visited[u]) {
                let dest = neighbors[offset + i];
                frame.1 = offset + i + 1;
                tree.add_edge(source, dest).expect("tree edges join distinct vertices");
                visited[dest] = true;
                stack.push((dest, 0));
            } else {
                if leaf_adj_to_root.is_none()
                    && tree.degree(source) == 1
                    && self.neighbors(source).contains(&root) {
                    leaf_adj_to_root = Some(source);
                }
                stack.pop();
            }
        }
        (tree, leaf_adj_to_root)
    }
}

/// Walks from `leaf` towards `root` and returns `(child, branch)` where `branch` is the first
/// vertex of tree degree at least 3 and `child` its predecessor on the walk. Returns `None` if the
/// root is reached without meeting such a vertex.
fn closest_branch(tree: &Graph, root: usize, leaf: usize) -> Option<(usize, usize)> {
    let mut child = leaf;
    let mut current = *tree.neighbors(leaf).first()?;
    loop {
        if tree.degree(current) >= 3 {
            return Some((child, current));
        }
        if current == root {
            return None;
        }
        let next = tree.neighbors(current).iter().copied().find(|&u| u != child)?;
        child = current;
        current = next;
    }
}
