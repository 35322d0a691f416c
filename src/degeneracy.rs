//! Core numbers and degeneracy ordering by bucket-queue peeling in O(n + m).

use crate::graph::Graph;

/// Scratch state of one peeling run. The vertices are kept in `vertices` sorted by their current
/// residual degree, `offsets[d]` is the first slot of the bucket holding the vertices of residual
/// degree `d` and `positions` is the inverse of `vertices`.
struct DegreeBuckets {
    degrees: Vec<usize>,
    offsets: Vec<usize>,
    vertices: Vec<usize>,
    positions: Vec<usize>,
}

impl DegreeBuckets {

    fn new(graph: &Graph) -> Self {
        let n = graph.order();
        let degrees: Vec<usize> = graph.vertices().map(|v| graph.degree(v)).collect();
        let max_degree = degrees.iter().copied().max().unwrap_or(0);

        // Counting sort: frequencies turned into bucket starts by an exclusive prefix sum.
        let mut offsets = vec![0; max_degree + 1];
        for &d in &degrees {
            offsets[d] += 1;
        }
        let mut start = 0;
        for offset in offsets.iter_mut() {
            let count = *offset;
            *offset = start;
            start += count;
        }

        let mut next_slot = offsets.clone();
        let mut vertices = vec![0; n];
        let mut positions = vec![0; n];
        for v in 0..n {
            let slot = next_slot[degrees[v]];
            vertices[slot] = v;
            positions[v] = slot;
            next_slot[degrees[v]] += 1;
        }

        DegreeBuckets {
            degrees,
            offsets,
            vertices,
            positions,
        }
    }

    /// Dequeues the vertices in order of their residual degree. Returns the dequeue order and the
    /// core number of every vertex.
    fn peel(mut self, graph: &Graph) -> (Vec<usize>, Vec<usize>) {
        let n = self.vertices.len();
        let mut order = Vec::with_capacity(n);
        for i in 0..n {
            let v = self.vertices[i];
            order.push(v);
            for &u in graph.neighbors(v) {
                let du = self.degrees[u];
                if self.degrees[v] < du {
                    // Move `u` to the front of its bucket and let the bucket start one slot later,
                    // which puts `u` at the end of the bucket of degree `du - 1`.
                    let first_slot = self.offsets[du];
                    let first = self.vertices[first_slot];
                    let slot_u = self.positions[u];
                    self.vertices.swap(slot_u, first_slot);
                    self.positions[first] = slot_u;
                    self.positions[u] = first_slot;
                    self.offsets[du] += 1;
                    self.degrees[u] -= 1;
                }
            }
        }
        (order, self.degrees)
    }
}

impl Graph {

    /// Returns the core number of every vertex, i.e. the largest `k` such that the vertex belongs
    /// to the `k`-core of the graph. Isolated vertices have core number 0.
    pub fn core_numbers(&self) -> Vec<usize> {
        DegreeBuckets::new(self).peel(self).1
    }

    /// Returns a degeneracy ordering: every vertex has at most its core number many neighbors
    /// that come later in the ordering.
    pub fn degeneracy_ordering(&self) -> Vec<usize> {
        DegreeBuckets::new(self).peel(self).0
    }

    /// Returns the degeneracy ordering together with the core numbers of one peeling run.
    pub fn degeneracy_ordering_and_cores(&self) -> (Vec<usize>, Vec<usize>) {
        DegreeBuckets::new(self).peel(self)
    }

    /// Returns the degeneracy of the graph, the maximum core number.
    pub fn degeneracy(&self) -> usize {
        self.core_numbers().into_iter().max().unwrap_or(0)
    }
}
