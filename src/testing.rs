//! Fixture graphs and reference solutions shared by the unit tests.

use rand::Rng;
use rand::seq::SliceRandom;
use crate::graph::Graph;

pub fn path(n: usize) -> Graph {
    Graph::from_edges(n, (1..n).map(|v| (v - 1, v))).unwrap()
}

pub fn cycle(n: usize) -> Graph {
    Graph::from_edges(n, (0..n).map(|v| (v, (v + 1) % n))).unwrap()
}

/// Star with center 0 and the leaves `1..=leaves`.
pub fn star(leaves: usize) -> Graph {
    Graph::from_edges(leaves + 1, (1..=leaves).map(|v| (0, v))).unwrap()
}

pub fn complete(n: usize) -> Graph {
    Graph::from_edges(n, (0..n).flat_map(|u| (u + 1..n).map(move |v| (u, v)))).unwrap()
}

/// Outer 5-cycle 0..5, inner pentagram 5..10 and the spokes between them.
pub fn petersen() -> Graph {
    let outer = (0..5).map(|v| (v, (v + 1) % 5));
    let inner = (0..5).map(|v| (5 + v, 5 + (v + 2) % 5));
    let spokes = (0..5).map(|v| (v, v + 5));
    Graph::from_edges(10, outer.chain(inner).chain(spokes)).unwrap()
}

/// Returns a connected simple graph on `n` vertices: a random spanning tree with randomly
/// relabeled vertices plus up to `extra` further random edges.
pub fn random_connected_graph<R: Rng>(rng: &mut R, n: usize, extra: usize) -> Graph {
    let mut labels: Vec<usize> = (0..n).collect();
    labels.shuffle(rng);
    let mut graph = Graph::new(n).unwrap();
    for v in 1..n {
        let u = rng.random_range(0..v);
        graph.add_edge(labels[u], labels[v]).unwrap();
    }
    for _ in 0..extra {
        let u = rng.random_range(0..n);
        let v = rng.random_range(0..n);
        if u != v && !graph.has_edge(u, v) {
            graph.add_edge(u, v).unwrap();
        }
    }
    graph
}

/// Cardinality of a minimum connected vertex cover by trying every subset.
pub fn brute_force_min_cvc(graph: &Graph) -> Option<usize> {
    let n = graph.order();
    assert!(n <= 16);
    (1u32..(1 << n))
        .filter(|&mask| {
            let selection: Vec<usize> = (0..n).filter(|&v| mask & (1u32 << v) != 0).collect();
            graph.selection_is_cvc(&selection).unwrap()
        })
        .map(|mask| mask.count_ones() as usize)
        .min()
}
