//! Undirected, simple graph datastructure.
//! Vertices are the ids `0..order`, the neighborhood of each vertex is kept as an adjacency list
//! in insertion order. The number of vertices is fixed at construction, edges can be added and
//! removed.

use std::io::prelude::*;
use std::io;
use std::ops::Range;
use fxhash::FxHashSet;
use crate::cust_errors::{GraphError, ImportError};

/// The graph datastructure
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Graph {
    adj: Vec<Vec<usize>>,
    num_edges: usize,
}

impl Graph {

    /// Returns an edgeless graph with `order` vertices.
    pub fn new(order: usize) -> Result<Self, GraphError> {
        if order == 0 {
            return Err(GraphError::InvalidOrder);
        }
        Ok(Graph {
            adj: vec![Vec::new(); order],
            num_edges: 0,
        })
    }

    /// Returns a graph with `order` vertices and all `edges`.
    pub fn from_edges<I: IntoIterator<Item=(usize, usize)>>(order: usize, edges: I) -> Result<Self, GraphError> {
        let mut graph = Graph::new(order)?;
        for (u, v) in edges {
            graph.add_edge(u, v)?;
        }
        Ok(graph)
    }

    /// Returns the number of vertices in the graph.
    pub fn order(&self) -> usize {
        self.adj.len()
    }

    /// Returns the number of edges in the graph.
    pub fn size(&self) -> usize {
        self.num_edges
    }

    /// Returns the range of all vertex ids.
    pub fn vertices(&self) -> Range<usize> {
        0..self.order()
    }

    /// Returns the neighbors of `v`.
    ///
    /// # Panics
    /// Panics if `v` is out of range.
    pub fn neighbors(&self, v: usize) -> &[usize] {
        assert!(v < self.order(), "vertex {} is out of range for a graph of order {}", v, self.order());
        &self.adj[v]
    }

    /// Returns the number of neighbors of `v`.
    ///
    /// # Panics
    /// Panics if `v` is out of range.
    pub fn degree(&self, v: usize) -> usize {
        self.neighbors(v).len()
    }

    /// Checks if `u` and `v` are adjacent.
    ///
    /// # Panics
    /// Panics if `u` or `v` is out of range.
    pub fn has_edge(&self, u: usize, v: usize) -> bool {
        for w in [u, v] {
            assert!(w < self.order(), "vertex {} is out of range for a graph of order {}", w, self.order());
        }
        self.adj[u].contains(&v)
    }

    /// Returns an iterator over all edges `(u, v)` with `u < v`. Parallel edges are reported once
    /// per instance.
    pub fn edges(&self) -> impl Iterator<Item=(usize, usize)> + '_ {
        self.adj.iter()
            .enumerate()
            .flat_map(|(u, neighbors)| {
                neighbors.iter()
                    .filter(move |v| u < **v)
                    .map(move |v| (u, *v))
            })
    }

    /// Returns an error if `v` is no vertex of the graph.
    pub fn check_vertex(&self, v: usize) -> Result<(), GraphError> {
        if v < self.order() {
            Ok(())
        } else {
            Err(GraphError::OutOfRange { vertex: v, order: self.order() })
        }
    }

    /// Adds an edge between `u` and `v`. Adding an edge twice raises its multiplicity.
    /// Amortized O(1).
    pub fn add_edge(&mut self, u: usize, v: usize) -> Result<(), GraphError> {
        self.check_vertex(u)?;
        self.check_vertex(v)?;
        if u == v {
            return Err(GraphError::SelfLoop(u));
        }
        self.adj[u].push(v);
        self.adj[v].push(u);
        self.num_edges += 1;
        Ok(())
    }

    /// Removes one instance of the edge between `u` and `v`.
    /// Returns `false` if `u` and `v` are not adjacent.
    /// O(degree(u) + degree(v)).
    pub fn remove_edge(&mut self, u: usize, v: usize) -> Result<bool, GraphError> {
        self.check_vertex(u)?;
        self.check_vertex(v)?;
        let pos_v = match self.adj[u].iter().position(|w| *w == v) {
            Some(pos) => pos,
            None => return Ok(false),
        };
        self.adj[u].remove(pos_v);
        let pos_u = self.adj[v].iter().position(|w| *w == u).expect("adjacency lists are symmetric");
        self.adj[v].remove(pos_u);
        self.num_edges -= 1;
        Ok(true)
    }

    /// Returns the number of distinct vertex pairs joined by at least one edge.
    pub fn num_distinct_edges(&self) -> usize {
        self.edges().collect::<FxHashSet<_>>().len()
    }

    /// Checks if every vertex can be reached from vertex 0.
    pub fn is_connected(&self) -> bool {
        let mut visited = vec![false; self.order()];
        let mut stack = vec![0];
        visited[0] = true;
        let mut reached = 1;
        while let Some(v) = stack.pop() {
            for &u in &self.adj[v] {
                if !visited[u] {
                    visited[u] = true;
                    reached += 1;
                    stack.push(u);
                }
            }
        }
        reached == self.order()
    }
}

// Reading and writing edge lists
impl Graph {

    /// Reads a graph given as whitespace separated integers: the order `n`, the number of edges
    /// `m` and then `m` pairs of 0-based endpoints. Lines starting with `%` are skipped.
    pub fn read_graph<R: BufRead>(gr: R) -> Result<Self, ImportError> {
        let mut tokens = Vec::new();
        for line in gr.lines() {
            let line = line?;
            if line.starts_with('%') {
                continue;
            }
            for token in line.split_whitespace() {
                tokens.push(token.parse::<usize>()?);
            }
        }
        let mut tokens = tokens.into_iter();
        let n = tokens.next().ok_or(ImportError::InputMalformedError)?;
        let m = tokens.next().ok_or(ImportError::InputMalformedError)?;
        let mut graph = Graph::new(n)?;
        for _ in 0..m {
            let u = tokens.next().ok_or(ImportError::InputMalformedError)?;
            let v = tokens.next().ok_or(ImportError::InputMalformedError)?;
            graph.add_edge(u, v)?;
        }
        if tokens.next().is_some() {
            return Err(ImportError::InputMalformedError);
        }
        Ok(graph)
    }

    /// Writes the graph in the format understood by `read_graph`.
    pub fn write_graph<W: Write>(&self, mut out: W) -> Result<(), io::Error> {
        writeln!(out, "{} {}", self.order(), self.size())?;
        for (u, v) in self.edges() {
            writeln!(out, "{} {}", u, v)?;
        }
        Ok(())
    }
}
