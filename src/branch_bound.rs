//! Exact minimum connected vertex cover by branch and bound.
//!
//! The covers are grown from a root vertex: every branching step picks a candidate, that is an
//! undecided neighbor of the vertices taken so far, and either takes or excludes it. Since only
//! candidates are taken, the taken vertices stay connected at any time. The root runs over all
//! vertices in increasing order, and all vertices below the current root are excluded, so every
//! connected vertex set is reached from its minimum vertex only.

use std::collections::BTreeSet;
use fxhash::FxHashSet;
use crate::cust_errors::ProcessingError;
use crate::graph::Graph;
use crate::ordering::ordering_to_priorities;

/// Search state with the best cover found so far.
struct CvcSearch<'a> {
    graph: &'a Graph,
    num_edges: usize,
    taken: Vec<bool>,
    excluded: Vec<bool>,
    num_taken: usize,
    covered: FxHashSet<(usize, usize)>,
    candidates: BTreeSet<usize>,
    best: Option<Vec<usize>>,
    upper_bound: usize,
}

/// What `CvcSearch::take` added, so it can be undone.
struct Changes {
    covered: Vec<(usize, usize)>,
    candidates: Vec<usize>,
}

impl<'a> CvcSearch<'a> {

    fn new(graph: &'a Graph) -> Self {
        CvcSearch {
            graph,
            num_edges: graph.num_distinct_edges(),
            taken: vec![false; graph.order()],
            excluded: vec![false; graph.order()],
            num_taken: 0,
            covered: FxHashSet::default(),
            candidates: BTreeSet::new(),
            best: None,
            upper_bound: usize::MAX,
        }
    }

    /// Sets `cover` as the incumbent. Later covers have to be strictly smaller.
    fn set_incumbent(&mut self, cover: Vec<usize>) {
        self.upper_bound = cover.len();
        self.best = Some(cover);
    }

    /// Runs the search from every possible minimum vertex.
    fn run(&mut self) {
        for root in self.graph.vertices() {
            let changes = self.take(root);
            self.branch();
            self.untake(root, changes);
            // From now on `root` is excluded. If one of its neighbors is excluded as well, the edge
            // between them can not be covered anymore.
            self.excluded[root] = true;
            if self.graph.neighbors(root).iter().any(|&u| u < root) {
                break;
            }
        }
    }

    fn branch(&mut self) {
        if self.covered.len() == self.num_edges {
            if self.num_taken < self.upper_bound {
                let cover = self.graph.vertices().filter(|&v| self.taken[v]).collect();
                self.set_incumbent(cover);
            }
            return;
        }
        // At least one more vertex is needed.
        if self.num_taken + 1 >= self.upper_bound {
            return;
        }
        let v = match self.candidates.pop_first() {
            Some(v) => v,
            None => return,
        };

        let changes = self.take(v);
        self.branch();
        self.untake(v, changes);

        // All edges of an excluded vertex have to be covered by its other endpoints.
        if !self.graph.neighbors(v).iter().any(|&u| self.excluded[u]) {
            self.excluded[v] = true;
            self.branch();
            self.excluded[v] = false;
        }
        self.candidates.insert(v);
    }

    fn take(&mut self, v: usize) -> Changes {
        self.taken[v] = true;
        self.num_taken += 1;
        let mut changes = Changes { covered: Vec::new(), candidates: Vec::new() };
        for &u in self.graph.neighbors(v) {
            let edge = (v.min(u), v.max(u));
            if self.covered.insert(edge) {
                changes.covered.push(edge);
            }
            if !self.taken[u] && !self.excluded[u] && self.candidates.insert(u) {
                changes.candidates.push(u);
            }
        }
        changes
    }

    fn untake(&mut self, v: usize, changes: Changes) {
        for edge in changes.covered {
            self.covered.remove(&edge);
        }
        for u in changes.candidates {
            self.candidates.remove(&u);
        }
        self.num_taken -= 1;
        self.taken[v] = false;
    }
}

impl Graph {

    /// Computes a minimum connected vertex cover, sorted by id.
    ///
    /// The search starts with the cover of the descending degree ILST as upper bound and only
    /// follows branches that can still beat the best cover found so far.
    /// Returns `ProcessingError::NoCoverFound` if the graph is disconnected.
    pub fn find_cvc_by_backtracking(&self) -> Result<Vec<usize>, ProcessingError> {
        if !self.is_connected() {
            return Err(ProcessingError::NoCoverFound);
        }
        let mut search = CvcSearch::new(self);

        let priority = ordering_to_priorities(&self.descending_degree_ordering());
        let initial = self.cvc_from_ilst(&self.ilst(&priority)?);
        if self.selection_is_cvc(&initial)? {
            search.set_incumbent(initial);
        }

        search.run();
        search.best.ok_or(ProcessingError::NoCoverFound)
    }
}
