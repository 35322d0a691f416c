//! Exact minimum connected vertex cover by enumerating vertex sets as 64 bit masks in order of
//! increasing cardinality. Bit `i` of a mask stands for vertex `i`.

use crate::cust_errors::ProcessingError;
use crate::graph::Graph;

/// Largest graph order the bitmask solver accepts.
pub const MAX_BITMASK_ORDER: usize = 64;

/// Mask with the lowest `k` bits set.
fn low_bits(k: usize) -> u64 {
    if k >= 64 {
        u64::MAX
    } else {
        (1 << k) - 1
    }
}

/// Returns the mask following `mask` among the non-empty subsets of `n` vertices ordered by
/// cardinality first and numeric value second. Starts with 1 for `mask == 0` and returns 0 after
/// the full set.
///
/// Within one cardinality this is Gosper's hack: the lowest run of ones loses its top bit to the
/// next higher position and its other bits drop to the bottom of the mask.
pub fn next_selection(n: usize, mask: u64) -> u64 {
    debug_assert!(n <= MAX_BITMASK_ORDER && mask & !low_bits(n) == 0);
    if mask == 0 {
        return 1;
    }
    if mask == low_bits(n) {
        return 0;
    }
    let trailing = mask.trailing_zeros() as usize;
    let run = (mask >> trailing).trailing_ones() as usize;
    let end = trailing + run;
    if end == n {
        // The ones are packed at the top, continue with the smallest set of the next cardinality.
        return low_bits(mask.count_ones() as usize + 1);
    }
    (mask & !low_bits(end)) | (1 << end) | low_bits(run - 1)
}

/// Returns the vertices of `mask` in increasing order.
pub fn mask_to_vertices(mask: u64) -> Vec<usize> {
    let mut vertices = Vec::with_capacity(mask.count_ones() as usize);
    let mut rest = mask;
    while rest != 0 {
        vertices.push(rest.trailing_zeros() as usize);
        rest &= rest - 1;
    }
    vertices
}

impl Graph {

    /// Checks if the vertices in `mask` form a connected vertex cover, with the same edge count
    /// as `selection_is_cvc`. Bits of vertices that are not in the graph are ignored.
    pub fn mask_is_cvc(&self, mask: u64) -> bool {
        self.mask_covers(mask, self.size())
    }

    fn mask_covers(&self, mask: u64, num_edges: usize) -> bool {
        let selected: Vec<bool> = self.vertices()
            .map(|v| v < MAX_BITMASK_ORDER && (mask >> v) & 1 == 1)
            .collect();
        self.membership_is_cvc(&selected, num_edges)
    }

    /// Returns the first connected vertex cover in cardinality order, which is a minimum one.
    /// Parallel edges are counted once.
    ///
    /// Returns `ProcessingError::TooManyVertices` for graphs with more than `MAX_BITMASK_ORDER`
    /// vertices and `ProcessingError::NoCoverFound` for disconnected graphs.
    pub fn find_cvc_by_bitmasking(&self) -> Result<u64, ProcessingError> {
        let n = self.order();
        if n > MAX_BITMASK_ORDER {
            return Err(ProcessingError::TooManyVertices(n));
        }
        if !self.is_connected() {
            return Err(ProcessingError::NoCoverFound);
        }
        let num_edges = self.num_distinct_edges();
        let mut mask = next_selection(n, 0);
        while mask != 0 {
            if self.mask_covers(mask, num_edges) {
                return Ok(mask);
            }
            mask = next_selection(n, mask);
        }
        Err(ProcessingError::NoCoverFound)
    }
}
