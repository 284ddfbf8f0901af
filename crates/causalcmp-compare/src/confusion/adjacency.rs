//! Adjacency confusion over unordered node pairs.

use causalcmp_graph::Graph;

use super::{adjacent, node_universe, Confusion, Tally};

/// Tallies every unordered pair of distinct nodes, so the four counts
/// always sum to `n * (n - 1) / 2` over the node universe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AdjacencyConfusion {
    tally: Tally,
}

impl AdjacencyConfusion {
    pub fn new(truth: &Graph, estimate: &Graph) -> Self {
        let names = node_universe(truth, estimate);
        let mut tally = Tally::default();
        for (i, x) in names.iter().enumerate() {
            for y in &names[i + 1..] {
                tally.record(adjacent(truth, x, y), adjacent(estimate, x, y));
            }
        }
        tracing::trace!(?tally, "adjacency confusion");
        Self { tally }
    }

    pub fn tally(&self) -> Tally {
        self.tally
    }
}

impl Confusion for AdjacencyConfusion {
    fn tp(&self) -> usize {
        self.tally.tp
    }
    fn fp(&self) -> usize {
        self.tally.fp
    }
    fn fn_(&self) -> usize {
        self.tally.fn_
    }
    fn tn(&self) -> usize {
        self.tally.tn
    }
}
