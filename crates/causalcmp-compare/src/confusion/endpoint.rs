//! Endpoint-mark confusion over ordered node pairs.
//!
//! For an ordered pair `(x, y)` each graph answers one question: does the
//! edge between `x` and `y` carry the mark of interest at `x`? A missing
//! edge answers no.

use causalcmp_graph::{Endpoint, Graph};

use super::{adjacent, is_bidirected, mark_at, node_universe, Confusion, Tally};

fn endpoint_tally(truth: &Graph, estimate: &Graph, mark: Endpoint, common_only: bool) -> Tally {
    let names = node_universe(truth, estimate);
    let mut tally = Tally::default();
    for x in &names {
        for y in &names {
            if x == y {
                continue;
            }
            if common_only && !(adjacent(truth, x, y) && adjacent(estimate, x, y)) {
                continue;
            }
            tally.record(
                mark_at(truth, x, y) == Some(mark),
                mark_at(estimate, x, y) == Some(mark),
            );
        }
    }
    tally
}

/// Arrowhead confusion, plus a separate tally for two-cycles (edges with
/// arrowheads at both ends).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArrowConfusion {
    tally: Tally,
    two_cycle: Tally,
}

impl ArrowConfusion {
    pub fn new(truth: &Graph, estimate: &Graph) -> Self {
        Self::build(truth, estimate, false)
    }

    /// Only pairs adjacent in both graphs are counted.
    pub fn common_adjacencies(truth: &Graph, estimate: &Graph) -> Self {
        Self::build(truth, estimate, true)
    }

    fn build(truth: &Graph, estimate: &Graph, common_only: bool) -> Self {
        let tally = endpoint_tally(truth, estimate, Endpoint::Arrow, common_only);

        // tn is left at zero: pairs that are a two-cycle in neither graph
        // are not counted.
        let names = node_universe(truth, estimate);
        let mut two_cycle = Tally::default();
        for (i, x) in names.iter().enumerate() {
            for y in &names[i + 1..] {
                let (t, e) = (is_bidirected(truth, x, y), is_bidirected(estimate, x, y));
                if t || e {
                    two_cycle.record(t, e);
                }
            }
        }
        tracing::trace!(?tally, ?two_cycle, common_only, "arrow confusion");
        Self { tally, two_cycle }
    }

    pub fn tally(&self) -> Tally {
        self.tally
    }

    pub fn two_cycle(&self) -> Tally {
        self.two_cycle
    }
}

impl Confusion for ArrowConfusion {
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

/// Tail-mark confusion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TailConfusion {
    tally: Tally,
}

impl TailConfusion {
    pub fn new(truth: &Graph, estimate: &Graph) -> Self {
        Self {
            tally: endpoint_tally(truth, estimate, Endpoint::Tail, false),
        }
    }

    pub fn tally(&self) -> Tally {
        self.tally
    }
}

impl Confusion for TailConfusion {
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

/// Circle-mark confusion. Only meaningful when at least one graph is a PAG.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CircleConfusion {
    tally: Tally,
}

impl CircleConfusion {
    pub fn new(truth: &Graph, estimate: &Graph) -> Self {
        Self {
            tally: endpoint_tally(truth, estimate, Endpoint::Circle, false),
        }
    }

    pub fn tally(&self) -> Tally {
        self.tally
    }
}

impl Confusion for CircleConfusion {
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
