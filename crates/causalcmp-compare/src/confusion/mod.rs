//! Confusion-matrix primitives.
//!
//! Every primitive compares a true graph against an estimate. Nodes are
//! matched by name and the node universe is the union of both name sets, so
//! a node missing from one graph simply has no edges there. Tallies are
//! rebuilt on every call; nothing is cached.

pub mod adjacency;
pub mod ancestor;
pub mod collider;
pub mod endpoint;

pub use adjacency::AdjacencyConfusion;
pub use ancestor::DefiniteAncestorConfusion;
pub use collider::ColliderConfusion;
pub use endpoint::{ArrowConfusion, CircleConfusion, TailConfusion};

use serde::{Deserialize, Serialize};

use std::collections::BTreeSet;

use causalcmp_graph::{Endpoint, Graph, Node};

/// Read access to a 2x2 confusion matrix.
pub trait Confusion {
    fn tp(&self) -> usize;
    fn fp(&self) -> usize;
    fn fn_(&self) -> usize;
    fn tn(&self) -> usize;

    fn total(&self) -> usize {
        self.tp() + self.fp() + self.fn_() + self.tn()
    }
}

/// Raw true/false positive/negative counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tally {
    pub tp: usize,
    pub fp: usize,
    #[serde(rename = "fn")]
    pub fn_: usize,
    pub tn: usize,
}

impl Tally {
    pub fn new(tp: usize, fp: usize, fn_: usize, tn: usize) -> Self {
        Self { tp, fp, fn_, tn }
    }

    /// Count one comparison: `truth` is the true answer, `estimate` the
    /// estimated one.
    pub fn record(&mut self, truth: bool, estimate: bool) {
        match (truth, estimate) {
            (true, true) => self.tp += 1,
            (false, true) => self.fp += 1,
            (true, false) => self.fn_ += 1,
            (false, false) => self.tn += 1,
        }
    }
}

impl Confusion for Tally {
    fn tp(&self) -> usize {
        self.tp
    }
    fn fp(&self) -> usize {
        self.fp
    }
    fn fn_(&self) -> usize {
        self.fn_
    }
    fn tn(&self) -> usize {
        self.tn
    }
}

/// Sorted union of the node names of both graphs.
pub(crate) fn node_universe(truth: &Graph, estimate: &Graph) -> Vec<String> {
    let names: BTreeSet<String> = truth
        .node_names()
        .into_iter()
        .chain(estimate.node_names())
        .collect();
    names.into_iter().collect()
}

fn pair<'g>(g: &'g Graph, x: &str, y: &str) -> Option<(&'g Node, &'g Node)> {
    Some((g.node(x)?, g.node(y)?))
}

pub(crate) fn adjacent(g: &Graph, x: &str, y: &str) -> bool {
    pair(g, x, y).is_some_and(|(a, b)| g.is_adjacent(a, b))
}

/// The mark at `at` on the edge between `at` and `other`, if any.
pub(crate) fn mark_at(g: &Graph, at: &str, other: &str) -> Option<Endpoint> {
    let (a, b) = pair(g, at, other)?;
    g.endpoint(b, a)
}

pub(crate) fn is_bidirected(g: &Graph, x: &str, y: &str) -> bool {
    mark_at(g, x, y) == Some(Endpoint::Arrow) && mark_at(g, y, x) == Some(Endpoint::Arrow)
}

/// Evaluate a node-level query on `g` by name; absent nodes answer false.
pub(crate) fn query(g: &Graph, x: &str, y: &str, f: impl Fn(&Graph, &Node, &Node) -> bool) -> bool {
    pair(g, x, y).is_some_and(|(a, b)| f(g, a, b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tally_records_each_quadrant() {
        let mut tally = Tally::default();
        tally.record(true, true);
        tally.record(false, true);
        tally.record(true, false);
        tally.record(false, false);
        tally.record(false, false);
        assert_eq!(tally, Tally::new(1, 1, 1, 2));
        assert_eq!(tally.total(), 5);
    }

    #[test]
    fn tally_serializes_fn_field_plainly() {
        let json = serde_json::to_string(&Tally::new(1, 2, 3, 4)).unwrap();
        assert_eq!(json, r#"{"tp":1,"fp":2,"fn":3,"tn":4}"#);
    }
}
