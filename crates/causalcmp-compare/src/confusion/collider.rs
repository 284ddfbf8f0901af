//! Unshielded collider confusion.

use std::collections::BTreeSet;

use causalcmp_graph::{Endpoint, Graph};

use super::{adjacent, mark_at, node_universe, Confusion, Tally};

/// Confusion over unshielded triples `(x, b, z)` with `x < z` by name.
///
/// A triple is counted when it is unshielded in either graph; a graph calls
/// it positive when it is unshielded there and `b` is a definite collider.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColliderConfusion {
    tally: Tally,
    uncovering_errors: usize,
}

fn unshielded(g: &Graph, x: &str, b: &str, z: &str) -> bool {
    adjacent(g, x, b) && adjacent(g, z, b) && !adjacent(g, x, z)
}

fn unshielded_collider(g: &Graph, x: &str, b: &str, z: &str) -> bool {
    unshielded(g, x, b, z)
        && mark_at(g, b, x) == Some(Endpoint::Arrow)
        && mark_at(g, b, z) == Some(Endpoint::Arrow)
}

fn neighbor_names(g: &Graph, b: &str) -> Vec<String> {
    g.node(b)
        .map(|n| {
            g.adjacent_nodes(n)
                .iter()
                .map(|m| m.name().to_string())
                .collect()
        })
        .unwrap_or_default()
}

impl ColliderConfusion {
    pub fn new(truth: &Graph, estimate: &Graph) -> Self {
        let mut tally = Tally::default();
        let mut uncovering_errors = 0;

        for b in node_universe(truth, estimate) {
            let around: BTreeSet<String> = neighbor_names(truth, &b)
                .into_iter()
                .chain(neighbor_names(estimate, &b))
                .collect();
            let around: Vec<String> = around.into_iter().collect();

            for (i, x) in around.iter().enumerate() {
                for z in &around[i + 1..] {
                    let in_truth = unshielded(truth, x, &b, z);
                    if !in_truth && !unshielded(estimate, x, &b, z) {
                        continue;
                    }
                    if in_truth && adjacent(estimate, x, z) {
                        uncovering_errors += 1;
                    }
                    tally.record(
                        unshielded_collider(truth, x, &b, z),
                        unshielded_collider(estimate, x, &b, z),
                    );
                }
            }
        }
        tracing::trace!(?tally, uncovering_errors, "collider confusion");
        Self {
            tally,
            uncovering_errors,
        }
    }

    pub fn tally(&self) -> Tally {
        self.tally
    }

    /// Triples unshielded in the true graph whose ends are adjacent in the
    /// estimate.
    pub fn uncovering_errors(&self) -> usize {
        self.uncovering_errors
    }
}

impl Confusion for ColliderConfusion {
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
