//! Definite-ancestor confusion.
//!
//! For each ordered pair `(x, y)` with `x != y`, the estimate either asserts
//! that `x` is an ancestor of `y` (a directed path), denies it (no
//! semi-directed path), or makes no decision. The truth is strict ancestry
//! in the true graph.

use causalcmp_graph::paths::{exists_directed_path_from_to, exists_semi_directed_path_from_to};
use causalcmp_graph::Graph;

use super::{node_universe, query, Confusion, Tally};

/// Two buckets sharing their negative side: `definite` counts asserted
/// pairs as positives, `no_decision` counts undecided pairs. Both use the
/// denied pairs for fn and tn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DefiniteAncestorConfusion {
    definite: Tally,
    no_decision: Tally,
}

impl DefiniteAncestorConfusion {
    pub fn new(truth: &Graph, estimate: &Graph) -> Self {
        let names = node_universe(truth, estimate);
        let mut definite = Tally::default();
        let mut no_decision = Tally::default();

        for x in &names {
            for y in &names {
                if x == y {
                    continue;
                }
                let ancestor = query(truth, x, y, exists_directed_path_from_to);
                let asserted = query(estimate, x, y, exists_directed_path_from_to);
                let denied = !asserted && !query(estimate, x, y, exists_semi_directed_path_from_to);

                match (asserted, denied) {
                    (true, _) => {
                        if ancestor {
                            definite.tp += 1;
                        } else {
                            definite.fp += 1;
                        }
                    }
                    (false, false) => {
                        if ancestor {
                            no_decision.tp += 1;
                        } else {
                            no_decision.fp += 1;
                        }
                    }
                    (false, true) => {
                        for bucket in [&mut definite, &mut no_decision] {
                            if ancestor {
                                bucket.fn_ += 1;
                            } else {
                                bucket.tn += 1;
                            }
                        }
                    }
                }
            }
        }
        tracing::trace!(?definite, ?no_decision, "definite ancestor confusion");
        Self {
            definite,
            no_decision,
        }
    }

    pub fn definite(&self) -> Tally {
        self.definite
    }

    pub fn no_decision(&self) -> Tally {
        self.no_decision
    }
}

/// Reads the `definite` bucket.
impl Confusion for DefiniteAncestorConfusion {
    fn tp(&self) -> usize {
        self.definite.tp
    }
    fn fp(&self) -> usize {
        self.definite.fp
    }
    fn fn_(&self) -> usize {
        self.definite.fn_
    }
    fn tn(&self) -> usize {
        self.definite.tn
    }
}
