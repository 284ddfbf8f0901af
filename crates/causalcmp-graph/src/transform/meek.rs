//! Meek's orientation rules for patterns with directed and undirected edges.

use petgraph::stable_graph::NodeIndex;

use crate::graph::Graph;

use super::{orient, Knowledge};

/// Apply Meek rules R1–R3 (and R4 when `knowledge` is given) until nothing
/// changes. Orientations forbidden by `knowledge` are skipped. Returns the
/// number of edges oriented.
pub fn meek_orient(g: &mut Graph, knowledge: Option<&Knowledge>) -> usize {
    let mut oriented = 0;
    loop {
        let mut changed = false;
        for (a, b) in g.edge_pairs() {
            if !g.is_undirected_ix(a, b) {
                continue;
            }
            for (from, to) in [(a, b), (b, a)] {
                if forbidden(g, knowledge, from, to) {
                    continue;
                }
                if let Some(rule) = implied_orientation(g, from, to, knowledge.is_some()) {
                    tracing::trace!(
                        rule,
                        from = g.node_at(from).name(),
                        to = g.node_at(to).name(),
                        "meek orientation"
                    );
                    orient(g, from, to);
                    oriented += 1;
                    changed = true;
                    break;
                }
            }
        }
        if !changed {
            break;
        }
    }
    if oriented > 0 {
        tracing::debug!(oriented, "meek rules applied");
    }
    oriented
}

fn forbidden(g: &Graph, knowledge: Option<&Knowledge>, from: NodeIndex, to: NodeIndex) -> bool {
    knowledge.is_some_and(|k| k.is_forbidden(g.node_at(from).name(), g.node_at(to).name()))
}

/// Which rule, if any, forces the undirected edge `from --- to` into
/// `from --> to`.
fn implied_orientation(
    g: &Graph,
    from: NodeIndex,
    to: NodeIndex,
    with_r4: bool,
) -> Option<&'static str> {
    // R1: p --> from --- to, p and to non-adjacent.
    if g
        .parents_ix(from)
        .into_iter()
        .any(|p| p != to && !g.adjacent_ix(p, to))
    {
        return Some("R1");
    }

    // R2: from --> m --> to.
    if g
        .children_ix(from)
        .into_iter()
        .any(|m| g.is_directed_ix(m, to))
    {
        return Some("R2");
    }

    // R3: from --- c --> to, from --- d --> to, c and d non-adjacent.
    let undirected: Vec<NodeIndex> = g
        .neighbors_ix(from)
        .into_iter()
        .filter(|&c| c != to && g.is_undirected_ix(from, c) && g.is_directed_ix(c, to))
        .collect();
    for (i, &c) in undirected.iter().enumerate() {
        if undirected[i + 1..].iter().any(|&d| !g.adjacent_ix(c, d)) {
            return Some("R3");
        }
    }

    // R4: from *-* d --> to, c --> d, c adjacent to from, c and to non-adjacent.
    if with_r4 {
        for d in g.parents_ix(to) {
            if d == from || !g.adjacent_ix(from, d) {
                continue;
            }
            if g
                .parents_ix(d)
                .into_iter()
                .any(|c| c != to && c != from && g.adjacent_ix(c, from) && !g.adjacent_ix(c, to))
            {
                return Some("R4");
            }
        }
    }
    None
}
