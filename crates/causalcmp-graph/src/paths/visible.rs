//! Visibility of directed edges in a MAG or PAG.

use std::collections::VecDeque;

use causalcmp_core::types::collections::FxHashSet;

use crate::graph::{Edge, Endpoint, Graph};

/// Whether the directed edge `a --> b` is visible: some node `c` not
/// adjacent to `b` either has `c *-> a`, or reaches `a` by a collider path
/// into `a` whose interior nodes are all parents of `b`.
///
/// Non-directed edges and edges not in `g` are never visible.
pub fn def_visible(g: &Graph, edge: &Edge) -> bool {
    let Some((a, b)) = edge.tail_and_head() else {
        return false;
    };
    let (Some(a), Some(b)) = (g.ix(a), g.ix(b)) else {
        return false;
    };
    if !g.is_directed_ix(a, b) {
        return false;
    }

    let outside = |c| c != b && !g.adjacent_ix(c, b);

    for c in g.neighbors_ix(a) {
        if g.mark(c, a) == Some(Endpoint::Arrow) && outside(c) {
            return true;
        }
    }

    // Walk collider paths back from `a`: d <-> a, then t *-> d <-> ...
    let mut visited: FxHashSet<_> = [a, b].into_iter().collect();
    let mut queue = VecDeque::new();
    for d in g.neighbors_ix(a) {
        if g.is_bidirected_ix(d, a) && g.is_directed_ix(d, b) && visited.insert(d) {
            queue.push_back(d);
        }
    }
    while let Some(d) = queue.pop_front() {
        for t in g.neighbors_ix(d) {
            if g.mark(t, d) != Some(Endpoint::Arrow) {
                continue;
            }
            if outside(t) {
                return true;
            }
            if g.is_bidirected_ix(t, d) && g.is_directed_ix(t, b) && visited.insert(t) {
                queue.push_back(t);
            }
        }
    }
    false
}
