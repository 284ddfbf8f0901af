//! Inducing paths relative to a MAG.

use std::collections::VecDeque;

use causalcmp_core::types::collections::FxHashSet;

use super::reachability::ancestors_ix;
use crate::graph::{Endpoint, Graph, Node};

/// True if there is a path between `x` and `y` whose every interior node is
/// a collider on the path and an ancestor of `x` or `y`. Adjacent nodes
/// have one trivially.
///
/// Interior colliders force the shape `x *-> b1 <-> ... <-> bk <-* y`, so
/// the search runs over bidirected edges inside `An({x, y})`.
pub fn exists_inducing_path(g: &Graph, x: &Node, y: &Node) -> bool {
    let (Some(x), Some(y)) = (g.ix(x), g.ix(y)) else {
        return false;
    };
    if x == y {
        return false;
    }
    if g.adjacent_ix(x, y) {
        return true;
    }
    let anc = ancestors_ix(g, &[x, y]);
    let interior = |b| b != x && b != y && anc.contains(&b);

    let mut visited = FxHashSet::default();
    let mut queue = VecDeque::new();
    for b in g.neighbors_ix(x) {
        if interior(b) && g.mark(x, b) == Some(Endpoint::Arrow) && visited.insert(b) {
            queue.push_back(b);
        }
    }
    while let Some(b) = queue.pop_front() {
        if g.mark(y, b) == Some(Endpoint::Arrow) {
            return true;
        }
        for next in g.neighbors_ix(b) {
            if interior(next) && g.is_bidirected_ix(b, next) && visited.insert(next) {
                queue.push_back(next);
            }
        }
    }
    false
}
