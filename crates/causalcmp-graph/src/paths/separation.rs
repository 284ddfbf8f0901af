//! m-separation (d-separation on DAGs) by reachability over
//! `(node, arrived-into)` states.

use std::collections::VecDeque;

use petgraph::stable_graph::NodeIndex;

use causalcmp_core::types::collections::FxHashSet;

use super::reachability::ancestors_ix;
use crate::graph::{Endpoint, Graph, Node};

/// True if some path between `x` and `y` is m-connecting given `z`: every
/// collider on it is an ancestor of `z` and no non-collider is in `z`.
///
/// `x == y` is connected. An endpoint inside `z` is separated.
pub fn is_m_connected(g: &Graph, x: &Node, y: &Node, z: &[Node]) -> bool {
    let (Some(x), Some(y)) = (g.ix(x), g.ix(y)) else {
        return false;
    };
    let z: Vec<NodeIndex> = z.iter().filter_map(|n| g.ix(n)).collect();
    m_connected_ix(g, x, y, &z)
}

pub fn is_m_separated(g: &Graph, x: &Node, y: &Node, z: &[Node]) -> bool {
    if !g.contains_node(x) || !g.contains_node(y) {
        return true;
    }
    !is_m_connected(g, x, y, z)
}

pub(crate) fn m_connected_ix(g: &Graph, x: NodeIndex, y: NodeIndex, z: &[NodeIndex]) -> bool {
    if x == y {
        return true;
    }
    let in_z: FxHashSet<NodeIndex> = z.iter().copied().collect();
    if in_z.contains(&x) || in_z.contains(&y) {
        return false;
    }
    let an_z = ancestors_ix(g, z);

    // (node, whether the edge we arrived on has an arrowhead at node)
    let mut visited: FxHashSet<(NodeIndex, bool)> = FxHashSet::default();
    let mut queue: VecDeque<(NodeIndex, bool)> = VecDeque::new();
    for w in g.neighbors_ix(x) {
        let state = (w, g.mark(x, w) == Some(Endpoint::Arrow));
        if visited.insert(state) {
            queue.push_back(state);
        }
    }

    while let Some((b, into_b)) = queue.pop_front() {
        if b == y {
            return true;
        }
        for c in g.neighbors_ix(b) {
            let collider = into_b && g.mark(c, b) == Some(Endpoint::Arrow);
            let passes = if collider {
                an_z.contains(&b)
            } else {
                !in_z.contains(&b)
            };
            if !passes {
                continue;
            }
            let state = (c, g.mark(b, c) == Some(Endpoint::Arrow));
            if visited.insert(state) {
                queue.push_back(state);
            }
        }
    }
    false
}
