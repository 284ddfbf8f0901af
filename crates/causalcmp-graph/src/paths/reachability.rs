//! Ancestor, descendant, and path-existence BFS.

use std::collections::VecDeque;

use petgraph::stable_graph::NodeIndex;

use causalcmp_core::types::collections::FxHashSet;

use crate::graph::{Endpoint, Graph, Node};

/// True if `x` is an ancestor of `y`. Every node is its own ancestor.
pub fn is_ancestor_of(g: &Graph, x: &Node, y: &Node) -> bool {
    match (g.ix(x), g.ix(y)) {
        (Some(x), Some(y)) => x == y || directed_path_ix(g, x, y),
        _ => false,
    }
}

/// True if `x` is a descendant of `y`. Every node is its own descendant.
pub fn is_descendant_of(g: &Graph, x: &Node, y: &Node) -> bool {
    is_ancestor_of(g, y, x)
}

/// Every ancestor of any node in `nodes`, the inputs included, in graph order.
pub fn ancestors(g: &Graph, nodes: &[Node]) -> Vec<Node> {
    let start: Vec<NodeIndex> = nodes.iter().filter_map(|n| g.ix(n)).collect();
    in_graph_order(g, &ancestors_ix(g, &start))
}

/// Every descendant of any node in `nodes`, the inputs included, in graph order.
pub fn descendants(g: &Graph, nodes: &[Node]) -> Vec<Node> {
    let start: Vec<NodeIndex> = nodes.iter().filter_map(|n| g.ix(n)).collect();
    in_graph_order(g, &descendants_ix(g, &start))
}

/// A directed path of at least one edge from `x` to `y`. With `x == y`
/// this asks whether a directed cycle runs through `x`.
pub fn exists_directed_path_from_to(g: &Graph, x: &Node, y: &Node) -> bool {
    match (g.ix(x), g.ix(y)) {
        (Some(x), Some(y)) => directed_path_ix(g, x, y),
        _ => false,
    }
}

/// A path of at least one edge from `x` to `y` on which every edge can be
/// left from its near end: the mark at the node being left is a tail or a
/// circle.
pub fn exists_semi_directed_path_from_to(g: &Graph, x: &Node, y: &Node) -> bool {
    match (g.ix(x), g.ix(y)) {
        (Some(x), Some(y)) => semi_directed_path_ix(g, x, y, None),
        _ => false,
    }
}

fn in_graph_order(g: &Graph, set: &FxHashSet<NodeIndex>) -> Vec<Node> {
    let mut ixs: Vec<NodeIndex> = set.iter().copied().collect();
    ixs.sort_unstable();
    ixs.into_iter().map(|ix| g.node_at(ix).clone()).collect()
}

pub(crate) fn ancestors_ix(g: &Graph, start: &[NodeIndex]) -> FxHashSet<NodeIndex> {
    closure(g, start, |g, n| g.parents_ix(n))
}

pub(crate) fn descendants_ix(g: &Graph, start: &[NodeIndex]) -> FxHashSet<NodeIndex> {
    closure(g, start, |g, n| g.children_ix(n))
}

fn closure(
    g: &Graph,
    start: &[NodeIndex],
    step: impl Fn(&Graph, NodeIndex) -> Vec<NodeIndex>,
) -> FxHashSet<NodeIndex> {
    let mut visited: FxHashSet<NodeIndex> = start.iter().copied().collect();
    let mut queue: VecDeque<NodeIndex> = start.iter().copied().collect();
    while let Some(current) = queue.pop_front() {
        for next in step(g, current) {
            if visited.insert(next) {
                queue.push_back(next);
            }
        }
    }
    visited
}

pub(crate) fn directed_path_ix(g: &Graph, x: NodeIndex, y: NodeIndex) -> bool {
    let mut visited = FxHashSet::default();
    let mut queue: VecDeque<NodeIndex> = VecDeque::new();
    for c in g.children_ix(x) {
        if visited.insert(c) {
            queue.push_back(c);
        }
    }
    while let Some(current) = queue.pop_front() {
        if current == y {
            return true;
        }
        for c in g.children_ix(current) {
            if visited.insert(c) {
                queue.push_back(c);
            }
        }
    }
    false
}

/// Semi-directed path search, optionally ignoring the edge `skip`.
pub(crate) fn semi_directed_path_ix(
    g: &Graph,
    x: NodeIndex,
    y: NodeIndex,
    skip: Option<(NodeIndex, NodeIndex)>,
) -> bool {
    let skipped = |a: NodeIndex, b: NodeIndex| {
        skip.is_some_and(|(s, t)| (s == a && t == b) || (s == b && t == a))
    };
    let leaves = |t: NodeIndex, u: NodeIndex| {
        !skipped(t, u) && matches!(g.mark(u, t), Some(Endpoint::Tail | Endpoint::Circle))
    };

    let mut visited = FxHashSet::default();
    let mut queue: VecDeque<NodeIndex> = VecDeque::new();
    for u in g.neighbors_ix(x) {
        if leaves(x, u) && visited.insert(u) {
            queue.push_back(u);
        }
    }
    while let Some(t) = queue.pop_front() {
        if t == y {
            return true;
        }
        for u in g.neighbors_ix(t) {
            if leaves(t, u) && visited.insert(u) {
                queue.push_back(u);
            }
        }
    }
    false
}
