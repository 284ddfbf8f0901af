//! Trek enumeration.
//!
//! A trek between `x` and `y` is a simple path without colliders:
//! `x <- ... <- top -> ... -> y`, or with a single bidirected edge at the
//! top, `x <- ... <- t1 <-> t2 -> ... -> y`.

use petgraph::stable_graph::NodeIndex;

use crate::graph::{Graph, Node};

/// Where a trek turns around.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TrekTop {
    /// The common source node.
    Node(Node),
    /// The two ends of the bidirected edge at the top.
    Bidirected(Node, Node),
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Phase {
    /// Still climbing against arrows from `x`.
    Up,
    /// Past the top, following arrows towards `y`.
    Down,
}

/// Every trek from `x` to `y` of at most `max_length` edges, as node lists
/// starting at `x`. Neighbors are explored in graph order, so the output
/// order is deterministic.
pub fn treks(g: &Graph, x: &Node, y: &Node, max_length: usize) -> Vec<Vec<Node>> {
    let (Some(xi), Some(yi)) = (g.ix(x), g.ix(y)) else {
        return Vec::new();
    };
    if xi == yi || max_length == 0 {
        return Vec::new();
    }
    let mut out = Vec::new();
    let mut path = vec![xi];
    extend(g, yi, max_length, Phase::Up, &mut path, &mut out);
    out.into_iter()
        .map(|p| p.into_iter().map(|ix| g.node_at(ix).clone()).collect())
        .collect()
}

fn extend(
    g: &Graph,
    y: NodeIndex,
    max_length: usize,
    phase: Phase,
    path: &mut Vec<NodeIndex>,
    out: &mut Vec<Vec<NodeIndex>>,
) {
    if path.len() > max_length {
        return;
    }
    let Some(&current) = path.last() else {
        return;
    };
    for next in g.neighbors_ix(current) {
        if path.contains(&next) {
            continue;
        }
        let next_phase = match phase {
            Phase::Up if g.is_directed_ix(next, current) => Phase::Up,
            Phase::Up if g.is_directed_ix(current, next) || g.is_bidirected_ix(current, next) => {
                Phase::Down
            }
            Phase::Down if g.is_directed_ix(current, next) => Phase::Down,
            _ => continue,
        };
        path.push(next);
        if next == y {
            out.push(path.clone());
        } else {
            extend(g, y, max_length, next_phase, path, out);
        }
        path.pop();
    }
}

/// The top of a trek given as a node list from one end to the other.
/// Returns `None` for an empty list or a list that is not a path in `g`.
pub fn trek_top(g: &Graph, trek: &[Node]) -> Option<TrekTop> {
    let ixs: Vec<NodeIndex> = trek.iter().map(|n| g.ix(n)).collect::<Option<_>>()?;
    let first = *ixs.first()?;
    for pair in ixs.windows(2) {
        let (a, b) = (pair[0], pair[1]);
        if !g.adjacent_ix(a, b) {
            return None;
        }
        if g.is_directed_ix(b, a) {
            continue;
        }
        if g.is_bidirected_ix(a, b) {
            return Some(TrekTop::Bidirected(
                g.node_at(a).clone(),
                g.node_at(b).clone(),
            ));
        }
        return Some(TrekTop::Node(g.node_at(a).clone()));
    }
    let last = ixs.last().copied().unwrap_or(first);
    Some(TrekTop::Node(g.node_at(last).clone()))
}
