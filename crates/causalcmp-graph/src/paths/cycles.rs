//! Directed cycles, almost cycles, and topological order.
//!
//! The directed edges are projected onto a `petgraph::graph::DiGraph` with
//! the same node indices, then handed to petgraph's Tarjan SCC and toposort.

use std::collections::VecDeque;

use petgraph::algo::{tarjan_scc, toposort};
use petgraph::graph::DiGraph;
use petgraph::stable_graph::NodeIndex;

use causalcmp_core::types::collections::{FxHashMap, FxHashSet};

use super::reachability::directed_path_ix;
use crate::graph::{Graph, Node};

fn directed_projection(g: &Graph) -> DiGraph<(), ()> {
    let bound = g.node_ixs().last().map_or(0, |ix| ix.index() + 1);
    let mut dg = DiGraph::with_capacity(bound, g.edge_count());
    for _ in 0..bound {
        dg.add_node(());
    }
    for (a, b) in g.edge_pairs() {
        if g.is_directed_ix(a, b) {
            dg.add_edge(a, b, ());
        } else if g.is_directed_ix(b, a) {
            dg.add_edge(b, a, ());
        }
    }
    dg
}

/// Strongly connected components of the directed part with more than one node.
pub(crate) fn cyclic_components(g: &Graph) -> Vec<Vec<NodeIndex>> {
    let mut sccs: Vec<Vec<NodeIndex>> = tarjan_scc(&directed_projection(g))
        .into_iter()
        .filter(|scc| scc.len() > 1)
        .map(|mut scc| {
            scc.sort_unstable();
            scc
        })
        .collect();
    sccs.sort_unstable();
    sccs
}

pub fn exists_directed_cycle(g: &Graph) -> bool {
    !cyclic_components(g).is_empty()
}

/// Every node that lies on some directed cycle, in graph order.
pub fn directed_cycle_nodes(g: &Graph) -> Vec<Node> {
    let mut ixs: Vec<NodeIndex> = cyclic_components(g).into_iter().flatten().collect();
    ixs.sort_unstable();
    ixs.into_iter().map(|ix| g.node_at(ix).clone()).collect()
}

/// One directed cycle, listed from its lowest-indexed node around to the
/// node that closes it.
pub fn find_directed_cycle(g: &Graph) -> Option<Vec<Node>> {
    let component = cyclic_components(g).into_iter().next()?;
    let start = *component.first()?;
    let members: FxHashSet<NodeIndex> = component.iter().copied().collect();

    let mut parent: FxHashMap<NodeIndex, NodeIndex> = FxHashMap::default();
    let mut queue: VecDeque<NodeIndex> = VecDeque::from([start]);
    while let Some(current) = queue.pop_front() {
        for next in g.children_ix(current) {
            if !members.contains(&next) {
                continue;
            }
            if next == start {
                let mut cycle = vec![current];
                let mut at = current;
                while let Some(&p) = parent.get(&at) {
                    cycle.push(p);
                    at = p;
                }
                cycle.reverse();
                return Some(cycle.into_iter().map(|ix| g.node_at(ix).clone()).collect());
            }
            if next != start && !parent.contains_key(&next) {
                parent.insert(next, current);
                queue.push_back(next);
            }
        }
    }
    None
}

/// Topological order of the directed part, or `None` on a directed cycle.
pub fn topological_order(g: &Graph) -> Option<Vec<Node>> {
    let order = toposort(&directed_projection(g), None).ok()?;
    Some(
        order
            .into_iter()
            .map(|ix| g.node_at(ix).clone())
            .collect(),
    )
}

/// Bidirected edges `x <-> y` where one end is a proper ancestor of the other.
pub fn almost_cycles(g: &Graph) -> Vec<(Node, Node)> {
    g.edge_pairs()
        .into_iter()
        .filter(|&(a, b)| {
            g.is_bidirected_ix(a, b) && (directed_path_ix(g, a, b) || directed_path_ix(g, b, a))
        })
        .map(|(a, b)| (g.node_at(a).clone(), g.node_at(b).clone()))
        .collect()
}

pub fn exists_almost_cycle(g: &Graph) -> bool {
    !almost_cycles(g).is_empty()
}
