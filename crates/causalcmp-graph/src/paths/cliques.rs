//! Maximal cliques of the skeleton.

use petgraph::stable_graph::NodeIndex;

use causalcmp_core::types::collections::FxHashSet;

use crate::graph::{Graph, Node};

/// Bron–Kerbosch with pivoting over the adjacency skeleton. Each clique is
/// listed in graph order and the list of cliques is sorted. Isolated nodes
/// are singleton cliques.
pub fn max_cliques(g: &Graph) -> Vec<Vec<Node>> {
    let mut found: Vec<Vec<NodeIndex>> = Vec::new();
    let candidates: FxHashSet<NodeIndex> = g.node_ixs().into_iter().collect();
    bron_kerbosch(g, Vec::new(), candidates, FxHashSet::default(), &mut found);

    for clique in &mut found {
        clique.sort_unstable();
    }
    found.sort_unstable();
    found
        .into_iter()
        .map(|c| c.into_iter().map(|ix| g.node_at(ix).clone()).collect())
        .collect()
}

fn bron_kerbosch(
    g: &Graph,
    r: Vec<NodeIndex>,
    mut p: FxHashSet<NodeIndex>,
    mut x: FxHashSet<NodeIndex>,
    out: &mut Vec<Vec<NodeIndex>>,
) {
    if p.is_empty() && x.is_empty() {
        if !r.is_empty() {
            out.push(r);
        }
        return;
    }

    // Pivot: the node in P ∪ X with the most neighbors in P.
    let pivot = p
        .iter()
        .chain(x.iter())
        .copied()
        .max_by_key(|&u| (g.neighbors_ix(u).iter().filter(|n| p.contains(n)).count(), std::cmp::Reverse(u)));
    let pivot_neighbors: FxHashSet<NodeIndex> = pivot
        .map(|u| g.neighbors_ix(u).into_iter().collect())
        .unwrap_or_default();

    let mut branch: Vec<NodeIndex> = p
        .iter()
        .copied()
        .filter(|v| !pivot_neighbors.contains(v))
        .collect();
    branch.sort_unstable();

    for v in branch {
        let neighbors: FxHashSet<NodeIndex> = g.neighbors_ix(v).into_iter().collect();
        let mut r2 = r.clone();
        r2.push(v);
        let p2 = p.intersection(&neighbors).copied().collect();
        let x2 = x.intersection(&neighbors).copied().collect();
        bron_kerbosch(g, r2, p2, x2, out);
        p.remove(&v);
        x.insert(v);
    }
}
