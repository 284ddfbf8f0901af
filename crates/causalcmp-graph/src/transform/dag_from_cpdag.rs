//! Pick one member DAG of a CPDAG's equivalence class.

use petgraph::stable_graph::NodeIndex;

use causalcmp_core::errors::TransformError;
use causalcmp_core::types::collections::FxHashSet;

use crate::graph::{EdgeKind, Graph};

use super::{meek_orient, orient, require_edge_kinds, Knowledge};

/// Orient every undirected edge of `cpdag` without creating a cycle or a new
/// unshielded collider.
///
/// Required knowledge edges are oriented first and the Meek closure with
/// knowledge runs; Dor–Tarsi sink elimination then fixes the rest, taking
/// candidate sinks in node order and skipping any whose orientation would
/// use a forbidden edge.
pub fn dag_from_cpdag(
    cpdag: &Graph,
    knowledge: Option<&Knowledge>,
) -> Result<Graph, TransformError> {
    require_edge_kinds(
        cpdag,
        "dag_from_cpdag",
        &[EdgeKind::Directed, EdgeKind::Undirected],
    )?;

    let mut g = cpdag.clone();
    if let Some(k) = knowledge {
        apply_knowledge(&mut g, k)?;
    }
    meek_orient(&mut g, knowledge);
    dor_tarsi(&mut g, knowledge)?;

    tracing::debug!(edges = g.edge_count(), "dag_from_cpdag complete");
    Ok(g)
}

fn apply_knowledge(g: &mut Graph, knowledge: &Knowledge) -> Result<(), TransformError> {
    if let Some((x, y)) = knowledge.conflicts().into_iter().next() {
        return Err(TransformError::KnowledgeViolation {
            edge: format!("{x} --> {y}"),
        });
    }
    for (a, b) in g.edge_pairs() {
        for (from, to) in [(a, b), (b, a)] {
            if g.is_directed_ix(from, to)
                && knowledge.is_forbidden(g.node_at(from).name(), g.node_at(to).name())
            {
                return Err(TransformError::KnowledgeViolation {
                    edge: format!("{} --> {}", g.node_at(from), g.node_at(to)),
                });
            }
        }
    }
    for (x, y) in knowledge.required_edges() {
        let (Some(xi), Some(yi)) = (
            g.node(x).and_then(|n| g.ix(n)),
            g.node(y).and_then(|n| g.ix(n)),
        ) else {
            continue;
        };
        if g.is_directed_ix(xi, yi) {
            continue;
        }
        if !g.is_undirected_ix(xi, yi) {
            return Err(TransformError::KnowledgeViolation {
                edge: format!("{x} --> {y}"),
            });
        }
        orient(g, xi, yi);
    }
    Ok(())
}

/// Dor–Tarsi extension: repeatedly remove a sink `x` whose undirected
/// neighbors are adjacent to all of its other neighbors, orienting those
/// undirected edges into `x`.
pub(crate) fn dor_tarsi(g: &mut Graph, knowledge: Option<&Knowledge>) -> Result<(), TransformError> {
    let mut remaining: FxHashSet<NodeIndex> = g.node_ixs().into_iter().collect();
    let order = g.node_ixs();

    while !remaining.is_empty() {
        let sink = order
            .iter()
            .copied()
            .filter(|x| remaining.contains(x))
            .find(|&x| is_candidate_sink(g, x, &remaining, knowledge));
        let Some(x) = sink else {
            let stuck: Vec<String> = g.names_of(order.iter().copied().filter(|x| remaining.contains(x)));
            tracing::warn!(?stuck, "no sink candidate left during extension");
            return Err(TransformError::NoConsistentExtension {
                reason: format!("no valid sink among {}", stuck.join(", ")),
            });
        };
        for y in g.neighbors_ix(x) {
            if remaining.contains(&y) && g.is_undirected_ix(x, y) {
                orient(g, y, x);
            }
        }
        remaining.remove(&x);
    }
    Ok(())
}

fn is_candidate_sink(
    g: &Graph,
    x: NodeIndex,
    remaining: &FxHashSet<NodeIndex>,
    knowledge: Option<&Knowledge>,
) -> bool {
    let neighbors: Vec<NodeIndex> = g
        .neighbors_ix(x)
        .into_iter()
        .filter(|y| remaining.contains(y))
        .collect();
    if neighbors.iter().any(|&y| g.is_directed_ix(x, y)) {
        return false;
    }
    for &y in &neighbors {
        if !g.is_undirected_ix(x, y) {
            continue;
        }
        if knowledge.is_some_and(|k| k.is_forbidden(g.node_at(y).name(), g.node_at(x).name())) {
            return false;
        }
        if neighbors
            .iter()
            .any(|&z| z != y && !g.adjacent_ix(y, z))
        {
            return false;
        }
    }
    true
}
