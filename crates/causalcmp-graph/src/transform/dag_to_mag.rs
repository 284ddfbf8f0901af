//! Latent projection of a DAG onto its measured nodes.

use petgraph::stable_graph::NodeIndex;

use causalcmp_core::errors::TransformError;

use crate::graph::{Edge, Endpoint, Graph};
use crate::paths::reachability::ancestors_ix;
use crate::paths::separation::m_connected_ix;

use super::require_dag;

/// Project `dag` onto its measured nodes, marginalizing latent nodes and
/// conditioning on selection nodes.
///
/// Measured `a` and `b` are adjacent iff they are d-connected given
/// `(An({a, b} ∪ S) ∩ O) \ {a, b} ∪ S`. The mark at `a` is a tail iff `a`
/// is an ancestor of `b` or of some selection node, otherwise an arrow.
pub fn dag_to_mag(dag: &Graph) -> Result<Graph, TransformError> {
    require_dag(dag, "dag_to_mag")?;

    let measured: Vec<NodeIndex> = dag
        .node_ixs()
        .into_iter()
        .filter(|&ix| dag.node_at(ix).is_measured())
        .collect();
    let selection: Vec<NodeIndex> = dag
        .node_ixs()
        .into_iter()
        .filter(|&ix| dag.node_at(ix).is_selection())
        .collect();

    let mut mag = Graph::with_nodes(measured.iter().map(|&ix| dag.node_at(ix).clone()));

    for (i, &a) in measured.iter().enumerate() {
        for &b in &measured[i + 1..] {
            let mut seeds = vec![a, b];
            seeds.extend(selection.iter().copied());
            let anc = ancestors_ix(dag, &seeds);
            let mut conditioning: Vec<NodeIndex> = measured
                .iter()
                .copied()
                .filter(|&m| m != a && m != b && anc.contains(&m))
                .collect();
            conditioning.extend(selection.iter().copied());

            if !m_connected_ix(dag, a, b, &conditioning) {
                continue;
            }

            let mark_at = |x: NodeIndex, other: NodeIndex| {
                let mut seeds = vec![other];
                seeds.extend(selection.iter().copied());
                if ancestors_ix(dag, &seeds).contains(&x) {
                    Endpoint::Tail
                } else {
                    Endpoint::Arrow
                }
            };
            mag.add_edge(Edge::new(
                dag.node_at(a).clone(),
                dag.node_at(b).clone(),
                mark_at(a, b),
                mark_at(b, a),
            ))?;
        }
    }

    tracing::debug!(
        nodes = mag.node_count(),
        edges = mag.edge_count(),
        latent = dag.node_count() - mag.node_count() - selection.len(),
        selection = selection.len(),
        "dag_to_mag complete"
    );
    Ok(mag)
}
