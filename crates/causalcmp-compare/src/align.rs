//! Node alignment between graphs built from different node handles.

use causalcmp_core::errors::CompareError;
use causalcmp_graph::{Edge, Graph, Node};

/// Copy `source`, swapping every node handle for the same-named handle in
/// `target_nodes`. Node order and edge marks are preserved.
pub fn align_nodes(source: &Graph, target_nodes: &[Node]) -> Result<Graph, CompareError> {
    let lookup = |node: &Node| -> Result<Node, CompareError> {
        target_nodes
            .iter()
            .find(|t| t.name() == node.name())
            .cloned()
            .ok_or_else(|| CompareError::PreconditionViolated {
                name: node.name().to_string(),
            })
    };

    let nodes = source
        .nodes()
        .iter()
        .map(lookup)
        .collect::<Result<Vec<_>, _>>()?;
    let mut aligned = Graph::with_nodes(nodes);
    for edge in source.edges() {
        aligned.add_edge(Edge::new(
            lookup(edge.node1())?,
            lookup(edge.node2())?,
            edge.endpoint1(),
            edge.endpoint2(),
        ))?;
    }
    tracing::trace!(
        nodes = aligned.node_count(),
        edges = aligned.edge_count(),
        "graph aligned to target nodes"
    );
    Ok(aligned)
}
