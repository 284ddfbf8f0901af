//! Graph transforms: latent projection, PAG orientation, canonical MAGs,
//! CPDAGs, and DAG extensions.
//!
//! Transforms never edit their input. Malformed input fails with a
//! `TransformError` instead of producing a degenerate graph.

pub mod cpdag;
pub mod dag_from_cpdag;
pub mod dag_to_mag;
pub mod fci_orient;
pub mod knowledge;
pub mod meek;
pub mod pag;
pub mod pag_to_mag;

pub use cpdag::cpdag_for_dag;
pub use dag_from_cpdag::dag_from_cpdag;
pub use dag_to_mag::dag_to_mag;
pub use knowledge::Knowledge;
pub use meek::meek_orient;
pub use pag::{dag_to_pag, dag_to_pag_with, mag_to_pag, mag_to_pag_with, PagOptions};
pub use pag_to_mag::{pag_to_mag, zhang_mag_from_pag};

use petgraph::stable_graph::NodeIndex;

use causalcmp_core::errors::TransformError;

use crate::graph::{EdgeKind, Endpoint, Graph};
use crate::paths::find_directed_cycle;

/// Fail unless every edge is directed and there is no directed cycle.
pub(crate) fn require_dag(g: &Graph, transform: &'static str) -> Result<(), TransformError> {
    if let Some(edge) = g.edges().into_iter().find(|e| !e.is_directed()) {
        tracing::warn!(transform, %edge, "rejecting non-DAG input");
        return Err(TransformError::MalformedInput {
            transform,
            reason: format!("edge {edge} is not directed"),
        });
    }
    if let Some(cycle) = find_directed_cycle(g) {
        let cycle: Vec<String> = cycle.iter().map(|n| n.name().to_string()).collect();
        tracing::warn!(transform, ?cycle, "rejecting cyclic input");
        return Err(TransformError::NotAcyclic { transform, cycle });
    }
    Ok(())
}

/// Fail unless every edge has one of the allowed shapes.
pub(crate) fn require_edge_kinds(
    g: &Graph,
    transform: &'static str,
    allowed: &[EdgeKind],
) -> Result<(), TransformError> {
    match g.edges().into_iter().find(|e| !allowed.contains(&e.kind())) {
        Some(edge) => {
            tracing::warn!(transform, %edge, "rejecting edge of unexpected kind");
            Err(TransformError::MalformedInput {
                transform,
                reason: format!("edge {edge} has kind {:?}", edge.kind()),
            })
        }
        None => Ok(()),
    }
}

/// Make the edge between `a` and `b` read `a --> b`.
pub(crate) fn orient(g: &mut Graph, a: NodeIndex, b: NodeIndex) {
    g.set_marks(a, b, Endpoint::Tail, Endpoint::Arrow);
}
