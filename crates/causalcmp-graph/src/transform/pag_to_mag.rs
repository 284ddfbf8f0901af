//! PAG → MAG via Zhang's canonical representative.

use causalcmp_core::errors::TransformError;

use crate::graph::{Endpoint, Graph};
use crate::legality::is_legal_mag;

use super::dag_from_cpdag::dor_tarsi;
use super::orient;

/// Zhang's MAG for a PAG: `o->` becomes `-->`, a circle opposite a tail
/// becomes a tail, and the `o-o` part is oriented into a DAG with no
/// unshielded colliders. The result is not checked for legality.
pub fn zhang_mag_from_pag(pag: &Graph) -> Result<Graph, TransformError> {
    if let Some(edge) = pag
        .edges()
        .into_iter()
        .find(|e| e.endpoint1() == Endpoint::Null || e.endpoint2() == Endpoint::Null)
    {
        return Err(TransformError::MalformedInput {
            transform: "zhang_mag_from_pag",
            reason: format!("edge {edge} carries a null mark"),
        });
    }

    let mut mag = pag.clone();
    for (a, b) in mag.edge_pairs() {
        for (x, y) in [(a, b), (b, a)] {
            let circle_at_x = mag.mark(y, x) == Some(Endpoint::Circle);
            let opposite = mag.mark(x, y);
            if circle_at_x && matches!(opposite, Some(Endpoint::Arrow | Endpoint::Tail)) {
                mag.set_mark(y, x, Endpoint::Tail);
            }
        }
    }

    let mut circles = mag.with_same_nodes();
    for (a, b) in mag.edge_pairs() {
        if mag.mark(a, b) == Some(Endpoint::Circle) && mag.mark(b, a) == Some(Endpoint::Circle) {
            circles.add_edge_ix(a, b, Endpoint::Tail, Endpoint::Tail);
        }
    }
    if circles.edge_count() > 0 {
        dor_tarsi(&mut circles, None).map_err(|_| TransformError::MalformedInput {
            transform: "zhang_mag_from_pag",
            reason: "the o-o component admits no orientation without unshielded colliders"
                .to_string(),
        })?;
        for (a, b) in circles.edge_pairs() {
            if circles.is_directed_ix(a, b) {
                orient(&mut mag, a, b);
            } else {
                orient(&mut mag, b, a);
            }
        }
    }
    Ok(mag)
}

/// Zhang's MAG, rejected unless it is a legal MAG.
pub fn pag_to_mag(pag: &Graph) -> Result<Graph, TransformError> {
    let mag = zhang_mag_from_pag(pag)?;
    let legality = is_legal_mag(&mag);
    if !legality.legal {
        tracing::warn!(reason = %legality.reason, "pag_to_mag produced an illegal MAG");
        return Err(TransformError::MalformedInput {
            transform: "pag_to_mag",
            reason: legality.reason,
        });
    }
    Ok(mag)
}
