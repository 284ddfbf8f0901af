//! MAG → PAG and DAG → PAG.

use causalcmp_core::config::TransformConfig;
use causalcmp_core::constants;
use causalcmp_core::errors::TransformError;
use causalcmp_core::params::Parameters;

use crate::graph::{EdgeKind, Endpoint, Graph};
use crate::paths::find_directed_cycle;

use super::{dag_to_mag, fci_orient, require_edge_kinds};

/// Knobs for PAG orientation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PagOptions {
    /// Run R5–R10 after R1–R4.
    pub complete_rule_set: bool,
    /// Longest discriminating path considered by R4, in nodes.
    pub max_discriminating_path_length: Option<usize>,
}

impl Default for PagOptions {
    fn default() -> Self {
        Self {
            complete_rule_set: constants::DEFAULT_COMPLETE_RULE_SET,
            max_discriminating_path_length: None,
        }
    }
}

impl PagOptions {
    pub fn from_config(config: &TransformConfig) -> Self {
        Self {
            complete_rule_set: config.effective_complete_rule_set(),
            max_discriminating_path_length: config.max_discriminating_path_length,
        }
    }

    /// A bound of 0 means unbounded.
    pub fn from_params(params: &Parameters) -> Self {
        let bound = params.get_usize(constants::PARAM_MAX_DISCRIMINATING_PATH_LENGTH, 0);
        Self {
            complete_rule_set: params.get_bool(
                constants::PARAM_COMPLETE_RULE_SET,
                constants::DEFAULT_COMPLETE_RULE_SET,
            ),
            max_discriminating_path_length: (bound > 0).then_some(bound),
        }
    }
}

pub fn mag_to_pag(mag: &Graph) -> Result<Graph, TransformError> {
    mag_to_pag_with(mag, &PagOptions::default())
}

/// FCI orientation with the MAG as oracle: every mark starts as a circle,
/// unshielded colliders of the MAG get arrowheads, then Zhang's rules run to
/// a fixed point.
pub fn mag_to_pag_with(mag: &Graph, options: &PagOptions) -> Result<Graph, TransformError> {
    require_edge_kinds(
        mag,
        "mag_to_pag",
        &[EdgeKind::Directed, EdgeKind::Bidirected, EdgeKind::Undirected],
    )?;
    if let Some(cycle) = find_directed_cycle(mag) {
        return Err(TransformError::NotAcyclic {
            transform: "mag_to_pag",
            cycle: cycle.iter().map(|n| n.name().to_string()).collect(),
        });
    }

    let _span = tracing::debug_span!("mag_to_pag", nodes = mag.node_count()).entered();

    // The clone shares node indices with `mag`, which the rules consult.
    let mut pag = mag.clone();
    for (a, b) in pag.edge_pairs() {
        pag.set_marks(a, b, Endpoint::Circle, Endpoint::Circle);
    }
    fci_orient::orient_pag(&mut pag, mag, options);
    Ok(pag)
}

pub fn dag_to_pag(dag: &Graph) -> Result<Graph, TransformError> {
    dag_to_pag_with(dag, &PagOptions::default())
}

pub fn dag_to_pag_with(dag: &Graph, options: &PagOptions) -> Result<Graph, TransformError> {
    let mag = dag_to_mag(dag)?;
    mag_to_pag_with(&mag, options)
}
