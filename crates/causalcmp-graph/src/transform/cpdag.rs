//! CPDAG (Markov equivalence class pattern) of a DAG.

use causalcmp_core::errors::TransformError;

use crate::graph::{Endpoint, Graph};

use super::{meek_orient, orient, require_dag};

/// Skeleton, then v-structures, then the Meek R1–R3 closure.
pub fn cpdag_for_dag(dag: &Graph) -> Result<Graph, TransformError> {
    require_dag(dag, "cpdag_for_dag")?;

    let mut cpdag = dag.with_same_nodes();
    for (a, b) in dag.edge_pairs() {
        cpdag.add_edge_ix(a, b, Endpoint::Tail, Endpoint::Tail);
    }

    let mut colliders = 0usize;
    for b in dag.node_ixs() {
        let parents = dag.parents_ix(b);
        for (i, &a) in parents.iter().enumerate() {
            for &c in &parents[i + 1..] {
                if !dag.adjacent_ix(a, c) {
                    orient(&mut cpdag, a, b);
                    orient(&mut cpdag, c, b);
                    colliders += 1;
                }
            }
        }
    }

    let oriented = meek_orient(&mut cpdag, None);
    tracing::debug!(
        nodes = cpdag.node_count(),
        edges = cpdag.edge_count(),
        colliders,
        oriented,
        "cpdag_for_dag complete"
    );
    Ok(cpdag)
}
