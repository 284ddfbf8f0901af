//! Legality checks for DAGs, CPDAGs, MAGs, and PAGs.
//!
//! Each check reports the first violation it finds.

use serde::{Deserialize, Serialize};

use crate::graph::{EdgeKind, Endpoint, Graph};
use crate::paths::{almost_cycles, exists_inducing_path, find_directed_cycle};
use crate::transform::{cpdag_for_dag, dag_from_cpdag, mag_to_pag, zhang_mag_from_pag};

/// Verdict of a legality check. `reason` names the first violation, or is
/// empty for a legal graph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Legality {
    pub legal: bool,
    pub reason: String,
}

impl Legality {
    pub fn ok() -> Self {
        Self {
            legal: true,
            reason: String::new(),
        }
    }

    pub fn violation(reason: impl Into<String>) -> Self {
        Self {
            legal: false,
            reason: reason.into(),
        }
    }
}

fn cycle_violation(g: &Graph) -> Option<Legality> {
    find_directed_cycle(g).map(|cycle| {
        let names: Vec<&str> = cycle.iter().map(|n| n.name()).collect();
        Legality::violation(format!("directed cycle {}", names.join(" --> ")))
    })
}

fn kind_violation(g: &Graph, allowed: &[EdgeKind], what: &str) -> Option<Legality> {
    g.edges()
        .into_iter()
        .find(|e| !allowed.contains(&e.kind()))
        .map(|e| Legality::violation(format!("edge {e} is not allowed in a {what}")))
}

/// All edges directed, no directed cycle.
pub fn is_legal_dag(g: &Graph) -> Legality {
    if let Some(v) = kind_violation(g, &[EdgeKind::Directed], "DAG") {
        return v;
    }
    cycle_violation(g).unwrap_or_else(Legality::ok)
}

/// Only directed and undirected edges, some DAG extends it, and that DAG's
/// CPDAG is the graph itself.
pub fn is_legal_cpdag(g: &Graph) -> Legality {
    if let Some(v) = kind_violation(g, &[EdgeKind::Directed, EdgeKind::Undirected], "CPDAG") {
        return v;
    }
    let dag = match dag_from_cpdag(g, None) {
        Ok(dag) => dag,
        Err(e) => return Legality::violation(format!("no consistent DAG extension: {e}")),
    };
    let rederived = match cpdag_for_dag(&dag) {
        Ok(c) => c,
        Err(e) => return Legality::violation(format!("extension is not a DAG: {e}")),
    };
    match g.first_difference(&rederived) {
        None => Legality::ok(),
        Some(diff) => Legality::violation(format!(
            "not the CPDAG of its own extension: {diff}"
        )),
    }
}

/// Directed, bidirected, and undirected edges only; ancestral (no directed
/// or almost cycle, no arrowhead into an undirected edge's endpoints); and
/// maximal (no inducing path between non-adjacent nodes).
pub fn is_legal_mag(g: &Graph) -> Legality {
    if let Some(v) = kind_violation(
        g,
        &[EdgeKind::Directed, EdgeKind::Bidirected, EdgeKind::Undirected],
        "MAG",
    ) {
        return v;
    }
    if let Some(v) = cycle_violation(g) {
        return v;
    }
    if let Some((x, y)) = almost_cycles(g).into_iter().next() {
        return Legality::violation(format!("almost cycle through {x} <-> {y}"));
    }
    for (a, b) in g.edge_pairs() {
        if !g.is_undirected_ix(a, b) {
            continue;
        }
        for end in [a, b] {
            if let Some(c) = g
                .neighbors_ix(end)
                .into_iter()
                .find(|&c| g.mark(c, end) == Some(Endpoint::Arrow))
            {
                return Legality::violation(format!(
                    "arrowhead from {} into {}, an endpoint of undirected edge {} --- {}",
                    g.node_at(c),
                    g.node_at(end),
                    g.node_at(a),
                    g.node_at(b)
                ));
            }
        }
    }
    let nodes = g.nodes();
    for (i, x) in nodes.iter().enumerate() {
        for y in &nodes[i + 1..] {
            if !g.is_adjacent(x, y) && exists_inducing_path(g, x, y) {
                return Legality::violation(format!(
                    "not maximal: inducing path between non-adjacent {x} and {y}"
                ));
            }
        }
    }
    Legality::ok()
}

/// Marks in {tail, arrow, circle}; Zhang's MAG is legal; and orienting
/// that MAG's PAG reproduces the graph.
pub fn is_legal_pag(g: &Graph) -> Legality {
    if let Some(e) = g
        .edges()
        .into_iter()
        .find(|e| e.endpoint1() == Endpoint::Null || e.endpoint2() == Endpoint::Null)
    {
        return Legality::violation(format!("edge {e} carries a null mark"));
    }
    let mag = match zhang_mag_from_pag(g) {
        Ok(mag) => mag,
        Err(e) => return Legality::violation(format!("no canonical MAG: {e}")),
    };
    let mag_legality = is_legal_mag(&mag);
    if !mag_legality.legal {
        return Legality::violation(format!("canonical MAG is illegal: {}", mag_legality.reason));
    }
    let pag = match mag_to_pag(&mag) {
        Ok(pag) => pag,
        Err(e) => return Legality::violation(format!("canonical MAG has no PAG: {e}")),
    };
    match g.first_difference(&pag) {
        None => Legality::ok(),
        Some(diff) => Legality::violation(format!(
            "not the PAG of its canonical MAG: {diff}"
        )),
    }
}
