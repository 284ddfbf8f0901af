//! Built-in statistics.
//!
//! Ratios use `Normalization::Identity`, legality and cycle flags use
//! `Indicator`, and counts are squashed with `TanhComplement`.

use causalcmp_core::constants;
use causalcmp_graph::legality::{is_legal_cpdag, is_legal_mag, is_legal_pag};
use causalcmp_graph::paths::{
    exists_almost_cycle, exists_directed_cycle, max_cliques, trek_top, treks, TrekTop,
};
use causalcmp_graph::{EdgeKind, EdgeProperty, Graph, MarkupCache};

use super::combinators::{
    against_true_cpdag, against_true_pag, f1, matthews_correlation, precision, recall,
};
use super::{Normalization, Statistic};
use crate::confusion::{
    mark_at, node_universe, AdjacencyConfusion, ArrowConfusion, CircleConfusion,
    ColliderConfusion, DefiniteAncestorConfusion, TailConfusion, Tally,
};

fn count() -> Normalization {
    Normalization::TanhComplement {
        scale: constants::DEFAULT_TANH_SCALE,
    }
}

fn flag(value: bool) -> f64 {
    if value {
        1.0
    } else {
        0.0
    }
}

/// Unordered pairs whose edges differ: present in only one graph, or
/// present in both with different marks.
pub fn structural_hamming_distance(truth: &Graph, estimate: &Graph) -> usize {
    let names = node_universe(truth, estimate);
    let mut distance = 0;
    for (i, x) in names.iter().enumerate() {
        for y in &names[i + 1..] {
            let t = (mark_at(truth, x, y), mark_at(truth, y, x));
            let e = (mark_at(estimate, x, y), mark_at(estimate, y, x));
            if t != e {
                distance += 1;
            }
        }
    }
    distance
}

/// Bidirected edges of the estimate, judged against latent confounding in
/// the true graph: a positive when some trek of at most `max_length` edges
/// between the two ends has a latent node or a bidirected edge at its top.
pub fn bidirected_latent_tally(truth: &Graph, estimate: &Graph, max_length: usize) -> Tally {
    let mut tally = Tally::default();
    for edge in estimate.edges() {
        if edge.kind() != EdgeKind::Bidirected {
            continue;
        }
        let confounded = match (truth.node(edge.node1().name()), truth.node(edge.node2().name())) {
            (Some(x), Some(y)) => treks(truth, x, y, max_length).iter().any(|trek| {
                match trek_top(truth, trek) {
                    Some(TrekTop::Node(top)) => top.is_latent(),
                    Some(TrekTop::Bidirected(..)) => true,
                    None => false,
                }
            }),
            _ => false,
        };
        tally.record(confounded, true);
    }
    tally
}

fn markup_count(estimate: &Graph, property: EdgeProperty) -> f64 {
    MarkupCache::global().pag_coloring(estimate).count(property) as f64
}

/// Every built-in statistic.
pub fn all() -> Vec<Statistic> {
    let ap = Statistic::new("AP", "Adjacency precision", |ctx| {
        Ok(precision(&AdjacencyConfusion::new(ctx.truth, ctx.estimate)))
    });
    let ar = Statistic::new("AR", "Adjacency recall", |ctx| {
        Ok(recall(&AdjacencyConfusion::new(ctx.truth, ctx.estimate)))
    });
    let ahp = Statistic::new("AHP", "Arrowhead precision", |ctx| {
        Ok(precision(&ArrowConfusion::new(ctx.truth, ctx.estimate)))
    });
    let ahr = Statistic::new("AHR", "Arrowhead recall", |ctx| {
        Ok(recall(&ArrowConfusion::new(ctx.truth, ctx.estimate)))
    });

    let derived = vec![
        Statistic::from_fn(
            "AP_PAG",
            "Adjacency precision against the true PAG",
            against_true_pag(ap.function()),
        ),
        Statistic::from_fn(
            "AR_PAG",
            "Adjacency recall against the true PAG",
            against_true_pag(ar.function()),
        ),
        Statistic::from_fn(
            "AHP_PAG",
            "Arrowhead precision against the true PAG",
            against_true_pag(ahp.function()),
        ),
        Statistic::from_fn(
            "AHR_PAG",
            "Arrowhead recall against the true PAG",
            against_true_pag(ahr.function()),
        ),
        Statistic::from_fn(
            "AHP_CPDAG",
            "Arrowhead precision against the true CPDAG",
            against_true_cpdag(ahp.function()),
        ),
        Statistic::from_fn(
            "AHR_CPDAG",
            "Arrowhead recall against the true CPDAG",
            against_true_cpdag(ahr.function()),
        ),
    ];

    let mut stats = vec![
        ap,
        ar,
        Statistic::new("AF1", "Adjacency F1", |ctx| {
            Ok(f1(&AdjacencyConfusion::new(ctx.truth, ctx.estimate)))
        }),
        Statistic::new("AMCC", "Adjacency Matthews correlation", |ctx| {
            Ok(matthews_correlation(&AdjacencyConfusion::new(
                ctx.truth,
                ctx.estimate,
            )))
        }),
        ahp,
        ahr,
        Statistic::new("AHF1", "Arrowhead F1", |ctx| {
            Ok(f1(&ArrowConfusion::new(ctx.truth, ctx.estimate)))
        }),
        Statistic::new("AHPC", "Arrowhead precision, common adjacencies", |ctx| {
            Ok(precision(&ArrowConfusion::common_adjacencies(
                ctx.truth,
                ctx.estimate,
            )))
        }),
        Statistic::new("AHRC", "Arrowhead recall, common adjacencies", |ctx| {
            Ok(recall(&ArrowConfusion::common_adjacencies(
                ctx.truth,
                ctx.estimate,
            )))
        }),
        Statistic::new("2CP", "Two-cycle precision", |ctx| {
            Ok(precision(&ArrowConfusion::new(ctx.truth, ctx.estimate).two_cycle()))
        }),
        Statistic::new("2CR", "Two-cycle recall", |ctx| {
            Ok(recall(&ArrowConfusion::new(ctx.truth, ctx.estimate).two_cycle()))
        }),
        Statistic::new("TailP", "Tail precision", |ctx| {
            Ok(precision(&TailConfusion::new(ctx.truth, ctx.estimate)))
        }),
        Statistic::new("TailR", "Tail recall", |ctx| {
            Ok(recall(&TailConfusion::new(ctx.truth, ctx.estimate)))
        }),
        Statistic::new("CircP", "Circle precision", |ctx| {
            Ok(precision(&CircleConfusion::new(ctx.truth, ctx.estimate)))
        }),
        Statistic::new("CircR", "Circle recall", |ctx| {
            Ok(recall(&CircleConfusion::new(ctx.truth, ctx.estimate)))
        }),
        Statistic::new("CollP", "Unshielded collider precision", |ctx| {
            Ok(precision(&ColliderConfusion::new(ctx.truth, ctx.estimate)))
        }),
        Statistic::new("CollR", "Unshielded collider recall", |ctx| {
            Ok(recall(&ColliderConfusion::new(ctx.truth, ctx.estimate)))
        }),
        Statistic::new(
            "UncovErr",
            "Unshielded triples of the true graph covered in the estimate",
            |ctx| Ok(ColliderConfusion::new(ctx.truth, ctx.estimate).uncovering_errors() as f64),
        )
        .with_normalization(count()),
        Statistic::new("DAncP", "Definite ancestor precision", |ctx| {
            Ok(precision(
                &DefiniteAncestorConfusion::new(ctx.truth, ctx.estimate).definite(),
            ))
        }),
        Statistic::new("DAncR", "Definite ancestor recall", |ctx| {
            Ok(recall(
                &DefiniteAncestorConfusion::new(ctx.truth, ctx.estimate).definite(),
            ))
        }),
        Statistic::new("NDAncP", "Undecided ancestor precision", |ctx| {
            Ok(precision(
                &DefiniteAncestorConfusion::new(ctx.truth, ctx.estimate).no_decision(),
            ))
        }),
        Statistic::new("SHD", "Structural Hamming distance", |ctx| {
            Ok(structural_hamming_distance(ctx.truth, ctx.estimate) as f64)
        })
        .with_normalization(count()),
        Statistic::new(
            "NormSHD",
            "Structural Hamming distance over the number of node pairs",
            |ctx| {
                let n = node_universe(ctx.truth, ctx.estimate).len() as f64;
                let pairs = n * (n - 1.0) / 2.0;
                Ok(structural_hamming_distance(ctx.truth, ctx.estimate) as f64 / pairs)
            },
        ),
        Statistic::new("#EdgesT", "Number of edges in the true graph", |ctx| {
            Ok(ctx.truth.edge_count() as f64)
        })
        .with_normalization(count()),
        Statistic::new("#EdgesE", "Number of edges in the estimate", |ctx| {
            Ok(ctx.estimate.edge_count() as f64)
        })
        .with_normalization(count()),
        Statistic::new("#DD", "Definitely direct edges in the estimate", |ctx| {
            Ok(markup_count(ctx.estimate, EdgeProperty::DefinitelyDirect))
        })
        .with_normalization(count()),
        Statistic::new("#PD", "Possibly direct edges in the estimate", |ctx| {
            Ok(markup_count(ctx.estimate, EdgeProperty::PossiblyDirect))
        })
        .with_normalization(count()),
        Statistic::new("#NL", "Visible edges in the estimate", |ctx| {
            Ok(markup_count(ctx.estimate, EdgeProperty::NoLatentConfounder))
        })
        .with_normalization(count()),
        Statistic::new("#PL", "Edges of the estimate that may be confounded", |ctx| {
            Ok(markup_count(ctx.estimate, EdgeProperty::PossibleLatentConfounder))
        })
        .with_normalization(count()),
        Statistic::new("LegalPAG", "1 if the estimate is a legal PAG", |ctx| {
            Ok(flag(is_legal_pag(ctx.estimate).legal))
        })
        .with_normalization(Normalization::Indicator),
        Statistic::new("LegalMAG", "1 if the estimate is a legal MAG", |ctx| {
            Ok(flag(is_legal_mag(ctx.estimate).legal))
        })
        .with_normalization(Normalization::Indicator),
        Statistic::new("LegalCPDAG", "1 if the estimate is a legal CPDAG", |ctx| {
            Ok(flag(is_legal_cpdag(ctx.estimate).legal))
        })
        .with_normalization(Normalization::Indicator),
        Statistic::new("Cyclic", "1 if the estimate has a directed cycle", |ctx| {
            Ok(flag(exists_directed_cycle(ctx.estimate)))
        })
        .with_normalization(Normalization::Indicator),
        Statistic::new("AlmostCyclic", "1 if the estimate has an almost cycle", |ctx| {
            Ok(flag(exists_almost_cycle(ctx.estimate)))
        })
        .with_normalization(Normalization::Indicator),
        Statistic::new("MaxClique", "Size of the largest clique in the estimate", |ctx| {
            Ok(max_cliques(ctx.estimate)
                .iter()
                .map(Vec::len)
                .max()
                .unwrap_or(0) as f64)
        })
        .with_normalization(count()),
        Statistic::new(
            "BidirLatentP",
            "Bidirected edges explained by a latent confounder in the true graph",
            |ctx| {
                let max_length = ctx.params.get_usize(
                    constants::PARAM_MAX_TREK_LENGTH,
                    constants::DEFAULT_MAX_TREK_LENGTH,
                );
                Ok(precision(&bidirected_latent_tally(
                    ctx.truth,
                    ctx.estimate,
                    max_length,
                )))
            },
        ),
    ];
    stats.extend(derived);
    stats
}
