//! Property tests for causalcmp-compare: T8-PROP-01 through T8-PROP-03.

use proptest::prelude::*;

use causalcmp_compare::statistics::{precision, recall};
use causalcmp_compare::{
    AdjacencyConfusion, ArrowConfusion, Confusion, DefiniteAncestorConfusion, TailConfusion,
};
use causalcmp_graph::{Edge, Endpoint, Graph, Node};

const MARKS: [Endpoint; 3] = [Endpoint::Tail, Endpoint::Arrow, Endpoint::Circle];

/// Build a mixed graph over `n` nodes. Each pair gets no edge (code 0) or
/// an edge whose marks are picked from `MARKS`.
fn build_graph(n: usize, codes: &[(u8, u8, u8)]) -> Graph {
    let nodes: Vec<Node> = (0..n).map(|i| Node::measured(format!("V{i}"))).collect();
    let mut g = Graph::with_nodes(nodes.iter().cloned());
    let mut k = 0;
    for i in 0..n {
        for j in (i + 1)..n {
            if let Some(&(present, left, right)) = codes.get(k) {
                if present % 2 == 1 {
                    let edge = Edge::new(
                        nodes[i].clone(),
                        nodes[j].clone(),
                        MARKS[left as usize % 3],
                        MARKS[right as usize % 3],
                    );
                    g.add_edge(edge).unwrap();
                }
            }
            k += 1;
        }
    }
    g
}

fn graph_pair() -> impl Strategy<Value = (usize, Graph, Graph)> {
    (2_usize..7).prop_flat_map(|n| {
        let pairs = n * (n - 1) / 2;
        (
            prop::collection::vec((0_u8..4, 0_u8..3, 0_u8..3), pairs),
            prop::collection::vec((0_u8..4, 0_u8..3, 0_u8..3), pairs),
        )
            .prop_map(move |(a, b)| (n, build_graph(n, &a), build_graph(n, &b)))
    })
}

fn same_or_both_nan(a: f64, b: f64) -> bool {
    a == b || (a.is_nan() && b.is_nan())
}

// =============================================================================
// T8-PROP-01: Adjacency tallies cover every unordered pair
// =============================================================================
proptest! {
    #[test]
    fn t8_prop_01_adjacency_total((n, truth, estimate) in graph_pair()) {
        let adj = AdjacencyConfusion::new(&truth, &estimate);
        prop_assert_eq!(adj.total(), n * (n - 1) / 2);

        let ordered = n * (n - 1);
        prop_assert_eq!(ArrowConfusion::new(&truth, &estimate).total(), ordered);
        prop_assert_eq!(TailConfusion::new(&truth, &estimate).total(), ordered);

        let anc = DefiniteAncestorConfusion::new(&truth, &estimate);
        let denied = anc.definite().fn_ + anc.definite().tn;
        let decided = anc.definite().tp + anc.definite().fp;
        let undecided = anc.no_decision().tp + anc.no_decision().fp;
        prop_assert_eq!(denied + decided + undecided, ordered);
    }
}

// =============================================================================
// T8-PROP-02: Precision of (A, B) equals recall of (B, A)
// =============================================================================
proptest! {
    #[test]
    fn t8_prop_02_precision_recall_swap((_n, a, b) in graph_pair()) {
        let p = precision(&AdjacencyConfusion::new(&a, &b));
        let r = recall(&AdjacencyConfusion::new(&b, &a));
        prop_assert!(same_or_both_nan(p, r), "adjacency {} vs {}", p, r);

        let p = precision(&ArrowConfusion::new(&a, &b));
        let r = recall(&ArrowConfusion::new(&b, &a));
        prop_assert!(same_or_both_nan(p, r), "arrowhead {} vs {}", p, r);
    }
}

// =============================================================================
// T8-PROP-03: A graph compared with itself has no false positives or negatives
// =============================================================================
proptest! {
    #[test]
    fn t8_prop_03_self_comparison((_n, a, _b) in graph_pair()) {
        let adj = AdjacencyConfusion::new(&a, &a);
        prop_assert_eq!(adj.fp() + adj.fn_(), 0);
        prop_assert_eq!(adj.tp(), a.edge_count());

        let arrows = ArrowConfusion::new(&a, &a);
        prop_assert_eq!(arrows.fp() + arrows.fn_(), 0);
        prop_assert_eq!(arrows.two_cycle().fp + arrows.two_cycle().fn_, 0);
    }
}
