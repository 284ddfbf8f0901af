//! Legality checker tests: T3-LEGAL-01 through T3-LEGAL-05.

use causalcmp_graph::legality::{is_legal_cpdag, is_legal_dag, is_legal_mag, is_legal_pag, Legality};
use causalcmp_graph::transform::{cpdag_for_dag, dag_to_pag};
use causalcmp_graph::{parse_graph, parse_graph_with_nodes, Node};

fn assert_illegal(verdict: Legality, needle: &str) {
    assert!(!verdict.legal, "expected a violation mentioning {needle:?}");
    assert!(
        verdict.reason.contains(needle),
        "reason {:?} should mention {needle:?}",
        verdict.reason
    );
}

// T3-LEGAL-01: DAGs.
#[test]
fn t3_legal_01_dags() {
    assert_eq!(is_legal_dag(&parse_graph("X-->Y, Y-->Z").unwrap()), Legality::ok());
    assert_illegal(is_legal_dag(&parse_graph("A-->B, B-->C, C-->A").unwrap()), "cycle");
    assert_illegal(is_legal_dag(&parse_graph("X---Y").unwrap()), "X --- Y");
}

// T3-LEGAL-02: CPDAGs must be the pattern of their own extension.
#[test]
fn t3_legal_02_cpdags() {
    let dag = parse_graph("X-->Z, Y-->Z, Z-->W, A-->B").unwrap();
    assert!(is_legal_cpdag(&cpdag_for_dag(&dag).unwrap()).legal);
    assert!(is_legal_cpdag(&parse_graph("X---Y, Y---Z").unwrap()).legal);

    assert_illegal(is_legal_cpdag(&parse_graph("X-->Y").unwrap()), "not the CPDAG");
    assert_illegal(is_legal_cpdag(&parse_graph("X<->Y").unwrap()), "not allowed");
}

// T3-LEGAL-03: MAGs must be ancestral and maximal.
#[test]
fn t3_legal_03_mags() {
    assert!(is_legal_mag(&parse_graph("A-->B, B<->C, D-->C").unwrap()).legal);

    assert_illegal(
        is_legal_mag(&parse_graph("A-->B, B-->C, A<->C").unwrap()),
        "almost cycle",
    );
    assert_illegal(is_legal_mag(&parse_graph("A---B, C-->B").unwrap()), "arrowhead");
    assert_illegal(
        is_legal_mag(&parse_graph("X<->B1, B1<->B2, B2<->Y, B1-->Y, B2-->X").unwrap()),
        "maximal",
    );
    assert_illegal(is_legal_mag(&parse_graph("A o-> B").unwrap()), "not allowed");
}

// T3-LEGAL-04: PAGs produced by dag_to_pag are legal.
#[test]
fn t3_legal_04_generated_pags_are_legal() {
    let nodes = [
        Node::measured("A"),
        Node::latent("L1"),
        Node::measured("B"),
        Node::measured("C"),
        Node::latent("L2"),
        Node::measured("D"),
    ];
    for text in [
        "A-->B, B-->C, C-->D",
        "L1-->A, L1-->B, B-->C, L2-->C, L2-->D",
        "A-->B, L1-->B, L1-->C, D-->C",
        "A-->C, B-->C, C-->D, L2-->D, L2-->A",
    ] {
        let dag = parse_graph_with_nodes(&nodes, text).unwrap();
        let pag = dag_to_pag(&dag).unwrap();
        let verdict = is_legal_pag(&pag);
        assert!(verdict.legal, "PAG of {text} is illegal: {}", verdict.reason);
    }
}

// T3-LEGAL-05: PAGs that no MAG reproduces are rejected.
#[test]
fn t3_legal_05_illegal_pags() {
    assert!(is_legal_pag(&parse_graph("X o-o Y").unwrap()).legal);
    assert_illegal(is_legal_pag(&parse_graph("X o-> Y").unwrap()), "not the PAG");
    assert_illegal(
        is_legal_pag(&parse_graph("A o-o B, B o-o C, C o-o D, D o-o A").unwrap()),
        "no canonical MAG",
    );
}
