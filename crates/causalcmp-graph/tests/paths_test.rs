//! Reachability and path query tests: T1-PATH-01 through T1-PATH-12.

use causalcmp_graph::paths::{
    almost_cycles, ancestors, def_visible, descendants, directed_cycle_nodes,
    exists_almost_cycle, exists_directed_cycle, exists_directed_path_from_to,
    exists_inducing_path, exists_semi_directed_path_from_to, find_directed_cycle,
    is_ancestor_of, is_m_connected, is_m_separated, max_cliques, topological_order, trek_top,
    treks, TrekTop,
};
use causalcmp_graph::{parse_graph, Edge, Graph, Node};

fn n(g: &Graph, name: &str) -> Node {
    g.node(name).cloned().unwrap()
}

fn names(nodes: &[Node]) -> Vec<&str> {
    nodes.iter().map(|n| n.name()).collect()
}

// T1-PATH-01: ancestry is reflexive and closures include their inputs.
#[test]
fn t1_path_01_reflexive_ancestry_and_closures() {
    let g = parse_graph("X-->Y, Y-->Z").unwrap();
    let (x, y, z) = (n(&g, "X"), n(&g, "Y"), n(&g, "Z"));

    for node in g.nodes() {
        assert!(is_ancestor_of(&g, &node, &node));
    }
    assert!(is_ancestor_of(&g, &x, &z));
    assert!(!is_ancestor_of(&g, &z, &x));
    assert_eq!(names(&ancestors(&g, &[z.clone()])), vec!["X", "Y", "Z"]);
    assert_eq!(names(&descendants(&g, &[y])), vec!["Y", "Z"]);
}

// T1-PATH-02: a directed path from a node to itself exists only on a cycle.
#[test]
fn t1_path_02_self_path_only_on_cycles() {
    let cyclic = parse_graph("A-->B, B-->C, C-->A").unwrap();
    let a = n(&cyclic, "A");
    assert!(exists_directed_path_from_to(&cyclic, &a, &a));
    assert!(exists_directed_cycle(&cyclic));
    assert!(topological_order(&cyclic).is_none());
    assert_eq!(names(&find_directed_cycle(&cyclic).unwrap()), vec!["A", "B", "C"]);
    assert_eq!(names(&directed_cycle_nodes(&cyclic)), vec!["A", "B", "C"]);

    let acyclic = parse_graph("A-->B, B-->C, A-->C").unwrap();
    for node in acyclic.nodes() {
        assert!(!exists_directed_path_from_to(&acyclic, &node, &node));
    }
    assert!(!exists_directed_cycle(&acyclic));
    assert_eq!(
        names(&topological_order(&acyclic).unwrap()),
        vec!["A", "B", "C"]
    );
}

// T1-PATH-03: semi-directed paths leave each node through a tail or a circle.
#[test]
fn t1_path_03_semi_directed_paths() {
    let g = parse_graph("X o-o Y, Y-->Z, W<->X").unwrap();
    let (x, y, z, w) = (n(&g, "X"), n(&g, "Y"), n(&g, "Z"), n(&g, "W"));
    assert!(exists_semi_directed_path_from_to(&g, &x, &z));
    assert!(exists_semi_directed_path_from_to(&g, &y, &x));
    assert!(!exists_semi_directed_path_from_to(&g, &z, &x));
    assert!(!exists_semi_directed_path_from_to(&g, &w, &x));
    assert!(!exists_directed_path_from_to(&g, &x, &z));
}

// T1-PATH-04: almost cycles are bidirected edges between ancestors.
#[test]
fn t1_path_04_almost_cycles() {
    let g = parse_graph("A-->B, B-->C, A<->C").unwrap();
    assert!(exists_almost_cycle(&g));
    let found = almost_cycles(&g);
    assert_eq!(found.len(), 1);
    assert_eq!((found[0].0.name(), found[0].1.name()), ("A", "C"));

    let clean = parse_graph("A-->B, B<->C").unwrap();
    assert!(!exists_almost_cycle(&clean));
}

// T1-PATH-05: d-separation on DAGs: chains, forks, and colliders.
#[test]
fn t1_path_05_d_separation() {
    let chain = parse_graph("X-->Y, Y-->Z").unwrap();
    let (x, y, z) = (n(&chain, "X"), n(&chain, "Y"), n(&chain, "Z"));
    assert!(is_m_connected(&chain, &x, &z, &[]));
    assert!(is_m_separated(&chain, &x, &z, &[y.clone()]));

    let fork = parse_graph("Y-->X, Y-->Z").unwrap();
    assert!(is_m_connected(&fork, &x, &z, &[]));
    assert!(is_m_separated(&fork, &x, &z, &[y.clone()]));

    let collider = parse_graph("X-->Z, Y-->Z, Z-->W").unwrap();
    let w = n(&collider, "W");
    assert!(is_m_separated(&collider, &x, &y, &[]));
    assert!(is_m_connected(&collider, &x, &y, &[z.clone()]));
    assert!(is_m_connected(&collider, &x, &y, &[w]));
}

// T1-PATH-06: m-separation through bidirected edges.
#[test]
fn t1_path_06_m_separation_with_bidirected_edges() {
    let g = parse_graph("A-->B, B<->C, D-->C").unwrap();
    let (a, b, c, d) = (n(&g, "A"), n(&g, "B"), n(&g, "C"), n(&g, "D"));
    assert!(is_m_separated(&g, &a, &d, &[]));
    assert!(is_m_connected(&g, &a, &c, &[b.clone()]));
    assert!(is_m_connected(&g, &a, &d, &[b, c]));
    assert!(is_m_connected(&g, &a, &a, &[]));
}

// T1-PATH-07: inducing paths run through colliders that are ancestors.
#[test]
fn t1_path_07_inducing_paths() {
    let g = parse_graph("X<->B1, B1<->B2, B2<->Y, B1-->Y, B2-->X").unwrap();
    let (x, y) = (n(&g, "X"), n(&g, "Y"));
    assert!(exists_inducing_path(&g, &x, &y));

    let no_ancestry = parse_graph("X<->B1, B1<->B2, B2<->Y").unwrap();
    assert!(!exists_inducing_path(&no_ancestry, &x, &y));

    let adjacent = parse_graph("X-->Y").unwrap();
    assert!(exists_inducing_path(&adjacent, &x, &y));
}

// T1-PATH-08: visibility of directed edges.
#[test]
fn t1_path_08_visible_edges() {
    let g = parse_graph("C-->A, A-->B").unwrap();
    let (a, b, c) = (n(&g, "A"), n(&g, "B"), n(&g, "C"));
    assert!(def_visible(&g, &Edge::directed(&a, &b)));
    assert!(!def_visible(&g, &Edge::directed(&c, &a)));

    let collider_path = parse_graph("C-->D, D<->A, D-->B, A-->B").unwrap();
    assert!(def_visible(&collider_path, &Edge::directed(&a, &b)));

    let shielded = parse_graph("C-->D, D<->A, D-->B, A-->B, C-->B").unwrap();
    assert!(!def_visible(&shielded, &Edge::directed(&a, &b)));

    assert!(!def_visible(&g, &Edge::bidirected(&a, &b)));
}

// T1-PATH-09: maximal cliques are deterministic.
#[test]
fn t1_path_09_max_cliques() {
    let g = parse_graph("A---B, B---C, A---C, C---D, E").unwrap();
    let all_cliques = max_cliques(&g);
    let cliques: Vec<Vec<&str>> = all_cliques.iter().map(|c| names(c)).collect();
    assert_eq!(cliques, vec![vec!["A", "B", "C"], vec!["C", "D"], vec!["E"]]);
}

// T1-PATH-10: treks have no colliders and respect the length bound.
#[test]
fn t1_path_10_treks() {
    let g = parse_graph("L-->X, L-->Y, X-->Y").unwrap();
    let (x, y, l) = (n(&g, "X"), n(&g, "Y"), n(&g, "L"));

    let all_treks = treks(&g, &x, &y, 3);
    let found: Vec<Vec<&str>> = all_treks.iter().map(|t| names(t)).collect();
    assert_eq!(found, vec![vec!["X", "L", "Y"], vec!["X", "Y"]]);
    assert_eq!(treks(&g, &x, &y, 1).len(), 1);

    let tops: Vec<TrekTop> = treks(&g, &x, &y, 3)
        .iter()
        .filter_map(|t| trek_top(&g, t))
        .collect();
    assert_eq!(tops, vec![TrekTop::Node(l), TrekTop::Node(x.clone())]);

    let collider = parse_graph("X-->Z, Y-->Z").unwrap();
    assert!(treks(&collider, &x, &y, 5).is_empty());
}

// T1-PATH-11: a bidirected edge may sit at the top of a trek.
#[test]
fn t1_path_11_bidirected_trek_top() {
    let g = parse_graph("A-->X, A<->B, B-->Y").unwrap();
    let (x, y) = (n(&g, "X"), n(&g, "Y"));
    let found = treks(&g, &x, &y, 5);
    assert_eq!(found.len(), 1);
    assert_eq!(names(&found[0]), vec!["X", "A", "B", "Y"]);
    assert_eq!(
        trek_top(&g, &found[0]),
        Some(TrekTop::Bidirected(n(&g, "A"), n(&g, "B")))
    );
}

// T1-PATH-12: nodes outside the graph answer false or empty.
#[test]
fn t1_path_12_unknown_nodes() {
    let g = parse_graph("X-->Y").unwrap();
    let x = n(&g, "X");
    let ghost = Node::measured("Ghost");
    assert!(!is_ancestor_of(&g, &ghost, &ghost));
    assert!(!exists_directed_path_from_to(&g, &x, &ghost));
    assert!(!exists_semi_directed_path_from_to(&g, &ghost, &x));
    assert!(ancestors(&g, &[ghost.clone()]).is_empty());
    assert!(treks(&g, &x, &ghost, 4).is_empty());
    assert!(!exists_inducing_path(&g, &x, &ghost));
    assert!(is_m_separated(&g, &x, &ghost, &[]));
}
