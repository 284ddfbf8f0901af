//! Edge markup tests: T4-MARK-01 through T4-MARK-05.

use std::sync::Arc;

use causalcmp_graph::markup::{add_edge_specialization_markup, add_pag_coloring};
use causalcmp_graph::{parse_graph, Endpoint, EdgeProperty, MarkupCache, MarkupKind};

use EdgeProperty::*;

// T4-MARK-01: a lone directed edge is definitely direct but may be confounded.
#[test]
fn t4_mark_01_lone_edge() {
    let g = parse_graph("X-->Y").unwrap();
    let markup = add_pag_coloring(&g);
    assert_eq!(markup.properties("X", "Y"), &[DefinitelyDirect, PossibleLatentConfounder]);
    assert!(markup.properties("Y", "X").is_empty());
}

// T4-MARK-02: visibility and alternative semi-directed paths.
#[test]
fn t4_mark_02_visible_and_possibly_direct() {
    let g = parse_graph("C-->A, A-->B").unwrap();
    let markup = add_pag_coloring(&g);
    assert!(markup.has("A", "B", NoLatentConfounder));
    assert!(markup.has("C", "A", PossibleLatentConfounder));
    assert_eq!(markup.count(DefinitelyDirect), 2);

    let shortcut = parse_graph("A-->B, A-->C, C-->B").unwrap();
    let markup = add_pag_coloring(&shortcut);
    assert!(markup.has("A", "B", PossiblyDirect));
    assert!(markup.has("A", "C", DefinitelyDirect));
    assert!(markup.has("C", "B", DefinitelyDirect));
    assert_eq!(markup.count(PossiblyDirect), 1);
}

// T4-MARK-03: partially oriented edges get dd/pd only under specialization.
#[test]
fn t4_mark_03_partially_oriented_edges() {
    let g = parse_graph("A o-> B, B<--C").unwrap();
    let coloring = add_pag_coloring(&g);
    assert!(coloring.properties("A", "B").is_empty());
    assert_eq!(coloring.len(), 1);

    let special = add_edge_specialization_markup(&g);
    assert_eq!(special.properties("A", "B"), &[DefinitelyDirect]);
    assert_eq!(special.count(NoLatentConfounder) + special.count(PossibleLatentConfounder), 1);
    assert_eq!(special.len(), 2);
}

// T4-MARK-04: the cache is keyed by revision, so edits are never stale.
#[test]
fn t4_mark_04_cache_follows_revisions() {
    let cache = MarkupCache::new(16);
    let g = parse_graph("X-->Y").unwrap();
    let before = cache.markup(&g, MarkupKind::PagColoring);
    let clone = g.clone();
    let again = cache.markup(&clone, MarkupKind::PagColoring);
    assert!(Arc::ptr_eq(&before, &again));

    let mut edited = g.clone();
    let (x, y) = (edited.node("X").cloned().unwrap(), edited.node("Y").cloned().unwrap());
    edited.set_endpoint(&y, &x, Endpoint::Arrow).unwrap();
    let after = cache.markup(&edited, MarkupKind::PagColoring);
    assert!(after.is_empty());
    assert!(!before.is_empty());
    assert_eq!(cache.hits(), 1);
    assert_eq!(cache.misses(), 2);
    assert!((cache.hit_rate() - 1.0 / 3.0).abs() < 1e-12);
}

// T4-MARK-05: the global cache is shared across threads.
#[test]
fn t4_mark_05_global_cache_across_threads() {
    let g = Arc::new(parse_graph("P-->Q, Q-->R").unwrap());
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let g = Arc::clone(&g);
            std::thread::spawn(move || MarkupCache::global().pag_coloring(&g).len())
        })
        .collect();
    for handle in handles {
        assert_eq!(handle.join().unwrap(), 2);
    }
}
