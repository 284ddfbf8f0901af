//! Zhang's orientation rules for PAGs, with a MAG answering collider queries.
//!
//! The PAG being oriented must share node indices with the oracle MAG.
//! Rules only ever replace circle marks.

use std::collections::VecDeque;

use petgraph::stable_graph::NodeIndex;

use causalcmp_core::types::collections::FxHashSet;

use crate::graph::{Endpoint, Graph};

use super::PagOptions;

pub(crate) fn orient_pag(pag: &mut Graph, mag: &Graph, options: &PagOptions) {
    let colliders = orient_unshielded_colliders(pag, mag);
    let bound = options.max_discriminating_path_length;

    let mut passes = 0usize;
    loop {
        passes += 1;
        if !basic_rules(pag, mag, bound) {
            break;
        }
    }

    if options.complete_rule_set {
        let selection_bias = mag.has_undirected_edge();
        if selection_bias {
            rule5(pag);
        }
        loop {
            passes += 1;
            let mut changed = basic_rules(pag, mag, bound);
            if selection_bias {
                changed |= rule6(pag);
                changed |= rule7(pag);
            }
            changed |= rule8(pag);
            changed |= rule9(pag);
            changed |= rule10(pag);
            if !changed {
                break;
            }
        }
    }

    tracing::debug!(
        colliders,
        passes,
        complete = options.complete_rule_set,
        "pag orientation complete"
    );
}

fn basic_rules(pag: &mut Graph, mag: &Graph, bound: Option<usize>) -> bool {
    let mut changed = rule1(pag);
    changed |= rule2(pag);
    changed |= rule3(pag);
    changed |= rule4(pag, mag, bound);
    changed
}

/// Set the mark at `b` on `a *-* b` if it is currently a circle.
fn set_circle(g: &mut Graph, a: NodeIndex, b: NodeIndex, endpoint: Endpoint) -> bool {
    if g.mark(a, b) == Some(Endpoint::Circle) {
        g.set_mark(a, b, endpoint)
    } else {
        false
    }
}

fn is(g: &Graph, a: NodeIndex, b: NodeIndex, endpoint: Endpoint) -> bool {
    g.mark(a, b) == Some(endpoint)
}

/// `a --> b` may be extended along: no arrowhead at `a`, no tail at `b`.
fn potentially_directed(g: &Graph, a: NodeIndex, b: NodeIndex) -> bool {
    g.adjacent_ix(a, b) && !is(g, b, a, Endpoint::Arrow) && !is(g, a, b, Endpoint::Tail)
}

fn nondirected(g: &Graph, a: NodeIndex, b: NodeIndex) -> bool {
    is(g, a, b, Endpoint::Circle) && is(g, b, a, Endpoint::Circle)
}

/// `a o-> c`
fn partially_oriented(g: &Graph, a: NodeIndex, c: NodeIndex) -> bool {
    is(g, c, a, Endpoint::Circle) && is(g, a, c, Endpoint::Arrow)
}

fn orient_unshielded_colliders(pag: &mut Graph, mag: &Graph) -> usize {
    let mut count = 0;
    for b in pag.node_ixs() {
        let adj = pag.neighbors_ix(b);
        for (i, &a) in adj.iter().enumerate() {
            for &c in &adj[i + 1..] {
                if pag.adjacent_ix(a, c) || !mag.is_collider_ix(a, b, c) {
                    continue;
                }
                set_circle(pag, a, b, Endpoint::Arrow);
                set_circle(pag, c, b, Endpoint::Arrow);
                count += 1;
            }
        }
    }
    count
}

/// R1: `a *-> b o-* c`, `a` and `c` non-adjacent ⇒ `b --> c`.
fn rule1(pag: &mut Graph) -> bool {
    let mut changed = false;
    for b in pag.node_ixs() {
        for a in pag.neighbors_ix(b) {
            if !is(pag, a, b, Endpoint::Arrow) {
                continue;
            }
            for c in pag.neighbors_ix(b) {
                if c == a || pag.adjacent_ix(a, c) || !is(pag, c, b, Endpoint::Circle) {
                    continue;
                }
                changed |= set_circle(pag, c, b, Endpoint::Tail);
                changed |= set_circle(pag, b, c, Endpoint::Arrow);
            }
        }
    }
    changed
}

/// R2: `a --> b *-> c` or `a *-> b --> c`, with `a *-o c` ⇒ `a *-> c`.
fn rule2(pag: &mut Graph) -> bool {
    let mut changed = false;
    for (x, y) in pag.edge_pairs() {
        for (a, c) in [(x, y), (y, x)] {
            if !is(pag, a, c, Endpoint::Circle) {
                continue;
            }
            let fires = pag.neighbors_ix(a).into_iter().any(|b| {
                b != c
                    && pag.adjacent_ix(b, c)
                    && ((pag.is_directed_ix(a, b) && is(pag, b, c, Endpoint::Arrow))
                        || (is(pag, a, b, Endpoint::Arrow) && pag.is_directed_ix(b, c)))
            });
            if fires {
                changed |= set_circle(pag, a, c, Endpoint::Arrow);
            }
        }
    }
    changed
}

/// R3: `a *-> b <-* c`, `a *-o d o-* c`, `a` and `c` non-adjacent,
/// `d *-o b` ⇒ `d *-> b`.
fn rule3(pag: &mut Graph) -> bool {
    let mut changed = false;
    for b in pag.node_ixs() {
        let into_b: Vec<NodeIndex> = pag
            .neighbors_ix(b)
            .into_iter()
            .filter(|&a| is(pag, a, b, Endpoint::Arrow))
            .collect();
        for d in pag.neighbors_ix(b) {
            if !is(pag, d, b, Endpoint::Circle) {
                continue;
            }
            let fires = into_b.iter().enumerate().any(|(i, &a)| {
                into_b[i + 1..].iter().any(|&c| {
                    a != d
                        && c != d
                        && !pag.adjacent_ix(a, c)
                        && is(pag, a, d, Endpoint::Circle)
                        && is(pag, c, d, Endpoint::Circle)
                })
            });
            if fires {
                changed |= set_circle(pag, d, b, Endpoint::Arrow);
            }
        }
    }
    changed
}

/// R4: on a discriminating path `<d, ..., a, b, c>` with `b o-* c`, the
/// MAG decides: a collider at `b` gives `a <-> b <-> c`, otherwise `b --> c`.
fn rule4(pag: &mut Graph, mag: &Graph, bound: Option<usize>) -> bool {
    let mut changed = false;
    for b in pag.node_ixs() {
        for c in pag.neighbors_ix(b) {
            if !is(pag, c, b, Endpoint::Circle) {
                continue;
            }
            for a in pag.neighbors_ix(b) {
                if a == c || !pag.is_directed_ix(a, c) || !is(pag, b, a, Endpoint::Arrow) {
                    continue;
                }
                if discriminating_start(pag, a, b, c, bound).is_none() {
                    continue;
                }
                if mag.is_collider_ix(a, b, c) {
                    changed |= set_circle(pag, a, b, Endpoint::Arrow);
                    changed |= set_circle(pag, c, b, Endpoint::Arrow);
                    changed |= set_circle(pag, b, c, Endpoint::Arrow);
                } else {
                    changed |= set_circle(pag, c, b, Endpoint::Tail);
                    changed |= set_circle(pag, b, c, Endpoint::Arrow);
                }
                break;
            }
        }
    }
    changed
}

/// Search backwards from `a` for the far end of a discriminating path for
/// `b`: every node strictly between it and `b` is a collider on the path and
/// a parent of `c`, and the far end is not adjacent to `c`.
fn discriminating_start(
    pag: &Graph,
    a: NodeIndex,
    b: NodeIndex,
    c: NodeIndex,
    bound: Option<usize>,
) -> Option<NodeIndex> {
    let mut visited: FxHashSet<NodeIndex> = [a, b, c].into_iter().collect();
    let mut queue: VecDeque<(NodeIndex, usize)> = VecDeque::from([(a, 3)]);
    while let Some((t, len)) = queue.pop_front() {
        if bound.is_some_and(|max| len + 1 > max) {
            continue;
        }
        for d in pag.neighbors_ix(t) {
            if visited.contains(&d) || !is(pag, d, t, Endpoint::Arrow) {
                continue;
            }
            if !pag.adjacent_ix(d, c) {
                return Some(d);
            }
            if pag.is_directed_ix(d, c) && is(pag, t, d, Endpoint::Arrow) {
                visited.insert(d);
                queue.push_back((d, len + 1));
            }
        }
    }
    None
}

/// Depth-first search for an uncovered path that starts with `prefix`
/// (at least two nodes) and ends at `target`. Every new step must satisfy
/// `step`, nodes in `avoid` are skipped, and `accept` gets the final say.
fn find_uncovered_path(
    g: &Graph,
    prefix: &[NodeIndex],
    target: NodeIndex,
    avoid: &[NodeIndex],
    step: &dyn Fn(&Graph, NodeIndex, NodeIndex) -> bool,
    accept: &dyn Fn(&[NodeIndex]) -> bool,
) -> Option<Vec<NodeIndex>> {
    let mut path = prefix.to_vec();
    if path.last() == Some(&target) {
        return accept(&path).then_some(path);
    }
    if extend_uncovered(g, &mut path, target, avoid, step, accept) {
        Some(path)
    } else {
        None
    }
}

fn extend_uncovered(
    g: &Graph,
    path: &mut Vec<NodeIndex>,
    target: NodeIndex,
    avoid: &[NodeIndex],
    step: &dyn Fn(&Graph, NodeIndex, NodeIndex) -> bool,
    accept: &dyn Fn(&[NodeIndex]) -> bool,
) -> bool {
    let (Some(&current), Some(&before)) = (path.last(), path.iter().rev().nth(1)) else {
        return false;
    };
    for next in g.neighbors_ix(current) {
        if path.contains(&next)
            || avoid.contains(&next)
            || g.adjacent_ix(before, next)
            || !step(g, current, next)
        {
            continue;
        }
        path.push(next);
        if next == target {
            if accept(path) {
                return true;
            }
        } else if extend_uncovered(g, path, target, avoid, step, accept) {
            return true;
        }
        path.pop();
    }
    false
}

/// R5: `a o-o b` closing an uncovered circle path `<a, c, ..., d, b>` with
/// `a`, `d` and `b`, `c` non-adjacent ⇒ every edge on the cycle becomes `---`.
fn rule5(pag: &mut Graph) -> bool {
    let mut changed = false;
    for (a, b) in pag.edge_pairs() {
        if !nondirected(pag, a, b) {
            continue;
        }
        let mut cycle: Option<Vec<NodeIndex>> = None;
        'search: for c in pag.neighbors_ix(a) {
            if c == b || !nondirected(pag, a, c) || pag.adjacent_ix(c, b) {
                continue;
            }
            for d in pag.neighbors_ix(b) {
                if d == a || d == c || !nondirected(pag, b, d) || pag.adjacent_ix(d, a) {
                    continue;
                }
                let accept = |p: &[NodeIndex]| p.len() >= 3 && !pag.adjacent_ix(p[p.len() - 2], b);
                if let Some(path) = find_uncovered_path(
                    pag,
                    &[a, c],
                    d,
                    &[b],
                    &|g, x, y| nondirected(g, x, y),
                    &accept,
                ) {
                    let mut full = path;
                    full.push(b);
                    cycle = Some(full);
                    break 'search;
                }
            }
        }
        if let Some(cycle) = cycle {
            for pair in cycle.windows(2) {
                changed |= set_circle(pag, pair[0], pair[1], Endpoint::Tail);
                changed |= set_circle(pag, pair[1], pair[0], Endpoint::Tail);
            }
            changed |= set_circle(pag, a, b, Endpoint::Tail);
            changed |= set_circle(pag, b, a, Endpoint::Tail);
        }
    }
    changed
}

/// R6: `a --- b o-* c` ⇒ `b --* c`.
fn rule6(pag: &mut Graph) -> bool {
    let mut changed = false;
    for b in pag.node_ixs() {
        let undirected = pag
            .neighbors_ix(b)
            .into_iter()
            .any(|a| pag.is_undirected_ix(a, b));
        if !undirected {
            continue;
        }
        for c in pag.neighbors_ix(b) {
            if pag.is_undirected_ix(b, c) {
                continue;
            }
            changed |= set_circle(pag, c, b, Endpoint::Tail);
        }
    }
    changed
}

/// R7: `a --o b o-* c`, `a` and `c` non-adjacent ⇒ `b --* c`.
fn rule7(pag: &mut Graph) -> bool {
    let mut changed = false;
    for b in pag.node_ixs() {
        for a in pag.neighbors_ix(b) {
            if !(is(pag, b, a, Endpoint::Tail) && is(pag, a, b, Endpoint::Circle)) {
                continue;
            }
            for c in pag.neighbors_ix(b) {
                if c == a || pag.adjacent_ix(a, c) {
                    continue;
                }
                changed |= set_circle(pag, c, b, Endpoint::Tail);
            }
        }
    }
    changed
}

/// R8: `a --> b --> c` or `a --o b --> c`, with `a o-> c` ⇒ `a --> c`.
fn rule8(pag: &mut Graph) -> bool {
    let mut changed = false;
    for (x, y) in pag.edge_pairs() {
        for (a, c) in [(x, y), (y, x)] {
            if !partially_oriented(pag, a, c) {
                continue;
            }
            let fires = pag.neighbors_ix(a).into_iter().any(|b| {
                b != c
                    && pag.is_directed_ix(b, c)
                    && (pag.is_directed_ix(a, b)
                        || (is(pag, b, a, Endpoint::Tail) && is(pag, a, b, Endpoint::Circle)))
            });
            if fires {
                changed |= set_circle(pag, c, a, Endpoint::Tail);
            }
        }
    }
    changed
}

/// R9: `a o-> c` with an uncovered potentially directed path
/// `<a, b, ..., c>`, `b` and `c` non-adjacent ⇒ `a --> c`.
fn rule9(pag: &mut Graph) -> bool {
    let mut changed = false;
    for (x, y) in pag.edge_pairs() {
        for (a, c) in [(x, y), (y, x)] {
            if !partially_oriented(pag, a, c) {
                continue;
            }
            let fires = pag.neighbors_ix(a).into_iter().any(|b| {
                b != c
                    && !pag.adjacent_ix(b, c)
                    && potentially_directed(pag, a, b)
                    && find_uncovered_path(
                        pag,
                        &[a, b],
                        c,
                        &[],
                        &potentially_directed,
                        &|_| true,
                    )
                    .is_some()
            });
            if fires {
                changed |= set_circle(pag, c, a, Endpoint::Tail);
            }
        }
    }
    changed
}

/// R10: `a o-> c`, `b --> c <-- d`, uncovered potentially directed paths
/// from `a` to `b` and from `a` to `d` whose second nodes are distinct and
/// non-adjacent ⇒ `a --> c`.
fn rule10(pag: &mut Graph) -> bool {
    let mut changed = false;
    for (x, y) in pag.edge_pairs() {
        for (a, c) in [(x, y), (y, x)] {
            if !partially_oriented(pag, a, c) {
                continue;
            }
            let into_c: Vec<NodeIndex> = pag
                .parents_ix(c)
                .into_iter()
                .filter(|&p| p != a)
                .collect();
            if into_c.len() < 2 {
                continue;
            }
            let firsts: Vec<NodeIndex> = pag
                .neighbors_ix(a)
                .into_iter()
                .filter(|&m| m != c && potentially_directed(pag, a, m))
                .collect();

            let reaches = |first: NodeIndex, end: NodeIndex| {
                find_uncovered_path(pag, &[a, first], end, &[c], &potentially_directed, &|_| true)
                    .is_some()
            };

            let mut fires = false;
            'pairs: for (i, &b) in into_c.iter().enumerate() {
                for &d in &into_c[i + 1..] {
                    for &mu in &firsts {
                        for &omega in &firsts {
                            if mu == omega || pag.adjacent_ix(mu, omega) {
                                continue;
                            }
                            if reaches(mu, b) && reaches(omega, d) {
                                fires = true;
                                break 'pairs;
                            }
                        }
                    }
                }
            }
            if fires {
                changed |= set_circle(pag, c, a, Endpoint::Tail);
            }
        }
    }
    changed
}
