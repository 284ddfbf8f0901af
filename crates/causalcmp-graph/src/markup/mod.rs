//! Edge properties for directed and partially oriented edges of a PAG.
//!
//! Properties live in a side table keyed by oriented edge rather than on the
//! graph. `MarkupCache` memoizes the table per graph revision.

pub mod cache;

pub use cache::MarkupCache;

use serde::{Deserialize, Serialize};

use causalcmp_core::types::collections::{BTreeMap, SmallVec2};

use crate::graph::{EdgeKind, Endpoint, Graph};
use crate::paths::def_visible;
use crate::paths::reachability::semi_directed_path_ix;

/// Property attached to an oriented edge `x --> y` (or `x o-> y`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum EdgeProperty {
    /// No semi-directed path from x to y besides the edge itself.
    DefinitelyDirect,
    /// Some other semi-directed path from x to y exists.
    PossiblyDirect,
    /// The edge is visible: no latent confounder.
    NoLatentConfounder,
    /// The edge is not visible.
    PossibleLatentConfounder,
}

impl EdgeProperty {
    pub fn abbreviation(&self) -> &'static str {
        match self {
            Self::DefinitelyDirect => "dd",
            Self::PossiblyDirect => "pd",
            Self::NoLatentConfounder => "nl",
            Self::PossibleLatentConfounder => "pl",
        }
    }
}

impl std::fmt::Display for EdgeProperty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.abbreviation())
    }
}

/// Which markup pass to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MarkupKind {
    /// Directed edges only, with dd/pd and nl/pl.
    PagColoring,
    /// Directed edges as above, plus dd/pd on `o->` edges.
    EdgeSpecialization,
}

/// Properties keyed by `(tail, head)` node names.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EdgeMarkup {
    properties: BTreeMap<(String, String), SmallVec2<EdgeProperty>>,
}

impl EdgeMarkup {
    pub fn properties(&self, tail: &str, head: &str) -> &[EdgeProperty] {
        self.properties
            .get(&(tail.to_string(), head.to_string()))
            .map(|p| p.as_slice())
            .unwrap_or(&[])
    }

    pub fn has(&self, tail: &str, head: &str, property: EdgeProperty) -> bool {
        self.properties(tail, head).contains(&property)
    }

    /// Number of edges carrying `property`.
    pub fn count(&self, property: EdgeProperty) -> usize {
        self.properties
            .values()
            .filter(|p| p.contains(&property))
            .count()
    }

    /// Number of marked edges.
    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&(String, String), &[EdgeProperty])> {
        self.properties.iter().map(|(k, v)| (k, v.as_slice()))
    }

    fn insert(&mut self, tail: &str, head: &str, property: EdgeProperty) {
        let entry = self
            .properties
            .entry((tail.to_string(), head.to_string()))
            .or_default();
        if !entry.contains(&property) {
            entry.push(property);
        }
    }
}

/// dd/pd and nl/pl for every directed edge.
pub fn add_pag_coloring(g: &Graph) -> EdgeMarkup {
    compute_markup(g, MarkupKind::PagColoring)
}

/// `add_pag_coloring`, plus dd/pd for every `x o-> y`.
pub fn add_edge_specialization_markup(g: &Graph) -> EdgeMarkup {
    compute_markup(g, MarkupKind::EdgeSpecialization)
}

pub(crate) fn compute_markup(g: &Graph, kind: MarkupKind) -> EdgeMarkup {
    let mut markup = EdgeMarkup::default();
    for edge in g.edges() {
        let (tail, head, directed) = match edge.kind() {
            EdgeKind::Directed => match edge.tail_and_head() {
                Some((t, h)) => (t.clone(), h.clone(), true),
                None => continue,
            },
            EdgeKind::PartiallyOriented if kind == MarkupKind::EdgeSpecialization => {
                if edge.endpoint2() == Endpoint::Arrow {
                    (edge.node1().clone(), edge.node2().clone(), false)
                } else {
                    (edge.node2().clone(), edge.node1().clone(), false)
                }
            }
            _ => continue,
        };
        let (Some(x), Some(y)) = (g.ix(&tail), g.ix(&head)) else {
            continue;
        };

        let direct = if semi_directed_path_ix(g, x, y, Some((x, y))) {
            EdgeProperty::PossiblyDirect
        } else {
            EdgeProperty::DefinitelyDirect
        };
        markup.insert(tail.name(), head.name(), direct);

        if directed {
            let visible = if def_visible(g, &edge) {
                EdgeProperty::NoLatentConfounder
            } else {
                EdgeProperty::PossibleLatentConfounder
            };
            markup.insert(tail.name(), head.name(), visible);
        }
    }
    tracing::debug!(?kind, marked = markup.len(), "edge markup computed");
    markup
}
