//! petgraph::StableGraph wrapper holding nodes and marked edges.
//!
//! Nodes are never removed, so node indices stay dense and a copy made with
//! `with_same_nodes` lines up index-for-index with its source. Transforms rely
//! on this to consult the input graph while editing the output.

use std::sync::atomic::{AtomicU64, Ordering};

use petgraph::stable_graph::{EdgeIndex, NodeIndex, StableGraph};
use petgraph::Undirected;

use causalcmp_core::errors::GraphError;
use causalcmp_core::types::collections::{FxHashMap, FxHashSet};

use super::{Edge, Endpoint, Node};

/// Marks stored on a petgraph edge, keyed by petgraph's own endpoint order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct EdgeMarks {
    pub at_source: Endpoint,
    pub at_target: Endpoint,
}

pub(crate) type MarkedStableGraph = StableGraph<Node, EdgeMarks, Undirected>;

static NEXT_REVISION: AtomicU64 = AtomicU64::new(1);

fn next_revision() -> u64 {
    NEXT_REVISION.fetch_add(1, Ordering::Relaxed)
}

/// A mixed graph: at most one edge per unordered node pair, no self-loops.
///
/// Every mutation assigns a fresh process-wide revision id. Clones keep the
/// revision of their source until they are edited, so the id identifies a
/// graph's content for caching.
#[derive(Debug, Clone)]
pub struct Graph {
    revision: u64,
    graph: MarkedStableGraph,
    /// Map from node name → NodeIndex for O(1) lookup.
    node_index: FxHashMap<String, NodeIndex>,
}

impl Graph {
    pub fn new() -> Self {
        Self {
            revision: next_revision(),
            graph: StableGraph::default(),
            node_index: FxHashMap::default(),
        }
    }

    pub fn with_nodes(nodes: impl IntoIterator<Item = Node>) -> Self {
        let mut g = Self::new();
        for node in nodes {
            g.add_node(node);
        }
        g
    }

    /// A graph over the same nodes, in the same index order, with no edges.
    pub fn with_same_nodes(&self) -> Self {
        Self::with_nodes(self.nodes())
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    fn touch(&mut self) {
        self.revision = next_revision();
    }

    // ---- Nodes ----

    /// Add a node. Returns false if a node with that name already exists.
    pub fn add_node(&mut self, node: Node) -> bool {
        if self.node_index.contains_key(node.name()) {
            return false;
        }
        let name = node.name().to_string();
        let idx = self.graph.add_node(node);
        self.node_index.insert(name, idx);
        self.touch();
        true
    }

    pub fn contains_node(&self, node: &Node) -> bool {
        self.node_index.contains_key(node.name())
    }

    /// Look up the graph's own handle for a node name.
    pub fn node(&self, name: &str) -> Option<&Node> {
        self.node_index.get(name).map(|&ix| &self.graph[ix])
    }

    /// Nodes in insertion order.
    pub fn nodes(&self) -> Vec<Node> {
        self.graph
            .node_indices()
            .map(|ix| self.graph[ix].clone())
            .collect()
    }

    pub fn node_names(&self) -> Vec<String> {
        self.graph
            .node_indices()
            .map(|ix| self.graph[ix].name().to_string())
            .collect()
    }

    pub fn measured_nodes(&self) -> Vec<Node> {
        self.graph
            .node_indices()
            .map(|ix| &self.graph[ix])
            .filter(|n| n.is_measured())
            .cloned()
            .collect()
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    // ---- Edges ----

    /// Add an edge between two existing, distinct, non-adjacent nodes.
    pub fn add_edge(&mut self, edge: Edge) -> Result<(), GraphError> {
        let a = self.require(edge.node1())?;
        let b = self.require(edge.node2())?;
        if a == b {
            return Err(GraphError::SelfLoop {
                name: edge.node1().name().to_string(),
            });
        }
        if self.graph.find_edge(a, b).is_some() {
            return Err(GraphError::DuplicateEdge {
                x: edge.node1().name().to_string(),
                y: edge.node2().name().to_string(),
            });
        }
        self.add_edge_ix(a, b, edge.endpoint1(), edge.endpoint2());
        Ok(())
    }

    pub fn add_directed_edge(&mut self, tail: &Node, head: &Node) -> Result<(), GraphError> {
        self.add_edge(Edge::directed(tail, head))
    }

    pub fn add_bidirected_edge(&mut self, a: &Node, b: &Node) -> Result<(), GraphError> {
        self.add_edge(Edge::bidirected(a, b))
    }

    pub fn add_undirected_edge(&mut self, a: &Node, b: &Node) -> Result<(), GraphError> {
        self.add_edge(Edge::undirected(a, b))
    }

    pub fn add_nondirected_edge(&mut self, a: &Node, b: &Node) -> Result<(), GraphError> {
        self.add_edge(Edge::nondirected(a, b))
    }

    pub fn add_partially_oriented_edge(&mut self, a: &Node, b: &Node) -> Result<(), GraphError> {
        self.add_edge(Edge::partially_oriented(a, b))
    }

    /// Remove the edge between `a` and `b`. Returns false if there was none.
    pub fn remove_edge(&mut self, a: &Node, b: &Node) -> bool {
        match (self.ix(a), self.ix(b)) {
            (Some(a), Some(b)) => self.remove_edge_ix(a, b),
            _ => false,
        }
    }

    /// Set the mark at `to` on the edge between `from` and `to`.
    pub fn set_endpoint(&mut self, from: &Node, to: &Node, endpoint: Endpoint) -> Result<(), GraphError> {
        let a = self.require(from)?;
        let b = self.require(to)?;
        if self.set_mark(a, b, endpoint) {
            Ok(())
        } else {
            Err(GraphError::EdgeNotFound {
                x: from.name().to_string(),
                y: to.name().to_string(),
            })
        }
    }

    /// The edge between `a` and `b`, listed as `a ... b`.
    pub fn edge(&self, a: &Node, b: &Node) -> Option<Edge> {
        let (ai, bi) = (self.ix(a)?, self.ix(b)?);
        let at_a = self.mark(bi, ai)?;
        let at_b = self.mark(ai, bi)?;
        Some(Edge::new(
            self.graph[ai].clone(),
            self.graph[bi].clone(),
            at_a,
            at_b,
        ))
    }

    /// All edges, each listed with its lower-indexed node first.
    pub fn edges(&self) -> Vec<Edge> {
        self.edge_pairs()
            .into_iter()
            .filter_map(|(a, b)| {
                let at_a = self.mark(b, a)?;
                let at_b = self.mark(a, b)?;
                Some(Edge::new(
                    self.graph[a].clone(),
                    self.graph[b].clone(),
                    at_a,
                    at_b,
                ))
            })
            .collect()
    }

    /// Mark at `b` on the edge between `a` and `b`.
    pub fn endpoint(&self, a: &Node, b: &Node) -> Option<Endpoint> {
        self.mark(self.ix(a)?, self.ix(b)?)
    }

    pub fn is_adjacent(&self, a: &Node, b: &Node) -> bool {
        match (self.ix(a), self.ix(b)) {
            (Some(a), Some(b)) => self.adjacent_ix(a, b),
            _ => false,
        }
    }

    pub fn adjacent_nodes(&self, node: &Node) -> Vec<Node> {
        self.map_neighbors(node, |_, _| true)
    }

    /// Nodes `p` with `p --> node`.
    pub fn parents(&self, node: &Node) -> Vec<Node> {
        self.map_neighbors(node, |g, (n, p)| g.is_directed_ix(p, n))
    }

    /// Nodes `c` with `node --> c`.
    pub fn children(&self, node: &Node) -> Vec<Node> {
        self.map_neighbors(node, |g, (n, c)| g.is_directed_ix(n, c))
    }

    /// Nodes `m` adjacent to `node` whose edge carries `endpoint` at `node`.
    pub fn nodes_into(&self, node: &Node, endpoint: Endpoint) -> Vec<Node> {
        self.map_neighbors(node, |g, (n, m)| g.mark(m, n) == Some(endpoint))
    }

    /// `a --> b`
    pub fn is_parent_of(&self, a: &Node, b: &Node) -> bool {
        match (self.ix(a), self.ix(b)) {
            (Some(a), Some(b)) => self.is_directed_ix(a, b),
            _ => false,
        }
    }

    pub fn is_child_of(&self, a: &Node, b: &Node) -> bool {
        self.is_parent_of(b, a)
    }

    /// `a *-> b <-* c`
    pub fn is_def_collider(&self, a: &Node, b: &Node, c: &Node) -> bool {
        match (self.ix(a), self.ix(b), self.ix(c)) {
            (Some(a), Some(b), Some(c)) => self.is_collider_ix(a, b, c),
            _ => false,
        }
    }

    /// `a *-* b *-* c` with a tail at `b` on at least one of the two edges.
    pub fn is_def_noncollider(&self, a: &Node, b: &Node, c: &Node) -> bool {
        match (self.ix(a), self.ix(b), self.ix(c)) {
            (Some(a), Some(b), Some(c)) => {
                let (ab, cb) = (self.mark(a, b), self.mark(c, b));
                ab.is_some()
                    && cb.is_some()
                    && (ab == Some(Endpoint::Tail) || cb == Some(Endpoint::Tail))
            }
            _ => false,
        }
    }

    /// `a *-> b <-* c` with `a` and `c` non-adjacent.
    pub fn is_unshielded_collider(&self, a: &Node, b: &Node, c: &Node) -> bool {
        self.is_def_collider(a, b, c) && a != c && !self.is_adjacent(a, c)
    }

    /// True when any edge has an undirected `---` shape.
    pub fn has_undirected_edge(&self) -> bool {
        self.edge_pairs()
            .into_iter()
            .any(|(a, b)| self.is_undirected_ix(a, b))
    }

    /// Human-readable description of the first way `self` and `other` differ.
    pub fn first_difference(&self, other: &Graph) -> Option<String> {
        for node in self.nodes() {
            if !other.contains_node(&node) {
                return Some(format!("node {node} missing from the other graph"));
            }
        }
        for node in other.nodes() {
            if !self.contains_node(&node) {
                return Some(format!("extra node {node} in the other graph"));
            }
        }
        for edge in self.edges() {
            match other.edge(edge.node1(), edge.node2()) {
                None => return Some(format!("edge {edge} missing from the other graph")),
                Some(o) if o != edge => return Some(format!("edge {edge} appears as {o}")),
                Some(_) => {}
            }
        }
        for edge in other.edges() {
            if !self.is_adjacent(edge.node1(), edge.node2()) {
                return Some(format!("extra edge {edge} in the other graph"));
            }
        }
        None
    }

    fn require(&self, node: &Node) -> Result<NodeIndex, GraphError> {
        self.ix(node).ok_or_else(|| GraphError::NodeNotFound {
            name: node.name().to_string(),
        })
    }

    fn map_neighbors(
        &self,
        node: &Node,
        keep: impl Fn(&Self, (NodeIndex, NodeIndex)) -> bool,
    ) -> Vec<Node> {
        let Some(n) = self.ix(node) else {
            return Vec::new();
        };
        self.neighbors_ix(n)
            .into_iter()
            .filter(|&m| keep(self, (n, m)))
            .map(|m| self.graph[m].clone())
            .collect()
    }

    // ---- Index-level access for the algorithms in this crate ----

    pub(crate) fn ix(&self, node: &Node) -> Option<NodeIndex> {
        self.node_index.get(node.name()).copied()
    }

    pub(crate) fn node_at(&self, ix: NodeIndex) -> &Node {
        &self.graph[ix]
    }

    pub(crate) fn node_ixs(&self) -> Vec<NodeIndex> {
        self.graph.node_indices().collect()
    }

    fn find(&self, a: NodeIndex, b: NodeIndex) -> Option<EdgeIndex> {
        self.graph.find_edge(a, b)
    }

    /// Mark at `b` on the edge between `a` and `b`.
    pub(crate) fn mark(&self, a: NodeIndex, b: NodeIndex) -> Option<Endpoint> {
        let e = self.find(a, b)?;
        let (source, _) = self.graph.edge_endpoints(e)?;
        let marks = self.graph[e];
        Some(if source == b {
            marks.at_source
        } else {
            marks.at_target
        })
    }

    /// Set the mark at `b` on the edge between `a` and `b`.
    pub(crate) fn set_mark(&mut self, a: NodeIndex, b: NodeIndex, endpoint: Endpoint) -> bool {
        let Some(e) = self.find(a, b) else {
            return false;
        };
        let Some((source, _)) = self.graph.edge_endpoints(e) else {
            return false;
        };
        let marks = &mut self.graph[e];
        if source == b {
            marks.at_source = endpoint;
        } else {
            marks.at_target = endpoint;
        }
        self.touch();
        true
    }

    /// Replace both marks: `mark_at_a` at `a`, `mark_at_b` at `b`.
    pub(crate) fn set_marks(
        &mut self,
        a: NodeIndex,
        b: NodeIndex,
        mark_at_a: Endpoint,
        mark_at_b: Endpoint,
    ) -> bool {
        self.set_mark(b, a, mark_at_a) && self.set_mark(a, b, mark_at_b)
    }

    pub(crate) fn add_edge_ix(
        &mut self,
        a: NodeIndex,
        b: NodeIndex,
        mark_at_a: Endpoint,
        mark_at_b: Endpoint,
    ) {
        self.graph.add_edge(
            a,
            b,
            EdgeMarks {
                at_source: mark_at_a,
                at_target: mark_at_b,
            },
        );
        self.touch();
    }

    pub(crate) fn remove_edge_ix(&mut self, a: NodeIndex, b: NodeIndex) -> bool {
        match self.find(a, b) {
            Some(e) => {
                self.graph.remove_edge(e);
                self.touch();
                true
            }
            None => false,
        }
    }

    pub(crate) fn adjacent_ix(&self, a: NodeIndex, b: NodeIndex) -> bool {
        self.find(a, b).is_some()
    }

    /// Neighbors in index order.
    pub(crate) fn neighbors_ix(&self, a: NodeIndex) -> Vec<NodeIndex> {
        let mut out: Vec<NodeIndex> = self.graph.neighbors(a).collect();
        out.sort_unstable();
        out.dedup();
        out
    }

    /// Every adjacent pair once, lower index first, sorted.
    pub(crate) fn edge_pairs(&self) -> Vec<(NodeIndex, NodeIndex)> {
        let mut out: Vec<(NodeIndex, NodeIndex)> = self
            .graph
            .edge_indices()
            .filter_map(|e| self.graph.edge_endpoints(e))
            .map(|(s, t)| if s <= t { (s, t) } else { (t, s) })
            .collect();
        out.sort_unstable();
        out
    }

    /// `a --> b`
    pub(crate) fn is_directed_ix(&self, a: NodeIndex, b: NodeIndex) -> bool {
        self.mark(b, a) == Some(Endpoint::Tail) && self.mark(a, b) == Some(Endpoint::Arrow)
    }

    pub(crate) fn is_bidirected_ix(&self, a: NodeIndex, b: NodeIndex) -> bool {
        self.mark(b, a) == Some(Endpoint::Arrow) && self.mark(a, b) == Some(Endpoint::Arrow)
    }

    pub(crate) fn is_undirected_ix(&self, a: NodeIndex, b: NodeIndex) -> bool {
        self.mark(b, a) == Some(Endpoint::Tail) && self.mark(a, b) == Some(Endpoint::Tail)
    }

    pub(crate) fn is_collider_ix(&self, a: NodeIndex, b: NodeIndex, c: NodeIndex) -> bool {
        self.mark(a, b) == Some(Endpoint::Arrow) && self.mark(c, b) == Some(Endpoint::Arrow)
    }

    pub(crate) fn parents_ix(&self, n: NodeIndex) -> Vec<NodeIndex> {
        self.neighbors_ix(n)
            .into_iter()
            .filter(|&p| self.is_directed_ix(p, n))
            .collect()
    }

    pub(crate) fn children_ix(&self, n: NodeIndex) -> Vec<NodeIndex> {
        self.neighbors_ix(n)
            .into_iter()
            .filter(|&c| self.is_directed_ix(n, c))
            .collect()
    }

    pub(crate) fn names_of(&self, ixs: impl IntoIterator<Item = NodeIndex>) -> Vec<String> {
        ixs.into_iter()
            .map(|ix| self.graph[ix].name().to_string())
            .collect()
    }
}

impl Default for Graph {
    fn default() -> Self {
        Self::new()
    }
}

/// Structural equality by node names and edge shapes. Revisions are ignored.
impl PartialEq for Graph {
    fn eq(&self, other: &Self) -> bool {
        if self.node_count() != other.node_count() || self.edge_count() != other.edge_count() {
            return false;
        }
        let names: FxHashSet<&str> = self.node_index.keys().map(String::as_str).collect();
        if other.node_index.keys().any(|k| !names.contains(k.as_str())) {
            return false;
        }
        let edges: FxHashSet<Edge> = self.edges().into_iter().collect();
        other.edges().iter().all(|e| edges.contains(e))
    }
}

impl std::fmt::Display for Graph {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Graph Nodes:")?;
        writeln!(f, "{}", self.node_names().join(";"))?;
        writeln!(f)?;
        writeln!(f, "Graph Edges:")?;
        for (i, edge) in self.edges().iter().enumerate() {
            writeln!(f, "{}. {}", i + 1, edge)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn xyz() -> (Graph, Node, Node, Node) {
        let (x, y, z) = (Node::measured("X"), Node::measured("Y"), Node::measured("Z"));
        let g = Graph::with_nodes([x.clone(), y.clone(), z.clone()]);
        (g, x, y, z)
    }

    #[test]
    fn rejects_self_loops_duplicates_and_unknown_nodes() {
        let (mut g, x, y, _) = xyz();
        assert!(matches!(
            g.add_directed_edge(&x, &x),
            Err(GraphError::SelfLoop { .. })
        ));
        g.add_directed_edge(&x, &y).unwrap();
        assert!(matches!(
            g.add_bidirected_edge(&y, &x),
            Err(GraphError::DuplicateEdge { .. })
        ));
        assert!(matches!(
            g.add_directed_edge(&x, &Node::measured("W")),
            Err(GraphError::NodeNotFound { .. })
        ));
    }

    #[test]
    fn marks_are_read_at_the_named_end() {
        let (mut g, x, y, _) = xyz();
        g.add_directed_edge(&y, &x).unwrap();
        assert_eq!(g.endpoint(&y, &x), Some(Endpoint::Arrow));
        assert_eq!(g.endpoint(&x, &y), Some(Endpoint::Tail));
        assert_eq!(g.parents(&x), vec![y.clone()]);
        assert_eq!(g.children(&y), vec![x.clone()]);

        g.set_endpoint(&x, &y, Endpoint::Arrow).unwrap();
        assert_eq!(g.edge(&x, &y).unwrap().to_string(), "X <-> Y");
    }

    #[test]
    fn revision_changes_on_mutation_and_survives_clone() {
        let (mut g, x, y, _) = xyz();
        let before = g.revision();
        g.add_undirected_edge(&x, &y).unwrap();
        assert_ne!(g.revision(), before);
        let copy = g.clone();
        assert_eq!(copy.revision(), g.revision());
        assert_eq!(copy, g);
    }

    #[test]
    fn unknown_nodes_answer_empty() {
        let (g, x, _, _) = xyz();
        let w = Node::measured("W");
        assert!(g.adjacent_nodes(&w).is_empty());
        assert!(!g.is_adjacent(&x, &w));
        assert_eq!(g.endpoint(&x, &w), None);
    }
}
