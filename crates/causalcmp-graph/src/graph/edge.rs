//! Edges with a typed mark at each end.

use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

use super::{Endpoint, Node};

/// Edge shape as determined by its two marks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EdgeKind {
    /// `-->`
    Directed,
    /// `<->`
    Bidirected,
    /// `---`
    Undirected,
    /// `o-o`
    Nondirected,
    /// `o->`
    PartiallyOriented,
    /// `o--` or anything with a null mark.
    Other,
}

/// An edge between two distinct nodes. `endpoint1` is the mark at `node1`,
/// `endpoint2` the mark at `node2`. Equality ignores which node is listed
/// first, so `X --> Y` equals `Y <-- X`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Edge {
    node1: Node,
    node2: Node,
    endpoint1: Endpoint,
    endpoint2: Endpoint,
}

impl Edge {
    pub fn new(node1: Node, node2: Node, endpoint1: Endpoint, endpoint2: Endpoint) -> Self {
        Self {
            node1,
            node2,
            endpoint1,
            endpoint2,
        }
    }

    /// `tail --> head`
    pub fn directed(tail: &Node, head: &Node) -> Self {
        Self::new(tail.clone(), head.clone(), Endpoint::Tail, Endpoint::Arrow)
    }

    pub fn bidirected(a: &Node, b: &Node) -> Self {
        Self::new(a.clone(), b.clone(), Endpoint::Arrow, Endpoint::Arrow)
    }

    pub fn undirected(a: &Node, b: &Node) -> Self {
        Self::new(a.clone(), b.clone(), Endpoint::Tail, Endpoint::Tail)
    }

    pub fn nondirected(a: &Node, b: &Node) -> Self {
        Self::new(a.clone(), b.clone(), Endpoint::Circle, Endpoint::Circle)
    }

    /// `a o-> b`
    pub fn partially_oriented(a: &Node, b: &Node) -> Self {
        Self::new(a.clone(), b.clone(), Endpoint::Circle, Endpoint::Arrow)
    }

    pub fn node1(&self) -> &Node {
        &self.node1
    }

    pub fn node2(&self) -> &Node {
        &self.node2
    }

    pub fn endpoint1(&self) -> Endpoint {
        self.endpoint1
    }

    pub fn endpoint2(&self) -> Endpoint {
        self.endpoint2
    }

    pub fn contains(&self, node: &Node) -> bool {
        &self.node1 == node || &self.node2 == node
    }

    /// Mark at `node`, if `node` is one of the endpoints.
    pub fn endpoint_at(&self, node: &Node) -> Option<Endpoint> {
        if &self.node1 == node {
            Some(self.endpoint1)
        } else if &self.node2 == node {
            Some(self.endpoint2)
        } else {
            None
        }
    }

    /// The node at the other end from `node`.
    pub fn other(&self, node: &Node) -> Option<&Node> {
        if &self.node1 == node {
            Some(&self.node2)
        } else if &self.node2 == node {
            Some(&self.node1)
        } else {
            None
        }
    }

    pub fn kind(&self) -> EdgeKind {
        use Endpoint::*;
        match (self.endpoint1, self.endpoint2) {
            (Tail, Arrow) | (Arrow, Tail) => EdgeKind::Directed,
            (Arrow, Arrow) => EdgeKind::Bidirected,
            (Tail, Tail) => EdgeKind::Undirected,
            (Circle, Circle) => EdgeKind::Nondirected,
            (Circle, Arrow) | (Arrow, Circle) => EdgeKind::PartiallyOriented,
            _ => EdgeKind::Other,
        }
    }

    pub fn is_directed(&self) -> bool {
        self.kind() == EdgeKind::Directed
    }

    /// `(tail, head)` for a directed edge.
    pub fn tail_and_head(&self) -> Option<(&Node, &Node)> {
        match (self.endpoint1, self.endpoint2) {
            (Endpoint::Tail, Endpoint::Arrow) => Some((&self.node1, &self.node2)),
            (Endpoint::Arrow, Endpoint::Tail) => Some((&self.node2, &self.node1)),
            _ => None,
        }
    }

    /// Same edge with the nodes listed in the opposite order.
    pub fn reversed_listing(&self) -> Self {
        Self::new(
            self.node2.clone(),
            self.node1.clone(),
            self.endpoint2,
            self.endpoint1,
        )
    }

    /// Connector text such as `-->` or `o-o`, read from node1 to node2.
    pub fn connector(&self) -> String {
        let mut s = String::with_capacity(3);
        s.push(self.endpoint1.left_symbol());
        s.push('-');
        s.push(self.endpoint2.right_symbol());
        s
    }
}

impl PartialEq for Edge {
    fn eq(&self, other: &Self) -> bool {
        let same = self.node1 == other.node1
            && self.node2 == other.node2
            && self.endpoint1 == other.endpoint1
            && self.endpoint2 == other.endpoint2;
        let swapped = self.node1 == other.node2
            && self.node2 == other.node1
            && self.endpoint1 == other.endpoint2
            && self.endpoint2 == other.endpoint1;
        same || swapped
    }
}

impl Eq for Edge {}

impl Hash for Edge {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let a = (self.node1.name(), self.endpoint1);
        let b = (self.node2.name(), self.endpoint2);
        if a <= b {
            a.hash(state);
            b.hash(state);
        } else {
            b.hash(state);
            a.hash(state);
        }
    }
}

impl std::fmt::Display for Edge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} {}", self.node1, self.connector(), self.node2)
    }
}
