//! Graph nodes.
//!
//! A `Node` is a cheap shared handle. Equality, ordering, and hashing go by
//! name, so nodes from two graphs match when their names match;
//! `Node::ptr_eq` checks whether two handles are literally the same node.

use std::hash::{Hash, Hasher};
use std::sync::Arc;

use serde::{Deserialize, Serialize};

/// What a variable represents in the causal model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeType {
    Measured,
    Latent,
    Selection,
}

impl NodeType {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Measured => "measured",
            Self::Latent => "latent",
            Self::Selection => "selection",
        }
    }
}

#[derive(Debug)]
struct NodeInner {
    name: String,
    node_type: NodeType,
}

#[derive(Clone, Serialize, Deserialize)]
#[serde(from = "NodeRecord", into = "NodeRecord")]
pub struct Node(Arc<NodeInner>);

impl Node {
    pub fn new(name: impl Into<String>, node_type: NodeType) -> Self {
        Self(Arc::new(NodeInner {
            name: name.into(),
            node_type,
        }))
    }

    pub fn measured(name: impl Into<String>) -> Self {
        Self::new(name, NodeType::Measured)
    }

    pub fn latent(name: impl Into<String>) -> Self {
        Self::new(name, NodeType::Latent)
    }

    pub fn selection(name: impl Into<String>) -> Self {
        Self::new(name, NodeType::Selection)
    }

    pub fn name(&self) -> &str {
        &self.0.name
    }

    pub fn node_type(&self) -> NodeType {
        self.0.node_type
    }

    pub fn is_measured(&self) -> bool {
        self.0.node_type == NodeType::Measured
    }

    pub fn is_latent(&self) -> bool {
        self.0.node_type == NodeType::Latent
    }

    pub fn is_selection(&self) -> bool {
        self.0.node_type == NodeType::Selection
    }

    /// True when both handles point at the same node object.
    pub fn ptr_eq(&self, other: &Node) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        self.0.name == other.0.name
    }
}

impl Eq for Node {}

impl Hash for Node {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.name.hash(state);
    }
}

impl PartialOrd for Node {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Node {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.0.name.cmp(&other.0.name)
    }
}

impl std::fmt::Debug for Node {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.name)
    }
}

impl std::fmt::Display for Node {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0.name)
    }
}

#[derive(Serialize, Deserialize)]
struct NodeRecord {
    name: String,
    node_type: NodeType,
}

impl From<NodeRecord> for Node {
    fn from(record: NodeRecord) -> Self {
        Node::new(record.name, record.node_type)
    }
}

impl From<Node> for NodeRecord {
    fn from(node: Node) -> Self {
        NodeRecord {
            name: node.name().to_string(),
            node_type: node.node_type(),
        }
    }
}
