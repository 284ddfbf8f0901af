//! Graph model: nodes, typed endpoints, edges, and the graph container.

pub mod causal_graph;
pub mod edge;
pub mod endpoint;
pub mod node;
pub mod parse;

pub use causal_graph::Graph;
pub use edge::{Edge, EdgeKind};
pub use endpoint::Endpoint;
pub use node::{Node, NodeType};
pub use parse::{parse_graph, parse_graph_with_nodes};
