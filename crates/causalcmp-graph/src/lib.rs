//! # causalcmp-graph
//!
//! The graph query engine behind every comparison statistic.
//! Typed-endpoint graphs (`petgraph` underneath), reachability and path
//! queries, DAG/MAG/PAG/CPDAG transforms, legality checks, and cached edge
//! markup.

pub mod graph;
pub mod legality;
pub mod markup;
pub mod paths;
pub mod transform;

pub use graph::{parse_graph, parse_graph_with_nodes, Edge, EdgeKind, Endpoint, Graph, Node, NodeType};
pub use legality::Legality;
pub use markup::{EdgeMarkup, EdgeProperty, MarkupCache, MarkupKind};
pub use transform::Knowledge;
