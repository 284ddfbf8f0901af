//! Graph construction errors.

use super::error_code::{self, CausalCmpErrorCode};

/// Errors raised while building or editing a graph.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GraphError {
    #[error("Node not found in graph: {name}")]
    NodeNotFound { name: String },

    #[error("Self-loop on {name} is not allowed")]
    SelfLoop { name: String },

    #[error("Nodes {x} and {y} are already adjacent")]
    DuplicateEdge { x: String, y: String },

    #[error("No edge between {x} and {y}")]
    EdgeNotFound { x: String, y: String },

    #[error("Could not parse graph text '{input}': {message}")]
    Parse { input: String, message: String },
}

impl CausalCmpErrorCode for GraphError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::NodeNotFound { .. } => error_code::NODE_NOT_FOUND,
            Self::Parse { .. } => error_code::PARSE_ERROR,
            _ => error_code::GRAPH_ERROR,
        }
    }
}
