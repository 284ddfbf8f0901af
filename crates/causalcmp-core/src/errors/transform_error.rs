//! Graph transform errors.

use super::error_code::{self, CausalCmpErrorCode};
use super::GraphError;

/// Errors raised by graph transforms (DAG→PAG, PAG→MAG, DAG→CPDAG, ...).
/// Transforms never return a degenerate graph in place of one of these.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TransformError {
    #[error("{transform} requires an acyclic graph; directed cycle through {cycle:?}")]
    NotAcyclic {
        transform: &'static str,
        cycle: Vec<String>,
    },

    #[error("{transform} rejected its input: {reason}")]
    MalformedInput {
        transform: &'static str,
        reason: String,
    },

    #[error("No consistent extension exists: {reason}")]
    NoConsistentExtension { reason: String },

    #[error("Background knowledge violated by edge {edge}")]
    KnowledgeViolation { edge: String },

    #[error("Graph error: {0}")]
    Graph(#[from] GraphError),
}

impl CausalCmpErrorCode for TransformError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::NotAcyclic { .. } => error_code::NOT_ACYCLIC,
            Self::MalformedInput { .. } => error_code::MALFORMED_INPUT,
            Self::NoConsistentExtension { .. } => error_code::NO_CONSISTENT_EXTENSION,
            Self::KnowledgeViolation { .. } => error_code::KNOWLEDGE_VIOLATION,
            Self::Graph(e) => e.error_code(),
        }
    }
}
