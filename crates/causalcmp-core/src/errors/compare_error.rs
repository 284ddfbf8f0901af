//! Graph comparison errors.

use super::error_code::{self, CausalCmpErrorCode};
use super::{GraphError, TransformError};

/// Errors raised while preparing two graphs for comparison.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CompareError {
    #[error("Graph comparison precondition violated: node {name} has no counterpart in the target node set")]
    PreconditionViolated { name: String },

    #[error("Graph error: {0}")]
    Graph(#[from] GraphError),

    #[error("Transform error: {0}")]
    Transform(#[from] TransformError),
}

impl CausalCmpErrorCode for CompareError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::PreconditionViolated { .. } => error_code::PRECONDITION_VIOLATED,
            Self::Graph(e) => e.error_code(),
            Self::Transform(e) => e.error_code(),
        }
    }
}
