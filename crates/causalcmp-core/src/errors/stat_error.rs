//! Statistic evaluation errors.
//!
//! Undefined ratios are not errors: they evaluate to NaN.

use super::error_code::{self, CausalCmpErrorCode};
use super::{CompareError, TransformError};

/// Errors raised at the statistic boundary.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum StatError {
    #[error("Unknown statistic: {abbreviation}")]
    UnknownStatistic { abbreviation: String },

    #[error("Statistic {statistic} requires {expected} data, got {found}")]
    DataTypeMismatch {
        statistic: String,
        expected: &'static str,
        found: &'static str,
    },

    #[error("Statistic {statistic} requires a data model")]
    MissingData { statistic: String },

    #[error("Compare error: {0}")]
    Compare(#[from] CompareError),

    #[error("Transform error: {0}")]
    Transform(#[from] TransformError),
}

impl CausalCmpErrorCode for StatError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::UnknownStatistic { .. } => error_code::UNKNOWN_STATISTIC,
            Self::DataTypeMismatch { .. } => error_code::DATA_TYPE_MISMATCH,
            Self::MissingData { .. } => error_code::MISSING_DATA,
            Self::Compare(e) => e.error_code(),
            Self::Transform(e) => e.error_code(),
        }
    }
}
