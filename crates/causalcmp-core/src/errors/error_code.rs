//! Structured error codes shared by every error enum.

/// Trait giving every error a stable code string.
/// Hosts that surface errors across a language boundary key on the code,
/// not on the human-readable message.
pub trait CausalCmpErrorCode {
    /// Returns the error code string (e.g., "GRAPH_ERROR").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted error string: `[ERROR_CODE] message`.
    fn coded_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const GRAPH_ERROR: &str = "GRAPH_ERROR";
pub const NODE_NOT_FOUND: &str = "NODE_NOT_FOUND";
pub const PARSE_ERROR: &str = "PARSE_ERROR";
pub const NOT_ACYCLIC: &str = "NOT_ACYCLIC";
pub const MALFORMED_INPUT: &str = "MALFORMED_INPUT";
pub const NO_CONSISTENT_EXTENSION: &str = "NO_CONSISTENT_EXTENSION";
pub const KNOWLEDGE_VIOLATION: &str = "KNOWLEDGE_VIOLATION";
pub const PRECONDITION_VIOLATED: &str = "PRECONDITION_VIOLATED";
pub const UNKNOWN_STATISTIC: &str = "UNKNOWN_STATISTIC";
pub const DATA_TYPE_MISMATCH: &str = "DATA_TYPE_MISMATCH";
pub const MISSING_DATA: &str = "MISSING_DATA";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
