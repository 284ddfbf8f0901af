//! Error handling for the comparison engine.
//! One error enum per subsystem, `thiserror` only.

pub mod compare_error;
pub mod config_error;
pub mod error_code;
pub mod graph_error;
pub mod stat_error;
pub mod transform_error;

pub use compare_error::CompareError;
pub use config_error::ConfigError;
pub use error_code::CausalCmpErrorCode;
pub use graph_error::GraphError;
pub use stat_error::StatError;
pub use transform_error::TransformError;
