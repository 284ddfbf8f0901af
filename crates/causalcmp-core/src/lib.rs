//! # causalcmp-core
//!
//! Foundation crate for the causal graph comparison engine.
//! Errors, configuration, the parameter bag, tracing setup, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod params;
pub mod tracing;
pub mod types;

pub use config::CausalCmpConfig;
pub use errors::{CompareError, ConfigError, GraphError, StatError, TransformError};
pub use params::{ParamValue, Parameters};
