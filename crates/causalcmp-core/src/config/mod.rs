//! Configuration system.
//! TOML-based, layered resolution: CLI > env > project > user > defaults.

pub mod causalcmp_config;
pub mod comparison_config;
pub mod markup_config;
pub mod transform_config;

pub use causalcmp_config::{CausalCmpConfig, CliOverrides};
pub use comparison_config::ComparisonConfig;
pub use markup_config::MarkupConfig;
pub use transform_config::TransformConfig;
