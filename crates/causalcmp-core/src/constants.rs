//! Shared constants for the comparison engine.

/// Crate version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default significance level handed to data-dependent statistics.
pub const DEFAULT_ALPHA: f64 = 0.05;

/// Default bound (in edges) on trek enumeration.
pub const DEFAULT_MAX_TREK_LENGTH: usize = 8;

/// Default number of graphs whose edge markup is kept in the markup cache.
pub const DEFAULT_MARKUP_CACHE_CAPACITY: u64 = 512;

/// Default for applying Zhang's complete rule set (R5–R10) in PAG orientation.
pub const DEFAULT_COMPLETE_RULE_SET: bool = true;

/// Scale used by `tanh` normalization of count statistics.
pub const DEFAULT_TANH_SCALE: f64 = 10.0;

/// Project config file name.
pub const PROJECT_CONFIG_FILE: &str = "causalcmp.toml";

/// Env var holding the tracing filter.
pub const LOG_ENV_VAR: &str = "CAUSALCMP_LOG";

// ---- Parameter keys ----

/// Significance level.
pub const PARAM_ALPHA: &str = "alpha";

/// Maximum trek length in edges.
pub const PARAM_MAX_TREK_LENGTH: &str = "max_trek_length";

/// Whether PAG orientation uses the complete rule set.
pub const PARAM_COMPLETE_RULE_SET: &str = "complete_rule_set";

/// Optional bound on discriminating path length (0 = unbounded).
pub const PARAM_MAX_DISCRIMINATING_PATH_LENGTH: &str = "max_discriminating_path_length";
