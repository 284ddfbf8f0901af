//! Top-level configuration with layered resolution.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::{ComparisonConfig, MarkupConfig, TransformConfig};
use crate::constants;
use crate::errors::ConfigError;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. CLI flags (applied via `apply_cli_overrides`)
/// 2. Environment variables (`CAUSALCMP_*`)
/// 3. Project config (`causalcmp.toml` in project root)
/// 4. User config (`~/.causalcmp/config.toml`)
/// 5. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct CausalCmpConfig {
    pub comparison: ComparisonConfig,
    pub transform: TransformConfig,
    pub markup: MarkupConfig,
}

/// CLI override arguments that can be applied to a config.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub alpha: Option<f64>,
    pub max_trek_length: Option<usize>,
    pub complete_rule_set: Option<bool>,
}

impl CausalCmpConfig {
    /// Load configuration with layered resolution rooted at `root`.
    pub fn load(root: &Path, cli_overrides: Option<&CliOverrides>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(user_config_path) = Self::user_config_path() {
            if user_config_path.exists() {
                match Self::merge_toml_file(&mut config, &user_config_path) {
                    Ok(()) => {}
                    Err(e @ ConfigError::ParseError { .. }) => return Err(e),
                    Err(e) => {
                        tracing::warn!(error = %e, "ignoring unreadable user config");
                    }
                }
            }
        }

        let project_config_path = root.join(constants::PROJECT_CONFIG_FILE);
        if project_config_path.exists() {
            Self::merge_toml_file(&mut config, &project_config_path)?;
        }

        Self::apply_env_overrides(&mut config);

        if let Some(cli) = cli_overrides {
            Self::apply_cli_overrides(&mut config, cli);
        }

        Self::validate(&config)?;
        tracing::debug!(?config, "configuration resolved");
        Ok(config)
    }

    /// Load configuration from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })?;
        Self::validate(&config)?;
        Ok(config)
    }

    /// Validate the configuration values.
    pub fn validate(config: &CausalCmpConfig) -> Result<(), ConfigError> {
        if let Some(alpha) = config.comparison.alpha {
            if !(alpha > 0.0 && alpha < 1.0) {
                return Err(ConfigError::ValidationFailed {
                    field: "comparison.alpha".to_string(),
                    message: "must be strictly between 0.0 and 1.0".to_string(),
                });
            }
        }
        if config.comparison.max_trek_length == Some(0) {
            return Err(ConfigError::ValidationFailed {
                field: "comparison.max_trek_length".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        if config.markup.cache_capacity == Some(0) {
            return Err(ConfigError::ValidationFailed {
                field: "markup.cache_capacity".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        Ok(())
    }

    fn user_config_path() -> Option<PathBuf> {
        home_dir().map(|h| h.join(".causalcmp").join("config.toml"))
    }

    /// Merge a TOML file into the existing config.
    /// Unknown keys are ignored.
    fn merge_toml_file(config: &mut CausalCmpConfig, path: &Path) -> Result<(), ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;

        let file_config: CausalCmpConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        Self::merge(config, &file_config);
        Ok(())
    }

    /// Merge `other` into `base`; `other` wins wherever it has a value.
    fn merge(base: &mut CausalCmpConfig, other: &CausalCmpConfig) {
        if other.comparison.alpha.is_some() {
            base.comparison.alpha = other.comparison.alpha;
        }
        if other.comparison.max_trek_length.is_some() {
            base.comparison.max_trek_length = other.comparison.max_trek_length;
        }
        if !other.comparison.statistics.is_empty() {
            base.comparison.statistics = other.comparison.statistics.clone();
        }

        if other.transform.complete_rule_set.is_some() {
            base.transform.complete_rule_set = other.transform.complete_rule_set;
        }
        if other.transform.max_discriminating_path_length.is_some() {
            base.transform.max_discriminating_path_length =
                other.transform.max_discriminating_path_length;
        }

        if other.markup.cache_capacity.is_some() {
            base.markup.cache_capacity = other.markup.cache_capacity;
        }
    }

    /// Pattern: `CAUSALCMP_ALPHA`, `CAUSALCMP_MAX_TREK_LENGTH`, etc.
    /// Unparseable values are skipped.
    fn apply_env_overrides(config: &mut CausalCmpConfig) {
        if let Ok(val) = std::env::var("CAUSALCMP_ALPHA") {
            if let Ok(v) = val.parse::<f64>() {
                config.comparison.alpha = Some(v);
            }
        }
        if let Ok(val) = std::env::var("CAUSALCMP_MAX_TREK_LENGTH") {
            if let Ok(v) = val.parse::<usize>() {
                config.comparison.max_trek_length = Some(v);
            }
        }
        if let Ok(val) = std::env::var("CAUSALCMP_COMPLETE_RULE_SET") {
            if let Ok(v) = val.parse::<bool>() {
                config.transform.complete_rule_set = Some(v);
            }
        }
        if let Ok(val) = std::env::var("CAUSALCMP_MARKUP_CACHE_CAPACITY") {
            if let Ok(v) = val.parse::<u64>() {
                config.markup.cache_capacity = Some(v);
            }
        }
    }

    fn apply_cli_overrides(config: &mut CausalCmpConfig, cli: &CliOverrides) {
        if let Some(v) = cli.alpha {
            config.comparison.alpha = Some(v);
        }
        if let Some(v) = cli.max_trek_length {
            config.comparison.max_trek_length = Some(v);
        }
        if let Some(v) = cli.complete_rule_set {
            config.transform.complete_rule_set = Some(v);
        }
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }
}

fn home_dir() -> Option<PathBuf> {
    std::env::var_os("HOME")
        .or_else(|| std::env::var_os("USERPROFILE"))
        .map(PathBuf::from)
}
