//! Transform configuration.

use serde::{Deserialize, Serialize};

use crate::constants;

/// Settings for the DAG→PAG / MAG→PAG orientation passes.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct TransformConfig {
    /// Apply Zhang's complete rule set (R5–R10). Default: true.
    pub complete_rule_set: Option<bool>,
    /// Bound on discriminating path length in nodes. Default: unbounded.
    pub max_discriminating_path_length: Option<usize>,
}

impl TransformConfig {
    pub fn effective_complete_rule_set(&self) -> bool {
        self.complete_rule_set
            .unwrap_or(constants::DEFAULT_COMPLETE_RULE_SET)
    }
}
