//! Comparison configuration.

use serde::{Deserialize, Serialize};

use crate::constants;

/// Settings consumed by statistics.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct ComparisonConfig {
    /// Significance level for data-dependent statistics. Default: 0.05.
    pub alpha: Option<f64>,
    /// Trek length bound (edges) for latent-confounder statistics. Default: 8.
    pub max_trek_length: Option<usize>,
    /// Statistics to evaluate; empty means every registered statistic.
    #[serde(default)]
    pub statistics: Vec<String>,
}

impl ComparisonConfig {
    pub fn effective_alpha(&self) -> f64 {
        self.alpha.unwrap_or(constants::DEFAULT_ALPHA)
    }

    pub fn effective_max_trek_length(&self) -> usize {
        self.max_trek_length
            .unwrap_or(constants::DEFAULT_MAX_TREK_LENGTH)
    }
}
