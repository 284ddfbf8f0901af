//! Edge markup cache configuration.

use serde::{Deserialize, Serialize};

use crate::constants;

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct MarkupConfig {
    /// Maximum number of cached markup tables. Default: 512.
    pub cache_capacity: Option<u64>,
}

impl MarkupConfig {
    pub fn effective_cache_capacity(&self) -> u64 {
        self.cache_capacity
            .unwrap_or(constants::DEFAULT_MARKUP_CACHE_CAPACITY)
    }
}
