//! Abbreviation-keyed statistic registry.

use causalcmp_core::config::ComparisonConfig;
use causalcmp_core::errors::StatError;
use causalcmp_core::types::collections::BTreeMap;
use causalcmp_core::Parameters;
use causalcmp_graph::Graph;

use super::{builtins, StatContext, Statistic};
use crate::data::DataModel;

/// Statistics by abbreviation. Iteration and `evaluate_all` follow
/// abbreviation order.
#[derive(Debug, Clone, Default)]
pub struct StatisticRegistry {
    statistics: BTreeMap<String, Statistic>,
}

impl StatisticRegistry {
    /// An empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry holding every built-in statistic.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        for statistic in builtins::all() {
            registry.register(statistic);
        }
        registry
    }

    /// Add a statistic, returning the one it replaced.
    pub fn register(&mut self, statistic: Statistic) -> Option<Statistic> {
        self.statistics
            .insert(statistic.abbreviation().to_string(), statistic)
    }

    pub fn get(&self, abbreviation: &str) -> Option<&Statistic> {
        self.statistics.get(abbreviation)
    }

    pub fn abbreviations(&self) -> Vec<&str> {
        self.statistics.keys().map(String::as_str).collect()
    }

    pub fn len(&self) -> usize {
        self.statistics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.statistics.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Statistic> {
        self.statistics.values()
    }

    pub fn evaluate(
        &self,
        abbreviation: &str,
        truth: &Graph,
        estimate: &Graph,
        data: Option<&DataModel>,
        params: &Parameters,
    ) -> Result<f64, StatError> {
        let statistic = self.get(abbreviation).ok_or_else(|| {
            tracing::warn!(abbreviation, "unknown statistic requested");
            StatError::UnknownStatistic {
                abbreviation: abbreviation.to_string(),
            }
        })?;
        let ctx = StatContext::new(truth, estimate, params).with_data(data);
        let value = statistic.evaluate(&ctx)?;
        tracing::debug!(statistic = abbreviation, value, "statistic evaluated");
        Ok(value)
    }

    /// Evaluate every registered statistic. One statistic failing does not
    /// stop the others.
    pub fn evaluate_all(
        &self,
        truth: &Graph,
        estimate: &Graph,
        data: Option<&DataModel>,
        params: &Parameters,
    ) -> BTreeMap<String, Result<f64, StatError>> {
        let _span = tracing::debug_span!("evaluate_all", statistics = self.len()).entered();
        self.statistics
            .keys()
            .map(|abbr| {
                let result = self.evaluate(abbr, truth, estimate, data, params);
                (abbr.clone(), result)
            })
            .collect()
    }

    /// Evaluate the statistics named in `config`, or all of them when the
    /// list is empty.
    pub fn evaluate_configured(
        &self,
        config: &ComparisonConfig,
        truth: &Graph,
        estimate: &Graph,
        data: Option<&DataModel>,
        params: &Parameters,
    ) -> BTreeMap<String, Result<f64, StatError>> {
        if config.statistics.is_empty() {
            return self.evaluate_all(truth, estimate, data, params);
        }
        config
            .statistics
            .iter()
            .map(|abbr| {
                let result = self.evaluate(abbr, truth, estimate, data, params);
                (abbr.clone(), result)
            })
            .collect()
    }
}
