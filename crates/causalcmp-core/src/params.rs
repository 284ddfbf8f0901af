//! Key-value parameter bag passed to every statistic.

use serde::{Deserialize, Serialize};

use crate::config::CausalCmpConfig;
use crate::constants;
use crate::types::collections::BTreeMap;

/// A single parameter value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ParamValue {
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
}

/// Parameters keyed by name. Lookups fall back to the supplied default when
/// a key is missing or holds a value of the wrong kind.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Parameters {
    values: BTreeMap<String, ParamValue>,
}

impl Parameters {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a parameter bag from resolved configuration.
    pub fn from_config(config: &CausalCmpConfig) -> Self {
        let mut params = Self::new();
        params.set(constants::PARAM_ALPHA, ParamValue::Float(config.comparison.effective_alpha()));
        params.set(
            constants::PARAM_MAX_TREK_LENGTH,
            ParamValue::Int(config.comparison.effective_max_trek_length() as i64),
        );
        params.set(
            constants::PARAM_COMPLETE_RULE_SET,
            ParamValue::Bool(config.transform.effective_complete_rule_set()),
        );
        if let Some(len) = config.transform.max_discriminating_path_length {
            params.set(
                constants::PARAM_MAX_DISCRIMINATING_PATH_LENGTH,
                ParamValue::Int(len as i64),
            );
        }
        params
    }

    /// Parse a JSON object of parameters.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn set(&mut self, key: &str, value: ParamValue) -> &mut Self {
        self.values.insert(key.to_string(), value);
        self
    }

    pub fn get(&self, key: &str) -> Option<&ParamValue> {
        self.values.get(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    /// Integers are widened to floats.
    pub fn get_f64(&self, key: &str, default: f64) -> f64 {
        match self.values.get(key) {
            Some(ParamValue::Float(v)) => *v,
            Some(ParamValue::Int(v)) => *v as f64,
            _ => default,
        }
    }

    /// Negative integers fall back to the default.
    pub fn get_usize(&self, key: &str, default: usize) -> usize {
        match self.values.get(key) {
            Some(ParamValue::Int(v)) if *v >= 0 => *v as usize,
            _ => default,
        }
    }

    pub fn get_bool(&self, key: &str, default: bool) -> bool {
        match self.values.get(key) {
            Some(ParamValue::Bool(v)) => *v,
            _ => default,
        }
    }

    pub fn get_str(&self, key: &str) -> Option<&str> {
        match self.values.get(key) {
            Some(ParamValue::Text(v)) => Some(v.as_str()),
            _ => None,
        }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn typed_lookups_fall_back_on_kind_mismatch() {
        let mut params = Parameters::new();
        params
            .set("alpha", ParamValue::Float(0.01))
            .set("depth", ParamValue::Int(3))
            .set("flag", ParamValue::Text("yes".into()));

        assert_eq!(params.get_f64("alpha", 0.05), 0.01);
        assert_eq!(params.get_f64("depth", 0.0), 3.0);
        assert_eq!(params.get_usize("depth", 9), 3);
        assert!(!params.get_bool("flag", false));
        assert_eq!(params.get_str("flag"), Some("yes"));
        assert_eq!(params.get_usize("missing", 7), 7);
    }

    #[test]
    fn json_object_round_trips_through_untagged_values() {
        let params = Parameters::from_json(r#"{"alpha": 0.1, "max_trek_length": 4, "complete_rule_set": false}"#)
            .unwrap();
        assert_eq!(params.get_f64("alpha", 0.0), 0.1);
        assert_eq!(params.get_usize("max_trek_length", 0), 4);
        assert!(!params.get_bool("complete_rule_set", true));
    }

    #[test]
    fn from_config_seeds_defaults() {
        let params = Parameters::from_config(&CausalCmpConfig::default());
        assert_eq!(params.get_f64(constants::PARAM_ALPHA, 0.0), constants::DEFAULT_ALPHA);
        assert_eq!(
            params.get_usize(constants::PARAM_MAX_TREK_LENGTH, 0),
            constants::DEFAULT_MAX_TREK_LENGTH
        );
        assert!(!params.contains(constants::PARAM_MAX_DISCRIMINATING_PATH_LENGTH));
    }
}
