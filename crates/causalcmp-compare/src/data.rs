//! The data handed to data-dependent statistics.
//!
//! Loading data is out of scope; callers build a `DataModel` themselves.

use serde::{Deserialize, Serialize};

/// A dataset over named variables.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DataModel {
    /// Raw samples, one row per observation, columns in `variables` order.
    Tabular {
        variables: Vec<String>,
        rows: Vec<Vec<f64>>,
    },
    /// A covariance matrix with the sample size it was estimated from.
    Covariance {
        variables: Vec<String>,
        sample_size: usize,
        matrix: Vec<Vec<f64>>,
    },
}

impl DataModel {
    /// `"tabular"` or `"covariance"`, as used in error messages.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::Tabular { .. } => "tabular",
            Self::Covariance { .. } => "covariance",
        }
    }

    pub fn variables(&self) -> &[String] {
        match self {
            Self::Tabular { variables, .. } | Self::Covariance { variables, .. } => variables,
        }
    }

    pub fn sample_size(&self) -> usize {
        match self {
            Self::Tabular { rows, .. } => rows.len(),
            Self::Covariance { sample_size, .. } => *sample_size,
        }
    }

    pub fn is_tabular(&self) -> bool {
        matches!(self, Self::Tabular { .. })
    }

    /// Column of `variable`, for tabular data only.
    pub fn column(&self, variable: &str) -> Option<Vec<f64>> {
        let Self::Tabular { variables, rows } = self else {
            return None;
        };
        let col = variables.iter().position(|v| v == variable)?;
        rows.iter().map(|row| row.get(col).copied()).collect()
    }
}
