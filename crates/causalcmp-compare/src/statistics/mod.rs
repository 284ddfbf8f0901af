//! Statistics: named functions from a (true, estimated) graph pair to `f64`.
//!
//! A statistic is a plain function plus metadata. The registry maps
//! abbreviations to statistics; combinators build statistics out of
//! confusion primitives and graph transforms. An undefined ratio is NaN,
//! never an error.

pub mod builtins;
pub mod combinators;
pub mod registry;

pub use combinators::{
    against_true_cpdag, against_true_pag, f1, matthews_correlation, precision, recall,
    tanh_complement,
};
pub use registry::StatisticRegistry;

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use causalcmp_core::errors::StatError;
use causalcmp_core::Parameters;
use causalcmp_graph::Graph;

use crate::data::DataModel;

/// Everything a statistic may look at.
#[derive(Debug, Clone, Copy)]
pub struct StatContext<'a> {
    pub truth: &'a Graph,
    pub estimate: &'a Graph,
    pub data: Option<&'a DataModel>,
    pub params: &'a Parameters,
}

impl<'a> StatContext<'a> {
    pub fn new(truth: &'a Graph, estimate: &'a Graph, params: &'a Parameters) -> Self {
        Self {
            truth,
            estimate,
            data: None,
            params,
        }
    }

    pub fn with_data(mut self, data: Option<&'a DataModel>) -> Self {
        self.data = data;
        self
    }

    /// The same context with a different true graph.
    pub fn with_truth(mut self, truth: &'a Graph) -> Self {
        self.truth = truth;
        self
    }
}

/// The function behind a statistic.
pub type StatFn = Arc<dyn Fn(&StatContext<'_>) -> Result<f64, StatError> + Send + Sync>;

/// What data a statistic needs besides the two graphs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DataRequirement {
    #[default]
    None,
    Tabular,
}

/// How a raw value maps onto [0, 1], higher meaning better.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum Normalization {
    /// Already a ratio in [0, 1].
    #[default]
    Identity,
    /// A 0/1 flag.
    Indicator,
    /// A non-negative count, mapped through `1 - tanh(value / scale)`.
    TanhComplement { scale: f64 },
}

impl Normalization {
    pub fn apply(&self, value: f64) -> f64 {
        match self {
            Self::Identity => value,
            Self::Indicator if value.is_nan() => value,
            Self::Indicator => {
                if value != 0.0 {
                    1.0
                } else {
                    0.0
                }
            }
            Self::TanhComplement { scale } => tanh_complement(value, *scale),
        }
    }
}

/// A named statistic.
#[derive(Clone)]
pub struct Statistic {
    abbreviation: String,
    description: String,
    requirement: DataRequirement,
    normalization: Normalization,
    function: StatFn,
}

impl Statistic {
    pub fn new<F>(abbreviation: impl Into<String>, description: impl Into<String>, function: F) -> Self
    where
        F: Fn(&StatContext<'_>) -> Result<f64, StatError> + Send + Sync + 'static,
    {
        Self::from_fn(abbreviation, description, Arc::new(function))
    }

    /// Wrap an already shared function.
    pub fn from_fn(
        abbreviation: impl Into<String>,
        description: impl Into<String>,
        function: StatFn,
    ) -> Self {
        Self {
            abbreviation: abbreviation.into(),
            description: description.into(),
            requirement: DataRequirement::None,
            normalization: Normalization::Identity,
            function,
        }
    }

    pub fn with_requirement(mut self, requirement: DataRequirement) -> Self {
        self.requirement = requirement;
        self
    }

    pub fn with_normalization(mut self, normalization: Normalization) -> Self {
        self.normalization = normalization;
        self
    }

    pub fn abbreviation(&self) -> &str {
        &self.abbreviation
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn requirement(&self) -> DataRequirement {
        self.requirement
    }

    pub fn normalization(&self) -> Normalization {
        self.normalization
    }

    pub fn function(&self) -> StatFn {
        Arc::clone(&self.function)
    }

    /// Check the data requirement, then run the function.
    pub fn evaluate(&self, ctx: &StatContext<'_>) -> Result<f64, StatError> {
        if self.requirement == DataRequirement::Tabular {
            match ctx.data {
                None => {
                    return Err(StatError::MissingData {
                        statistic: self.abbreviation.clone(),
                    })
                }
                Some(data) if !data.is_tabular() => {
                    return Err(StatError::DataTypeMismatch {
                        statistic: self.abbreviation.clone(),
                        expected: "tabular",
                        found: data.kind_name(),
                    })
                }
                Some(_) => {}
            }
        }
        (self.function)(ctx)
    }

    /// The raw value mapped through this statistic's normalization.
    pub fn normalized(&self, value: f64) -> f64 {
        self.normalization.apply(value)
    }
}

impl std::fmt::Debug for Statistic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Statistic")
            .field("abbreviation", &self.abbreviation)
            .field("requirement", &self.requirement)
            .field("normalization", &self.normalization)
            .finish_non_exhaustive()
    }
}
