//! # causalcmp-compare
//!
//! Compares an estimated causal graph against a true one. Confusion-matrix
//! primitives tabulate agreement on adjacencies, endpoint marks, colliders
//! and ancestry; the statistic registry turns those tallies into numbers.

pub mod align;
pub mod confusion;
pub mod data;
pub mod statistics;

pub use align::align_nodes;
pub use confusion::{
    AdjacencyConfusion, ArrowConfusion, CircleConfusion, ColliderConfusion, Confusion,
    DefiniteAncestorConfusion, TailConfusion, Tally,
};
pub use data::DataModel;
pub use statistics::{
    DataRequirement, Normalization, StatContext, Statistic, StatisticRegistry,
};
