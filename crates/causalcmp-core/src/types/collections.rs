//! Re-exports of performance-oriented collection types.

pub use rustc_hash::{FxHashMap, FxHashSet};
pub use smallvec::SmallVec;
pub use std::collections::BTreeMap;

/// SmallVec sized for per-edge property lists (an edge carries at most two).
pub type SmallVec2<T> = SmallVec<[T; 2]>;
