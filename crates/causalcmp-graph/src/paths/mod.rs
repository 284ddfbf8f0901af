//! Path and reachability queries over mixed graphs.
//!
//! Every query is pure. A node that is not in the graph yields `false` or an
//! empty result.

pub mod cliques;
pub mod cycles;
pub mod inducing;
pub mod reachability;
pub mod separation;
pub mod treks;
pub mod visible;

pub use cliques::max_cliques;
pub use cycles::{
    almost_cycles, directed_cycle_nodes, exists_almost_cycle, exists_directed_cycle,
    find_directed_cycle, topological_order,
};
pub use inducing::exists_inducing_path;
pub use reachability::{
    ancestors, descendants, exists_directed_path_from_to, exists_semi_directed_path_from_to,
    is_ancestor_of, is_descendant_of,
};
pub use separation::{is_m_connected, is_m_separated};
pub use treks::{trek_top, treks, TrekTop};
pub use visible::def_visible;
