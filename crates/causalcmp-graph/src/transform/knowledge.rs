//! Background knowledge: forbidden and required directed edges, plus tiers.

use serde::{Deserialize, Serialize};

use causalcmp_core::types::collections::{BTreeMap, FxHashSet};

/// Background knowledge keyed by node name.
///
/// Tiers order the variables in time: an edge from a later tier into an
/// earlier one is forbidden. Nodes with no tier are unconstrained.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Knowledge {
    forbidden: Vec<(String, String)>,
    required: Vec<(String, String)>,
    tiers: BTreeMap<String, usize>,
}

impl Knowledge {
    pub fn new() -> Self {
        Self::default()
    }

    /// Forbid `x --> y`.
    pub fn set_forbidden(&mut self, x: &str, y: &str) -> &mut Self {
        let edge = (x.to_string(), y.to_string());
        if !self.forbidden.contains(&edge) {
            self.forbidden.push(edge);
        }
        self
    }

    /// Require `x --> y`.
    pub fn set_required(&mut self, x: &str, y: &str) -> &mut Self {
        let edge = (x.to_string(), y.to_string());
        if !self.required.contains(&edge) {
            self.required.push(edge);
        }
        self
    }

    pub fn add_to_tier(&mut self, tier: usize, name: &str) -> &mut Self {
        self.tiers.insert(name.to_string(), tier);
        self
    }

    pub fn tier_of(&self, name: &str) -> Option<usize> {
        self.tiers.get(name).copied()
    }

    pub fn is_forbidden(&self, x: &str, y: &str) -> bool {
        if self.forbidden.iter().any(|(a, b)| a == x && b == y) {
            return true;
        }
        matches!((self.tier_of(x), self.tier_of(y)), (Some(tx), Some(ty)) if tx > ty)
    }

    pub fn is_required(&self, x: &str, y: &str) -> bool {
        self.required.iter().any(|(a, b)| a == x && b == y)
    }

    /// Required edges in insertion order.
    pub fn required_edges(&self) -> impl Iterator<Item = (&str, &str)> {
        self.required.iter().map(|(a, b)| (a.as_str(), b.as_str()))
    }

    /// Edges that are both required and forbidden.
    pub fn conflicts(&self) -> Vec<(String, String)> {
        let mut seen = FxHashSet::default();
        self.required
            .iter()
            .filter(|(a, b)| self.is_forbidden(a, b))
            .filter(|e| seen.insert((*e).clone()))
            .cloned()
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.forbidden.is_empty() && self.required.is_empty() && self.tiers.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tiers_forbid_backwards_edges() {
        let mut k = Knowledge::new();
        k.add_to_tier(0, "A").add_to_tier(1, "B");
        assert!(k.is_forbidden("B", "A"));
        assert!(!k.is_forbidden("A", "B"));
        assert!(!k.is_forbidden("A", "C"));
    }

    #[test]
    fn conflicts_report_required_and_forbidden() {
        let mut k = Knowledge::new();
        k.set_required("X", "Y").set_forbidden("X", "Y").set_required("Y", "Z");
        assert_eq!(k.conflicts(), vec![("X".to_string(), "Y".to_string())]);
        assert!(k.is_required("Y", "Z"));
    }
}
