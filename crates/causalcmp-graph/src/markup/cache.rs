//! Markup cache keyed by graph revision.
//!
//! Uses `moka::sync::Cache`. A graph gets a new revision on every mutation,
//! so an entry can never describe stale content. Tracks hits/misses/rate.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, OnceLock};

use moka::sync::Cache;

use causalcmp_core::config::MarkupConfig;
use causalcmp_core::constants;

use super::{compute_markup, EdgeMarkup, MarkupKind};
use crate::graph::Graph;

/// Memoized edge markup with hit/miss tracking.
pub struct MarkupCache {
    cache: Cache<(u64, MarkupKind), Arc<EdgeMarkup>>,
    hits: AtomicU64,
    misses: AtomicU64,
}

static GLOBAL: OnceLock<MarkupCache> = OnceLock::new();

impl MarkupCache {
    pub fn new(capacity: u64) -> Self {
        Self {
            cache: Cache::builder().max_capacity(capacity).build(),
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
        }
    }

    pub fn from_config(config: &MarkupConfig) -> Self {
        Self::new(config.effective_cache_capacity())
    }

    /// Process-wide cache with the default capacity.
    pub fn global() -> &'static MarkupCache {
        GLOBAL.get_or_init(|| Self::new(constants::DEFAULT_MARKUP_CACHE_CAPACITY))
    }

    /// Markup of `kind` for `g`, computed on first request. Concurrent first
    /// requests for the same key compute once.
    pub fn markup(&self, g: &Graph, kind: MarkupKind) -> Arc<EdgeMarkup> {
        let key = (g.revision(), kind);
        let mut computed = false;
        let markup = self.cache.get_with(key, || {
            computed = true;
            Arc::new(compute_markup(g, kind))
        });
        if computed {
            self.misses.fetch_add(1, Ordering::Relaxed);
        } else {
            self.hits.fetch_add(1, Ordering::Relaxed);
            tracing::trace!(revision = key.0, ?kind, "markup cache hit");
        }
        markup
    }

    pub fn pag_coloring(&self, g: &Graph) -> Arc<EdgeMarkup> {
        self.markup(g, MarkupKind::PagColoring)
    }

    pub fn edge_specialization(&self, g: &Graph) -> Arc<EdgeMarkup> {
        self.markup(g, MarkupKind::EdgeSpecialization)
    }

    pub fn invalidate_all(&self) {
        self.cache.invalidate_all();
    }

    pub fn hits(&self) -> u64 {
        self.hits.load(Ordering::Relaxed)
    }

    pub fn misses(&self) -> u64 {
        self.misses.load(Ordering::Relaxed)
    }

    /// Cache hit rate (0.0–1.0).
    pub fn hit_rate(&self) -> f64 {
        let h = self.hits() as f64;
        let total = h + self.misses() as f64;
        if total == 0.0 {
            0.0
        } else {
            h / total
        }
    }

    pub fn entry_count(&self) -> u64 {
        self.cache.run_pending_tasks();
        self.cache.entry_count()
    }
}

impl Default for MarkupCache {
    fn default() -> Self {
        Self::new(constants::DEFAULT_MARKUP_CACHE_CAPACITY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::parse_graph;

    #[test]
    fn second_request_is_a_hit() {
        let cache = MarkupCache::new(8);
        let g = parse_graph("A-->B, B-->C").unwrap();
        let first = cache.pag_coloring(&g);
        let second = cache.pag_coloring(&g);
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(cache.misses(), 1);
        assert_eq!(cache.hits(), 1);
    }

    #[test]
    fn kinds_are_cached_separately() {
        let cache = MarkupCache::new(8);
        let g = parse_graph("A o-> B").unwrap();
        assert!(cache.pag_coloring(&g).is_empty());
        assert_eq!(cache.edge_specialization(&g).len(), 1);
        assert_eq!(cache.misses(), 2);
    }
}
