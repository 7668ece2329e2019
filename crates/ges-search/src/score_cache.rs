//! Memoizing wrapper around a local score model.

use std::sync::atomic::{AtomicU64, Ordering};

use dashmap::DashMap;
use ges_core::types::collections::{FxBuildHasher, SmallVec8};
use ges_core::{LocalScore, LocalScoreModel, NodeSet};

type CacheKey = (usize, SmallVec8<usize>);

/// Snapshot of cache counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
    pub entries: usize,
}

impl CacheStats {
    /// Fraction of lookups answered from the cache.
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }
}

/// Caches `(node, parents) → score` for one model instance.
///
/// Entries are never invalidated. Insertion goes through a sharded map, so
/// parallel candidate evaluation may race on a key; both racers compute the
/// same value and the first insert wins.
pub struct ScoreCache<M: LocalScoreModel> {
    model: M,
    enabled: bool,
    entries: DashMap<CacheKey, f64, FxBuildHasher>,
    hits: AtomicU64,
    misses: AtomicU64,
}

impl<M: LocalScoreModel> ScoreCache<M> {
    /// Wrap `model` with memoization enabled.
    pub fn new(model: M) -> Self {
        Self::with_enabled(model, true)
    }

    /// Wrap `model`; with `enabled = false` every lookup recomputes.
    pub fn with_enabled(model: M, enabled: bool) -> Self {
        Self {
            model,
            enabled,
            entries: DashMap::with_hasher(FxBuildHasher),
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
        }
    }

    /// The wrapped model.
    pub fn model(&self) -> &M {
        &self.model
    }

    /// Whether memoization is on.
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Current counters.
    pub fn stats(&self) -> CacheStats {
        CacheStats {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            entries: self.entries.len(),
        }
    }
}

impl<M: LocalScoreModel> LocalScore for ScoreCache<M> {
    fn local_score(&self, node: usize, parents: &NodeSet) -> f64 {
        if !self.enabled {
            self.misses.fetch_add(1, Ordering::Relaxed);
            return self.model.compute_local_score(node, parents);
        }

        let key: CacheKey = (node, parents.iter().copied().collect());
        if let Some(score) = self.entries.get(&key) {
            self.hits.fetch_add(1, Ordering::Relaxed);
            return *score;
        }

        self.misses.fetch_add(1, Ordering::Relaxed);
        let score = self.model.compute_local_score(node, parents);
        *self.entries.entry(key).or_insert(score)
    }

    fn num_nodes(&self) -> usize {
        self.model.num_nodes()
    }
}
