//! Score oracles shared by the ges-search integration tests.

#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};

use ges_core::types::FxHashMap;
use ges_core::{LocalScore, LocalScoreModel, NodeSet};

/// Score where every edge contributes a fixed gain regardless of direction,
/// so all DAGs in a Markov class score the same.
#[derive(Debug, Clone)]
pub struct PairwiseScore {
    n: usize,
    gains: FxHashMap<(usize, usize), f64>,
}

impl PairwiseScore {
    pub fn new(n: usize) -> Self {
        Self {
            n,
            gains: FxHashMap::default(),
        }
    }

    pub fn with_gain(mut self, a: usize, b: usize, gain: f64) -> Self {
        self.gains.insert((a.min(b), a.max(b)), gain);
        self
    }

    pub fn gain(&self, a: usize, b: usize) -> f64 {
        self.gains
            .get(&(a.min(b), a.max(b)))
            .copied()
            .unwrap_or(-1.0)
    }
}

impl LocalScore for PairwiseScore {
    fn local_score(&self, node: usize, parents: &NodeSet) -> f64 {
        parents.iter().map(|&p| self.gain(p, node)).sum()
    }

    fn num_nodes(&self) -> usize {
        self.n
    }
}

impl LocalScoreModel for PairwiseScore {
    fn compute_local_score(&self, node: usize, parents: &NodeSet) -> f64 {
        self.local_score(node, parents)
    }

    fn num_nodes(&self) -> usize {
        self.n
    }
}

/// Pairwise score that reports −∞ whenever `node` gets `poison` as a parent.
#[derive(Debug, Clone)]
pub struct PoisonedScore {
    pub inner: PairwiseScore,
    pub node: usize,
    pub poison: usize,
}

impl LocalScore for PoisonedScore {
    fn local_score(&self, node: usize, parents: &NodeSet) -> f64 {
        if node == self.node && parents.contains(&self.poison) {
            f64::NEG_INFINITY
        } else {
            self.inner.local_score(node, parents)
        }
    }

    fn num_nodes(&self) -> usize {
        LocalScore::num_nodes(&self.inner)
    }
}

/// Counts lookups; used to check the cache sits between search and model.
#[derive(Debug)]
pub struct CountingModel {
    pub inner: PairwiseScore,
    pub calls: AtomicUsize,
}

impl CountingModel {
    pub fn new(inner: PairwiseScore) -> Self {
        Self {
            inner,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl LocalScoreModel for CountingModel {
    fn compute_local_score(&self, node: usize, parents: &NodeSet) -> f64 {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.inner.local_score(node, parents)
    }

    fn num_nodes(&self) -> usize {
        LocalScore::num_nodes(&self.inner)
    }
}

pub fn set(items: &[usize]) -> NodeSet {
    items.iter().copied().collect()
}
