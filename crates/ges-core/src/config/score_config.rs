//! Score configuration.

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_SCORE_CACHE;

/// Configuration for the scoring model and its cache.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct ScoreConfig {
    /// L0 penalty per parameter. Default: `0.5 * ln(samples)` (BIC).
    pub lambda: Option<f64>,
    /// Memoize local scores. Default: true.
    pub cache: Option<bool>,
}

impl ScoreConfig {
    /// Returns the effective penalty for a dataset with `samples` rows.
    pub fn effective_lambda(&self, samples: usize) -> f64 {
        self.lambda
            .unwrap_or_else(|| 0.5 * (samples.max(1) as f64).ln())
    }

    /// Returns the effective cache flag, defaulting to true.
    pub fn effective_cache(&self) -> bool {
        self.cache.unwrap_or(DEFAULT_SCORE_CACHE)
    }
}
