//! Search configuration.

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_ITERATE, DEFAULT_MAX_SUBSET_SIZE, DEFAULT_PARALLEL};
use crate::errors::ConfigError;
use crate::types::Phase;

/// Configuration for the search driver.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct SearchConfig {
    /// Phase sequence. Default: `["forward", "backward"]`.
    #[serde(default)]
    pub phases: Vec<String>,
    /// Repeat the phase sequence while the total score improves. Default: false.
    pub iterate: Option<bool>,
    /// Cap on |T0| / |H0| per candidate edge. Default: 20.
    pub max_subset_size: Option<u32>,
    /// Evaluate step candidates on the rayon pool. Default: false.
    pub parallel: Option<bool>,
    /// Step budget across all phases and passes. Default: unlimited.
    pub max_steps: Option<u64>,
}

impl SearchConfig {
    /// Returns the effective phase sequence, defaulting to forward then backward.
    pub fn effective_phases(&self) -> Result<Vec<Phase>, ConfigError> {
        if self.phases.is_empty() {
            Ok(Phase::DEFAULT_SEQUENCE.to_vec())
        } else {
            Phase::parse_list(&self.phases)
        }
    }

    /// Returns the effective iterate flag, defaulting to false.
    pub fn effective_iterate(&self) -> bool {
        self.iterate.unwrap_or(DEFAULT_ITERATE)
    }

    /// Returns the effective candidate-set cap, defaulting to 20.
    pub fn effective_max_subset_size(&self) -> u32 {
        self.max_subset_size.unwrap_or(DEFAULT_MAX_SUBSET_SIZE)
    }

    /// Returns the effective parallel flag, defaulting to false.
    pub fn effective_parallel(&self) -> bool {
        self.parallel.unwrap_or(DEFAULT_PARALLEL)
    }
}
