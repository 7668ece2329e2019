//! Insert and Delete operator search over a CPDAG.

pub mod delete;
pub mod insert;
pub mod subsets;

pub use delete::{apply_delete, score_valid_delete_operators};
pub use insert::{apply_insert, score_valid_insert_operators};

use std::fmt;

use ges_core::NodeSet;
use serde::{Deserialize, Serialize};

use crate::graph::Pdag;

/// Operator family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OperatorKind {
    Insert,
    Delete,
}

impl fmt::Display for OperatorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Insert => f.write_str("insert"),
            Self::Delete => f.write_str("delete"),
        }
    }
}

/// A scored, valid operator together with the graph it produces.
#[derive(Debug, Clone, PartialEq)]
pub struct Operator {
    pub kind: OperatorKind,
    pub x: usize,
    pub y: usize,
    /// T for Insert, H for Delete.
    pub subset: NodeSet,
    pub delta: f64,
    /// Graph after applying the operator, before canonicalization.
    pub result: Pdag,
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({}, {}, {:?}) -> {}", self.kind, self.x, self.y, self.subset, self.delta)
    }
}

/// Outcome of scanning one candidate edge, or a whole step.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OperatorSearch {
    /// Highest-delta valid operator; the first one found wins ties.
    pub best: Option<Operator>,
    /// Number of valid operators scored.
    pub valid: usize,
}

impl OperatorSearch {
    /// Fold another search into this one, keeping the earlier best on ties.
    pub fn absorb(&mut self, other: OperatorSearch) {
        self.valid += other.valid;
        if let Some(candidate) = other.best {
            if self.best.as_ref().map_or(true, |b| candidate.delta > b.delta) {
                self.best = Some(candidate);
            }
        }
    }

    /// Best delta, or 0 when no valid operator exists.
    pub fn best_delta(&self) -> f64 {
        match &self.best {
            Some(op) if self.valid > 0 => op.delta,
            _ => 0.0,
        }
    }
}
