//! Score model errors.

use super::error_code::{self, GesErrorCode};

/// Errors raised while building a scoring model from data.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ScoreError {
    #[error("Dataset has no variables")]
    EmptyDataset,

    #[error("Dataset needs at least 2 samples, got {samples}")]
    TooFewSamples { samples: usize },

    #[error("Sample {row} has {actual} values, expected {expected}")]
    RaggedRows { row: usize, expected: usize, actual: usize },

    #[error("Non-finite value at sample {row}, variable {col}")]
    NonFiniteValue { row: usize, col: usize },

    #[error("Group for node {node} references variable {variable}, dataset has {variables}")]
    UnknownVariable { node: usize, variable: usize, variables: usize },

    #[error("Group for node {node} is empty")]
    EmptyGroup { node: usize },

    #[error("Penalty must be positive and finite, got {lambda}")]
    InvalidPenalty { lambda: f64 },
}

impl GesErrorCode for ScoreError {
    fn error_code(&self) -> &'static str {
        error_code::SCORE_ERROR
    }
}
