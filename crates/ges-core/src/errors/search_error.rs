//! Search errors. Aggregates subsystem errors via `From` conversions.

use super::error_code::{self, GesErrorCode};
use super::{ConfigError, GraphError, ScoreError};

/// Errors that abort an in-progress `fit`. There is no partial-result recovery.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SearchError {
    #[error("Graph error: {0}")]
    Graph(#[from] GraphError),

    #[error("Score error: {0}")]
    Score(#[from] ScoreError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Candidate set for edge ({x}, {y}) has {size} nodes, limit is {limit}")]
    CandidateSetTooLarge {
        x: usize,
        y: usize,
        size: usize,
        limit: u32,
    },

    #[error("Search cancelled")]
    Cancelled,
}

impl GesErrorCode for SearchError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Graph(e) => e.error_code(),
            Self::Score(e) => e.error_code(),
            Self::Config(e) => e.error_code(),
            Self::CandidateSetTooLarge { .. } => error_code::CANDIDATE_SET_TOO_LARGE,
            Self::Cancelled => error_code::CANCELLED,
        }
    }
}
