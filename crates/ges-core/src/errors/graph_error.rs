//! Graph errors: malformed adjacency input and failed canonicalization.

use super::error_code::{self, GesErrorCode};

/// Errors raised by adjacency-matrix construction and graph algorithms.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GraphError {
    #[error("Adjacency matrix is not square: row {row} has {len} entries, expected {expected}")]
    NotSquare { row: usize, len: usize, expected: usize },

    #[error("Adjacency matrix has {actual} nodes, expected {expected}")]
    SizeMismatch { expected: usize, actual: usize },

    #[error("Adjacency entry ({row}, {col}) is {value}, expected 0 or 1")]
    InvalidEntry { row: usize, col: usize, value: u8 },

    #[error("Adjacency matrix has a self-loop on node {node}")]
    SelfLoop { node: usize },

    #[error("The given graph is not a DAG: {reason}")]
    NotADag { reason: String },

    #[error("PDAG does not admit a consistent extension ({remaining} nodes left unoriented)")]
    Inextensible { remaining: usize },
}

impl GraphError {
    /// True for the malformed-input family (checked before search starts).
    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            Self::NotSquare { .. }
                | Self::SizeMismatch { .. }
                | Self::InvalidEntry { .. }
                | Self::SelfLoop { .. }
        )
    }
}

impl GesErrorCode for GraphError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::NotSquare { .. }
            | Self::SizeMismatch { .. }
            | Self::InvalidEntry { .. }
            | Self::SelfLoop { .. } => error_code::INVALID_INPUT,
            Self::NotADag { .. } => error_code::NOT_A_DAG,
            Self::Inextensible { .. } => error_code::INEXTENSIBLE,
        }
    }
}
