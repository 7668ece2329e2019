//! Configuration errors.

use super::error_code::{self, GesErrorCode};

/// Errors that can occur during configuration loading and validation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("Config file not found: {path}")]
    FileNotFound { path: String },

    #[error("Config parse error in {path}: {message}")]
    ParseError { path: String, message: String },

    #[error("Config validation failed for {field}: {message}")]
    ValidationFailed { field: String, message: String },

    #[error("No such phase: {name}")]
    UnknownPhase { name: String },
}

impl GesErrorCode for ConfigError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::UnknownPhase { .. } => error_code::UNKNOWN_PHASE,
            _ => error_code::CONFIG_ERROR,
        }
    }
}
