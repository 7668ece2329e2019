//! CLI errors: file I/O and JSON decoding on top of the library errors.

use ges_core::errors::error_code::{self, GesErrorCode};
use ges_core::errors::{ConfigError, GraphError, ScoreError, SearchError};

pub const IO_ERROR: &str = "IO_ERROR";

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("Cannot read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid JSON in {path}: {message}")]
    Json { path: String, message: String },

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Graph(#[from] GraphError),

    #[error(transparent)]
    Score(#[from] ScoreError),

    #[error(transparent)]
    Search(#[from] SearchError),
}

impl GesErrorCode for CliError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Io { .. } => IO_ERROR,
            Self::Json { .. } => error_code::INVALID_INPUT,
            Self::Config(e) => e.error_code(),
            Self::Graph(e) => e.error_code(),
            Self::Score(e) => e.error_code(),
            Self::Search(e) => e.error_code(),
        }
    }
}
