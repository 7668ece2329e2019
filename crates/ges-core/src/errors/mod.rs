//! Error handling for GES.
//! One error enum per subsystem, `thiserror` only, zero `anyhow`.

pub mod config_error;
pub mod error_code;
pub mod graph_error;
pub mod score_error;
pub mod search_error;

pub use config_error::ConfigError;
pub use error_code::GesErrorCode;
pub use graph_error::GraphError;
pub use score_error::ScoreError;
pub use search_error::SearchError;
