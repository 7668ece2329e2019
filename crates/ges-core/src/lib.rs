//! # ges-core
//!
//! Shared foundation for the GES workspace: error enums with stable error
//! codes, layered TOML configuration, tracing setup, the scoring traits
//! consumed by the search engine, and common collection aliases.

pub mod config;
pub mod constants;
pub mod errors;
pub mod tracing;
pub mod traits;
pub mod types;

pub use config::GesConfig;
pub use errors::{ConfigError, GraphError, ScoreError, SearchError};
pub use traits::{Cancellable, CancellationToken, LocalScore, LocalScoreModel};
pub use types::{NodeSet, Phase};
