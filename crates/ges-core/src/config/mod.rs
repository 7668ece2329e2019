//! Configuration system for GES.
//! TOML-based, layered resolution: CLI > env > project > user > defaults.

pub mod ges_config;
pub mod score_config;
pub mod search_config;

pub use ges_config::{CliOverrides, GesConfig};
pub use score_config::ScoreConfig;
pub use search_config::SearchConfig;
