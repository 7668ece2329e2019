//! Command-line driver for the GES structure learner.
//!
//! Reads samples and optional graph inputs as JSON, resolves the layered
//! configuration, runs the search and renders the resulting CPDAG.

pub mod commands;
pub mod error;
pub mod input;
pub mod output;

pub use commands::{resolve_config, run_fit, run_ges, FitArgs};
pub use error::CliError;
pub use output::{FitReport, OutputFormat};
