//! Rendering a fit result as JSON, a 0/1 matrix or Graphviz DOT.

use clap::ValueEnum;
use serde::Serialize;

use ges_search::{CacheStats, Pdag};

use crate::error::CliError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// `{"cpdag": [[..]], "total_score": f, "accepted_steps": k}`
    #[default]
    Json,
    /// One row per line, entries separated by spaces.
    Matrix,
    /// Graphviz DOT; undirected edges carry `dir=none`.
    Dot,
}

/// What `ges fit` reports.
#[derive(Debug, Clone, PartialEq)]
pub struct FitReport {
    pub cpdag: Pdag,
    pub total_score: f64,
    pub accepted_steps: usize,
    pub budget_exhausted: bool,
    pub cache: CacheStats,
}

#[derive(Serialize)]
struct JsonReport<'a> {
    cpdag: &'a Pdag,
    total_score: f64,
    accepted_steps: usize,
}

impl FitReport {
    pub fn render(&self, format: OutputFormat) -> Result<String, CliError> {
        match format {
            OutputFormat::Json => {
                let report = JsonReport {
                    cpdag: &self.cpdag,
                    total_score: self.total_score,
                    accepted_steps: self.accepted_steps,
                };
                serde_json::to_string_pretty(&report).map_err(|e| CliError::Json {
                    path: "<output>".to_string(),
                    message: e.to_string(),
                })
            }
            OutputFormat::Matrix => Ok(render_matrix(&self.cpdag)),
            OutputFormat::Dot => Ok(self.cpdag.to_dot()),
        }
    }
}

fn render_matrix(pdag: &Pdag) -> String {
    let mut out = String::new();
    for row in pdag.to_rows() {
        let line: Vec<String> = row.iter().map(|v| v.to_string()).collect();
        out.push_str(&line.join(" "));
        out.push('\n');
    }
    out
}
