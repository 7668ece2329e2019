//! JSON inputs: sample rows, 0/1 matrices and column groups.

use std::path::Path;

use serde::de::DeserializeOwned;

use ges_score::Dataset;
use ges_search::{FixedGaps, Pdag};

use crate::error::CliError;

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, CliError> {
    let text = std::fs::read_to_string(path).map_err(|source| CliError::Io {
        path: path.display().to_string(),
        source,
    })?;
    serde_json::from_str(&text).map_err(|e| CliError::Json {
        path: path.display().to_string(),
        message: e.to_string(),
    })
}

/// Samples × variables data from an array of sample rows.
pub fn load_data(path: &Path) -> Result<Dataset, CliError> {
    let rows: Vec<Vec<f64>> = read_json(path)?;
    Ok(Dataset::from_rows(&rows)?)
}

/// Forbidden-pair mask from an n×n 0/1 matrix.
pub fn load_fixed_gaps(path: &Path) -> Result<FixedGaps, CliError> {
    let rows: Vec<Vec<u8>> = read_json(path)?;
    Ok(FixedGaps::from_rows(&rows)?)
}

/// Initial graph from an n×n 0/1 adjacency matrix.
pub fn load_initial_graph(path: &Path) -> Result<Pdag, CliError> {
    let rows: Vec<Vec<u8>> = read_json(path)?;
    Ok(Pdag::from_rows(&rows)?)
}

/// Column groups for the clustered score: one list of column indices per node.
pub fn load_groups(path: &Path) -> Result<Vec<Vec<usize>>, CliError> {
    read_json(path)
}
