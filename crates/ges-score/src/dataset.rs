//! Validated, column-centered observation matrix.

use nalgebra::{DMatrix, DVector};
use statrs::statistics::Statistics;

use ges_core::errors::ScoreError;

/// Samples × variables matrix with every column mean-centered.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    centered: DMatrix<f64>,
}

impl Dataset {
    /// Build from sample rows. Requires at least 2 samples, at least one
    /// variable, equal row lengths and finite values.
    pub fn from_rows(rows: &[Vec<f64>]) -> Result<Self, ScoreError> {
        let variables = rows.first().map_or(0, Vec::len);
        if variables == 0 {
            return Err(ScoreError::EmptyDataset);
        }
        for (row, values) in rows.iter().enumerate() {
            if values.len() != variables {
                return Err(ScoreError::RaggedRows {
                    row,
                    expected: variables,
                    actual: values.len(),
                });
            }
            if let Some(col) = values.iter().position(|v| !v.is_finite()) {
                return Err(ScoreError::NonFiniteValue { row, col });
            }
        }
        if rows.len() < 2 {
            return Err(ScoreError::TooFewSamples { samples: rows.len() });
        }

        let raw = DMatrix::from_fn(rows.len(), variables, |i, j| rows[i][j]);
        Ok(Self::centered(raw))
    }

    /// Build from a matrix already laid out as samples × variables.
    pub fn from_matrix(matrix: DMatrix<f64>) -> Result<Self, ScoreError> {
        if matrix.ncols() == 0 {
            return Err(ScoreError::EmptyDataset);
        }
        if let Some(pos) = matrix.iter().position(|v| !v.is_finite()) {
            // Column-major storage.
            let (row, col) = (pos % matrix.nrows(), pos / matrix.nrows());
            return Err(ScoreError::NonFiniteValue { row, col });
        }
        if matrix.nrows() < 2 {
            return Err(ScoreError::TooFewSamples {
                samples: matrix.nrows(),
            });
        }
        Ok(Self::centered(matrix))
    }

    fn centered(mut matrix: DMatrix<f64>) -> Self {
        for mut column in matrix.column_iter_mut() {
            let mean = column.iter().mean();
            column.add_scalar_mut(-mean);
        }
        Self { centered: matrix }
    }

    pub fn num_samples(&self) -> usize {
        self.centered.nrows()
    }

    pub fn num_variables(&self) -> usize {
        self.centered.ncols()
    }

    /// The centered data.
    pub fn matrix(&self) -> &DMatrix<f64> {
        &self.centered
    }

    /// Owned copy of one centered column.
    pub fn column(&self, j: usize) -> DVector<f64> {
        self.centered.column(j).into_owned()
    }

    /// Unbiased sample variance of column `j`.
    pub fn variance(&self, j: usize) -> f64 {
        self.centered.column(j).iter().variance()
    }
}
