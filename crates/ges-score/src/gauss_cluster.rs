//! Clustered Gaussian score: each graph node stands for a group of columns.

use ges_core::config::ScoreConfig;
use ges_core::errors::ScoreError;
use ges_core::{LocalScoreModel, NodeSet};

use crate::dataset::Dataset;
use crate::gauss_obs::{bic_lambda, check_lambda};
use crate::regression::gaussian_local_score;

/// Gaussian L0 score over column groups.
///
/// The local score of node `x` with parent nodes `pa` is the best Gaussian
/// local score of any column in `x`'s group, regressed on the union of the
/// parents' columns.
#[derive(Debug, Clone)]
pub struct GaussClusterL0Pen {
    data: Dataset,
    groups: Vec<Vec<usize>>,
    lambda: f64,
}

impl GaussClusterL0Pen {
    /// Score with the BIC penalty. Every group must be non-empty and refer
    /// to existing columns.
    pub fn new(data: Dataset, groups: Vec<Vec<usize>>) -> Result<Self, ScoreError> {
        let lambda = bic_lambda(data.num_samples());
        Self::with_lambda(data, groups, lambda)
    }

    pub fn with_lambda(data: Dataset, groups: Vec<Vec<usize>>, lambda: f64) -> Result<Self, ScoreError> {
        check_lambda(lambda)?;
        let variables = data.num_variables();
        for (node, group) in groups.iter().enumerate() {
            if group.is_empty() {
                return Err(ScoreError::EmptyGroup { node });
            }
            if let Some(&variable) = group.iter().find(|&&v| v >= variables) {
                return Err(ScoreError::UnknownVariable {
                    node,
                    variable,
                    variables,
                });
            }
        }
        Ok(Self { data, groups, lambda })
    }

    pub fn from_config(data: Dataset, groups: Vec<Vec<usize>>, config: &ScoreConfig) -> Result<Self, ScoreError> {
        let lambda = config.effective_lambda(data.num_samples());
        Self::with_lambda(data, groups, lambda)
    }

    pub fn lambda(&self) -> f64 {
        self.lambda
    }

    pub fn groups(&self) -> &[Vec<usize>] {
        &self.groups
    }
}

impl LocalScoreModel for GaussClusterL0Pen {
    fn compute_local_score(&self, node: usize, parents: &NodeSet) -> f64 {
        let regressors: Vec<usize> = parents
            .iter()
            .flat_map(|&p| self.groups[p].iter().copied())
            .collect::<NodeSet>()
            .into_iter()
            .collect();

        self.groups[node]
            .iter()
            .map(|&column| gaussian_local_score(&self.data, column, &regressors, self.lambda))
            .fold(f64::NEG_INFINITY, f64::max)
    }

    fn num_nodes(&self) -> usize {
        self.groups.len()
    }
}
