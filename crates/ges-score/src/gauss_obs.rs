//! Gaussian observational score with an L0 penalty.

use ges_core::config::ScoreConfig;
use ges_core::errors::ScoreError;
use ges_core::{LocalScoreModel, NodeSet};

use crate::dataset::Dataset;
use crate::regression::gaussian_local_score;

/// Penalized Gaussian log-likelihood, one node per dataset column.
///
/// `score(x, pa) = -n/2 · (1 + ln σ²) − λ · (|pa| + 1)` where σ² is the
/// unbiased residual variance of regressing x on pa. λ defaults to
/// `0.5 · ln n`, i.e. BIC.
#[derive(Debug, Clone)]
pub struct GaussObsL0Pen {
    data: Dataset,
    lambda: f64,
}

impl GaussObsL0Pen {
    /// Score with the BIC penalty.
    pub fn new(data: Dataset) -> Self {
        let lambda = bic_lambda(data.num_samples());
        Self { data, lambda }
    }

    /// Score with an explicit penalty.
    pub fn with_lambda(data: Dataset, lambda: f64) -> Result<Self, ScoreError> {
        check_lambda(lambda)?;
        Ok(Self { data, lambda })
    }

    /// Score with the penalty from `config` (BIC when unset).
    pub fn from_config(data: Dataset, config: &ScoreConfig) -> Result<Self, ScoreError> {
        let lambda = config.effective_lambda(data.num_samples());
        Self::with_lambda(data, lambda)
    }

    pub fn lambda(&self) -> f64 {
        self.lambda
    }

    pub fn dataset(&self) -> &Dataset {
        &self.data
    }
}

impl LocalScoreModel for GaussObsL0Pen {
    fn compute_local_score(&self, node: usize, parents: &NodeSet) -> f64 {
        let regressors: Vec<usize> = parents.iter().copied().collect();
        gaussian_local_score(&self.data, node, &regressors, self.lambda)
    }

    fn num_nodes(&self) -> usize {
        self.data.num_variables()
    }
}

pub(crate) fn bic_lambda(samples: usize) -> f64 {
    0.5 * (samples as f64).ln()
}

pub(crate) fn check_lambda(lambda: f64) -> Result<(), ScoreError> {
    if lambda.is_finite() && lambda > 0.0 {
        Ok(())
    } else {
        Err(ScoreError::InvalidPenalty { lambda })
    }
}
