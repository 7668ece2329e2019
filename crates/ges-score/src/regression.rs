//! Least-squares residual variance and the penalized Gaussian log-likelihood.

use statrs::statistics::Statistics;

use crate::dataset::Dataset;

/// Singular values below this fraction are treated as zero by the solver.
const SVD_EPS: f64 = 1e-10;

/// Residual variances below this fraction of the target variance count as
/// a perfect fit.
const VARIANCE_FLOOR: f64 = 1e-12;

/// Unbiased variance of the residual of regressing `target` on `regressors`.
///
/// Returns `None` when the solver fails or the fit is degenerate (constant
/// target, or residual variance numerically zero).
pub fn residual_variance(data: &Dataset, target: usize, regressors: &[usize]) -> Option<f64> {
    let y = data.column(target);
    let total = data.variance(target);
    if total.is_nan() || total <= 0.0 {
        return None;
    }

    let sigma2 = if regressors.is_empty() {
        total
    } else {
        let x = data.matrix().select_columns(regressors.iter());
        let beta = x.clone().svd(true, true).solve(&y, SVD_EPS).ok()?;
        let residual = &y - &x * beta;
        residual.iter().variance()
    };

    if sigma2.is_finite() && sigma2 > VARIANCE_FLOOR * total {
        Some(sigma2)
    } else {
        None
    }
}

/// `-n/2 · (1 + ln σ²) − λ · (k + 1)` for a family with `k` parents.
pub fn penalized_log_likelihood(samples: usize, sigma2: f64, parents: usize, lambda: f64) -> f64 {
    -0.5 * samples as f64 * (1.0 + sigma2.ln()) - lambda * (parents as f64 + 1.0)
}

/// Gaussian L0-penalized local score, or −∞ for a degenerate fit.
pub fn gaussian_local_score(data: &Dataset, target: usize, regressors: &[usize], lambda: f64) -> f64 {
    match residual_variance(data, target, regressors) {
        Some(sigma2) => penalized_log_likelihood(data.num_samples(), sigma2, regressors.len(), lambda),
        None => {
            tracing::trace!(target, ?regressors, "degenerate gaussian fit");
            f64::NEG_INFINITY
        }
    }
}
