//! Property tests for the Gaussian regression score.

use proptest::prelude::*;

use ges_score::regression::{gaussian_local_score, residual_variance};
use ges_score::Dataset;

fn rows() -> impl Strategy<Value = Vec<Vec<f64>>> {
    prop::collection::vec(prop::collection::vec(-10.0f64..10.0, 3), 12..40)
}

proptest! {
    #[test]
    fn extra_regressor_never_raises_residual_variance(rows in rows()) {
        let data = Dataset::from_rows(&rows).unwrap();
        let one = residual_variance(&data, 0, &[1]);
        let two = residual_variance(&data, 0, &[1, 2]);
        prop_assume!(one.is_some() && two.is_some());
        let (one, two) = (one.unwrap(), two.unwrap());
        // Both are unbiased (n − 1) variances of least-squares residuals.
        prop_assert!(two <= one * (1.0 + 1e-9));
    }

    #[test]
    fn score_ignores_regressor_order(rows in rows()) {
        let data = Dataset::from_rows(&rows).unwrap();
        let a = gaussian_local_score(&data, 0, &[1, 2], 1.0);
        let b = gaussian_local_score(&data, 0, &[2, 1], 1.0);
        prop_assume!(a.is_finite());
        prop_assert!((a - b).abs() <= 1e-8 * a.abs().max(1.0));
    }

    #[test]
    fn scaling_target_shifts_score_by_log_factor(rows in rows(), c in 0.5f64..4.0) {
        let scaled: Vec<Vec<f64>> = rows
            .iter()
            .map(|r| vec![r[0] * c, r[1], r[2]])
            .collect();
        let data = Dataset::from_rows(&rows).unwrap();
        let scaled_data = Dataset::from_rows(&scaled).unwrap();
        let base = gaussian_local_score(&data, 0, &[1], 0.7);
        let shifted = gaussian_local_score(&scaled_data, 0, &[1], 0.7);
        prop_assume!(base.is_finite());
        let expected = base - rows.len() as f64 * c.ln();
        prop_assert!((shifted - expected).abs() <= 1e-6 * expected.abs().max(1.0));
    }
}
