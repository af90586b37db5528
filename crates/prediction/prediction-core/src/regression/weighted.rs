//! Exponentially weighted least squares

use prediction_spi::RegressionFit;

use super::linear::least_squares;

/// Denominator magnitude below which the weighted system is ill-conditioned
const ILL_CONDITIONED_EPS: f64 = 1e-4;

/// Recency weights `2^(i/n)` for a series of length `n`
///
/// Index is 1-based: the earliest observation's weight approaches 1, the
/// latest reaches 2 exactly.
pub fn recency_weights(n: usize) -> Vec<f64> {
    (1..=n)
        .map(|i| 2f64.powf(i as f64 / n as f64))
        .collect()
}

/// Fit a line with per-observation weights
///
/// Later observations carry exponentially more weight, so the fitted slope
/// tracks recent movement more closely than the plain OLS slope does. Falls
/// back to [`least_squares`] on the same unweighted data when the weight
/// vector is unusable or the weighted system is ill-conditioned.
pub fn weighted_least_squares(x: &[f64], y: &[f64], w: &[f64]) -> RegressionFit {
    let n = x.len();
    if n == 0 || y.len() != n || w.len() != n {
        return least_squares(x, y);
    }

    let sum_w: f64 = w.iter().sum();
    if sum_w == 0.0 {
        return least_squares(x, y);
    }

    let mut sum_wx = 0.0;
    let mut sum_wy = 0.0;
    let mut sum_wxy = 0.0;
    let mut sum_wxx = 0.0;

    for i in 0..n {
        sum_wx += w[i] * x[i];
        sum_wy += w[i] * y[i];
        sum_wxy += w[i] * x[i] * y[i];
        sum_wxx += w[i] * x[i] * x[i];
    }

    let denominator = sum_w * sum_wxx - sum_wx * sum_wx;
    if denominator.abs() < ILL_CONDITIONED_EPS {
        return least_squares(x, y);
    }

    let slope = (sum_w * sum_wxy - sum_wx * sum_wy) / denominator;
    let intercept = (sum_wy - slope * sum_wx) / sum_w;

    RegressionFit { slope, intercept }
}
