//! Ordinary least squares

use prediction_spi::RegressionFit;

/// Denominator magnitude below which the system counts as singular
const SINGULAR_EPS: f64 = 1e-10;

/// Fit a line through `(x, y)` pairs by ordinary least squares
///
/// A numerically singular system (all x identical, e.g. every sample
/// recorded on the same day) yields the degenerate fit `slope = 0`,
/// `intercept = mean(y)` instead of propagating NaN or infinity.
pub fn least_squares(x: &[f64], y: &[f64]) -> RegressionFit {
    if x.is_empty() || x.len() != y.len() {
        return RegressionFit::default();
    }

    let n = x.len() as f64;
    let sum_x: f64 = x.iter().sum();
    let sum_y: f64 = y.iter().sum();
    let sum_xy: f64 = x.iter().zip(y).map(|(xi, yi)| xi * yi).sum();
    let sum_xx: f64 = x.iter().map(|xi| xi * xi).sum();

    let denominator = n * sum_xx - sum_x * sum_x;
    if denominator.abs() < SINGULAR_EPS {
        return RegressionFit {
            slope: 0.0,
            intercept: sum_y / n,
        };
    }

    let slope = (n * sum_xy - sum_x * sum_y) / denominator;
    let intercept = (sum_y - slope * sum_x) / n;

    RegressionFit { slope, intercept }
}
