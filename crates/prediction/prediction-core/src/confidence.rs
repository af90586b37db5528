//! Goodness-of-fit confidence scoring
//!
//! Confidence is the coefficient of determination of an ordinary
//! least-squares fit over the confidence window. This is an independent
//! regression, not the blended slope the projections use.

use prediction_spi::RegressionFit;

use crate::regression::least_squares;
use crate::utils::round_to;

/// R² of a fitted line over `(x, y)`
///
/// Zero when the observations carry no variance (the `SStot = 0` branch).
/// Clamped to `[0, 1]` against floating-point drift; a pure fit on its own
/// data cannot leave that range by more than rounding error.
pub fn r_squared(x: &[f64], y: &[f64], fit: &RegressionFit) -> f64 {
    if y.is_empty() {
        return 0.0;
    }

    let mean_y: f64 = y.iter().sum::<f64>() / y.len() as f64;
    let ss_tot: f64 = y.iter().map(|yi| (yi - mean_y).powi(2)).sum();
    let ss_res: f64 = x
        .iter()
        .zip(y)
        .map(|(xi, yi)| (yi - fit.predict_at(*xi)).powi(2))
        .sum();

    if ss_tot > 0.0 {
        (1.0 - ss_res / ss_tot).clamp(0.0, 1.0)
    } else {
        0.0
    }
}

/// Confidence percentage for a day/weight window, one decimal place
pub fn confidence_percent(days: &[f64], weights: &[f64]) -> f64 {
    let fit = least_squares(days, weights);
    round_to(r_squared(days, weights, &fit) * 100.0, 1)
}
