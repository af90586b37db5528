//! Regression fit model

/// Slope and intercept of a fitted trend line
///
/// Produced and consumed within a single prediction call; the slope is in
/// kilograms per day, the intercept in kilograms at the series anchor.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RegressionFit {
    /// Trend in kg per day
    pub slope: f64,
    /// Weight at day offset zero
    pub intercept: f64,
}

impl RegressionFit {
    /// Value of the fitted line at day offset `x`
    pub fn predict_at(&self, x: f64) -> f64 {
        self.slope * x + self.intercept
    }
}
