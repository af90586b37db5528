//! Weight sample model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A single dated weight measurement
///
/// Samples reach the engine ordered by ascending date. Duplicate dates are
/// allowed; each sample is an independent observation and is never merged
/// with its neighbors.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeightSample {
    /// Calendar date of the measurement
    pub date: NaiveDate,
    /// Measured weight in kilograms
    pub weight_kg: f64,
}

impl WeightSample {
    /// Create a new sample
    pub fn new(date: NaiveDate, weight_kg: f64) -> Self {
        Self { date, weight_kg }
    }
}
