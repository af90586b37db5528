//! Day-offset series preparation
//!
//! Converts dated weight samples into the parallel day/weight vectors the
//! regressions operate on. Offsets count whole calendar days from an anchor
//! date; the anchor is the earliest sample of whichever slice is being
//! fitted, so sub-windows re-anchor at their own first sample.

use chrono::NaiveDate;
use prediction_spi::WeightSample;

/// Parallel day-offset / weight vectors anchored at the earliest sample
#[derive(Debug, Clone)]
pub struct DaySeries {
    /// Anchor date, day offset zero
    pub anchor: NaiveDate,
    /// Whole-day offsets from the anchor, one per sample
    pub days: Vec<f64>,
    /// Weights in kilograms, one per sample
    pub weights: Vec<f64>,
}

impl DaySeries {
    /// Build a series anchored at the first sample's date
    ///
    /// Returns `None` for an empty slice. Input order is the caller's
    /// contract; with ascending dates every offset is non-negative.
    pub fn from_samples(samples: &[WeightSample]) -> Option<Self> {
        let anchor = samples.first()?.date;
        let mut days = Vec::with_capacity(samples.len());
        let mut weights = Vec::with_capacity(samples.len());

        for sample in samples {
            days.push(day_offset(anchor, sample.date) as f64);
            weights.push(sample.weight_kg);
        }

        Some(Self {
            anchor,
            days,
            weights,
        })
    }

    /// Number of samples in the series
    pub fn len(&self) -> usize {
        self.days.len()
    }

    /// Whether the series holds no samples
    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }
}

/// Whole calendar days from `anchor` to `date`
///
/// Calendar-day subtraction, never time-of-day arithmetic; negative when
/// `date` precedes the anchor.
pub fn day_offset(anchor: NaiveDate, date: NaiveDate) -> i64 {
    date.signed_duration_since(anchor).num_days()
}
