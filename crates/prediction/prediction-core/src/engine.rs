//! The prediction engine
//!
//! Single pure entry point: an ordered sample history plus active goals in,
//! a fully populated [`PredictionReport`] out. Every invocation is
//! self-contained; the engine borrows its inputs for the duration of the
//! call and retains nothing.

use chrono::NaiveDate;
use prediction_spi::{PredictionReport, Trend, WeightGoal, WeightSample};

use crate::blend::{combine_slopes, SlopeComponents};
use crate::confidence::confidence_percent;
use crate::projection;
use crate::regression::{least_squares, recency_weights, weighted_least_squares};
use crate::series::DaySeries;
use crate::utils::round_to;
use crate::window::{recent_window, RELIABLE_WINDOW};

/// Minimum history for any trend estimate
const MIN_SAMPLES: usize = 2;

/// Stateless weight trend prediction engine
///
/// Safe to share and to call concurrently: there is no interior state, and
/// each call reads only its own arguments.
#[derive(Debug, Clone, Copy, Default)]
pub struct PredictionEngine;

impl PredictionEngine {
    /// Create an engine
    pub fn new() -> Self {
        Self
    }

    /// Compute the three strategy slopes and their blend
    ///
    /// `None` until at least two samples exist.
    pub fn slopes(&self, samples: &[WeightSample]) -> Option<SlopeComponents> {
        if samples.len() < MIN_SAMPLES {
            return None;
        }

        let series = DaySeries::from_samples(samples)?;
        let overall = least_squares(&series.days, &series.weights);

        let window = recent_window(samples);
        let recent = if window.len() >= MIN_SAMPLES {
            let window_series = DaySeries::from_samples(window)?;
            least_squares(&window_series.days, &window_series.weights).slope
        } else {
            overall.slope
        };

        let weights = recency_weights(series.len());
        let weighted = weighted_least_squares(&series.days, &series.weights, &weights);

        let combined = combine_slopes(overall.slope, recent, weighted.slope, window.len());

        Some(SlopeComponents {
            overall: overall.slope,
            recent,
            weighted: weighted.slope,
            combined,
            window_len: window.len(),
        })
    }

    /// Produce the full prediction report
    ///
    /// Never fails: fewer than two samples yields the defined
    /// insufficient-data report, and degenerate numerics are absorbed by
    /// the regression guards.
    pub fn report(
        &self,
        samples: &[WeightSample],
        goals: &[WeightGoal],
        today: NaiveDate,
    ) -> PredictionReport {
        let Some(slopes) = self.slopes(samples) else {
            return PredictionReport::insufficient(samples.len());
        };

        let latest = samples[samples.len() - 1];
        let combined = slopes.combined;

        // Confidence runs on the recent window only when it is well
        // populated; otherwise the full history.
        let window = recent_window(samples);
        let confidence_slice = if window.len() >= RELIABLE_WINDOW {
            window
        } else {
            samples
        };
        let confidence = match DaySeries::from_samples(confidence_slice) {
            Some(series) => confidence_percent(&series.days, &series.weights),
            None => 0.0,
        };

        let goal_predictions = projection::project_goals(combined, &latest, goals);
        let (goal_date, goal_date_90) = if goals.is_empty() {
            projection::legacy_goal_dates(combined, &latest)
        } else {
            (None, None)
        };

        let next_month_date = projection::next_month_start(today);
        let next_month_prediction = projection::next_month_weight(combined, &latest, next_month_date);

        PredictionReport {
            has_enough_data: true,
            next_month_prediction: Some(next_month_prediction),
            next_month_date: Some(next_month_date),
            goal_date,
            goal_date_90,
            goal_predictions,
            daily_weight_loss: Some(round_to(combined.abs(), 3)),
            confidence,
            trend: Some(if combined < 0.0 {
                Trend::Losing
            } else {
                Trend::Gaining
            }),
            entry_count: samples.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use prediction_spi::GoalKind;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn spaced_samples(latest: NaiveDate, step_days: i64, weights: &[f64]) -> Vec<WeightSample> {
        let n = weights.len() as i64;
        weights
            .iter()
            .enumerate()
            .map(|(i, &w)| {
                let back = (n - 1 - i as i64) * step_days;
                WeightSample::new(latest - Duration::days(back), w)
            })
            .collect()
    }

    #[test]
    fn test_no_samples_short_circuits() {
        let engine = PredictionEngine::new();
        let report = engine.report(&[], &[], date(2025, 8, 9));

        assert!(!report.has_enough_data);
        assert_eq!(report.entry_count, 0);
        assert_eq!(report.confidence, 0.0);
    }

    #[test]
    fn test_single_sample_short_circuits() {
        let engine = PredictionEngine::new();
        let samples = [WeightSample::new(date(2025, 8, 9), 104.0)];
        let report = engine.report(&samples, &[], date(2025, 8, 9));

        assert!(!report.has_enough_data);
        assert!(report.next_month_prediction.is_none());
        assert!(report.trend.is_none());
        assert_eq!(report.entry_count, 1);
    }

    #[test]
    fn test_slopes_on_perfect_decline() {
        let engine = PredictionEngine::new();
        let samples = spaced_samples(date(2025, 8, 9), 10, &[120.0, 118.0, 116.0, 114.0]);

        let slopes = engine.slopes(&samples).unwrap();

        assert!((slopes.overall - (-0.2)).abs() < 1e-10);
        assert!((slopes.recent - (-0.2)).abs() < 1e-10);
        assert!((slopes.weighted - (-0.2)).abs() < 1e-10);
        assert!((slopes.combined - (-0.2)).abs() < 1e-10);
        assert_eq!(slopes.window_len, 4);
    }

    #[test]
    fn test_slopes_none_below_minimum() {
        let engine = PredictionEngine::new();
        assert!(engine.slopes(&[]).is_none());
        assert!(engine
            .slopes(&[WeightSample::new(date(2025, 8, 9), 104.0)])
            .is_none());
    }

    #[test]
    fn test_declining_report() {
        let engine = PredictionEngine::new();
        let today = date(2025, 8, 9);
        let samples = spaced_samples(today, 10, &[120.0, 118.0, 116.0, 114.0]);

        let report = engine.report(&samples, &[], today);

        assert!(report.has_enough_data);
        assert_eq!(report.trend, Some(Trend::Losing));
        assert!(report.daily_weight_loss.unwrap() > 0.0);
        assert!(report.next_month_prediction.unwrap() < 114.0);
        assert_eq!(report.next_month_date, Some(date(2025, 9, 1)));
        assert!(report.goal_date.is_some());
        assert_eq!(report.entry_count, 4);
    }

    #[test]
    fn test_rising_report_has_no_legacy_dates() {
        let engine = PredictionEngine::new();
        let today = date(2025, 8, 9);
        let samples = spaced_samples(today, 10, &[110.0, 112.0, 114.0, 116.0]);

        let report = engine.report(&samples, &[], today);

        assert_eq!(report.trend, Some(Trend::Gaining));
        assert!(report.next_month_prediction.unwrap() > 116.0);
        assert!(report.goal_date.is_none());
        assert!(report.goal_date_90.is_none());
    }

    #[test]
    fn test_constant_series_is_flat_and_unconfident() {
        let engine = PredictionEngine::new();
        let today = date(2025, 8, 9);
        let samples = spaced_samples(today, 5, &[100.0; 8]);

        let slopes = engine.slopes(&samples).unwrap();
        assert_eq!(slopes.combined, 0.0);

        let report = engine.report(&samples, &[], today);
        assert_eq!(report.confidence, 0.0);
        // Zero slope classifies as gaining: the check is strictly `< 0`.
        assert_eq!(report.trend, Some(Trend::Gaining));
        assert_eq!(report.daily_weight_loss, Some(0.0));
    }

    #[test]
    fn test_goals_suppress_legacy_dates() {
        let engine = PredictionEngine::new();
        let today = date(2025, 8, 9);
        let samples = spaced_samples(today, 10, &[120.0, 118.0, 116.0, 114.0]);
        let goals = vec![WeightGoal::new(1, 110.0, GoalKind::Lose)];

        let report = engine.report(&samples, &goals, today);

        assert!(report.goal_date.is_none());
        assert!(report.goal_date_90.is_none());
        assert_eq!(report.goal_predictions.len(), 1);
        assert!(report.goal_predictions[0].prediction_date.is_some());
    }

    #[test]
    fn test_confidence_stays_in_bounds() {
        let engine = PredictionEngine::new();
        let today = date(2025, 8, 9);

        let histories: Vec<Vec<f64>> = vec![
            vec![120.0, 118.0, 116.0, 114.0],
            vec![100.0, 100.4, 99.8, 100.2, 100.1, 99.9],
            vec![90.0; 12],
            vec![80.0, 95.0, 78.0, 99.0, 77.0],
        ];

        for weights in histories {
            let samples = spaced_samples(today, 3, &weights);
            let report = engine.report(&samples, &[], today);
            assert!(report.confidence >= 0.0 && report.confidence <= 100.0);
        }
    }

    #[test]
    fn test_perfectly_linear_history_is_fully_confident() {
        let engine = PredictionEngine::new();
        let today = date(2025, 8, 9);
        let weights: Vec<f64> = (0..10).map(|i| 120.0 - 0.4 * i as f64).collect();
        let samples = spaced_samples(today, 2, &weights);

        let report = engine.report(&samples, &[], today);
        assert!((report.confidence - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_same_day_history_degenerates_gracefully() {
        let engine = PredictionEngine::new();
        let today = date(2025, 8, 9);
        let samples = vec![
            WeightSample::new(today, 104.0),
            WeightSample::new(today, 104.6),
            WeightSample::new(today, 103.8),
        ];

        let report = engine.report(&samples, &[], today);

        assert!(report.has_enough_data);
        assert_eq!(report.daily_weight_loss, Some(0.0));
        assert!(report.next_month_prediction.unwrap().is_finite());
        assert_eq!(report.trend, Some(Trend::Gaining));
    }

    #[test]
    fn test_stale_history_extrapolates_to_next_month() {
        // Latest sample months before "today": the projection still runs,
        // anchored to the injected date.
        let engine = PredictionEngine::new();
        let latest = date(2025, 3, 15);
        let samples = spaced_samples(latest, 7, &[110.0, 109.0, 108.0, 107.0, 106.0]);

        let report = engine.report(&samples, &[], date(2025, 8, 9));

        assert_eq!(report.next_month_date, Some(date(2025, 9, 1)));
        // ~170 days of further decline at ~1/7 kg per day.
        assert!(report.next_month_prediction.unwrap() < 90.0);
    }
}
