//! End-to-end tests for the prediction stack
//!
//! Exercises the consumer wiring (sources, clock, engine, report) and the
//! report's wire format, using only this crate's API.

use chrono::{Duration, NaiveDate};
use prediction_facade::prelude::*;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn weekly_decline(latest: NaiveDate, count: usize, start_kg: f64) -> Vec<WeightSample> {
    (0..count)
        .map(|i| {
            let back = (count - 1 - i) as i64 * 7;
            WeightSample::new(latest - Duration::days(back), start_kg - 0.5 * i as f64)
        })
        .collect()
}

#[test]
fn e2e_predictor_produces_a_full_report() {
    let today = date(2025, 8, 9);
    let samples = weekly_decline(today, 12, 112.0);
    let goals = vec![
        WeightGoal::new(1, 100.0, GoalKind::Lose)
            .with_description("doctor's recommendation")
            .with_starting_weight(112.0),
        WeightGoal::new(2, 104.0, GoalKind::Maintain),
    ];

    let predictor = WeightPredictor::new(
        VecSampleSource(samples),
        VecGoalSource(goals),
        FixedClock(today),
    );
    let report = predictor.run().unwrap();

    assert!(report.has_enough_data);
    assert_eq!(report.entry_count, 12);
    assert_eq!(report.trend, Some(Trend::Losing));
    assert_eq!(report.next_month_date, Some(date(2025, 9, 1)));
    assert!(report.confidence > 90.0);

    // Both goals are reported; the lose goal projects forward.
    assert_eq!(report.goal_predictions.len(), 2);
    assert!(report.goal_predictions[0].prediction_date.unwrap() > today);
    assert_eq!(
        report.goal_predictions[0].description.as_deref(),
        Some("doctor's recommendation")
    );

    // Configured goals suppress the legacy milestones.
    assert!(report.goal_date.is_none());
    assert!(report.goal_date_90.is_none());
}

#[test]
fn e2e_report_wire_format_is_stable() {
    let today = date(2025, 8, 9);
    let predictor = WeightPredictor::new(
        VecSampleSource(weekly_decline(today, 8, 108.0)),
        VecGoalSource(vec![WeightGoal::new(4, 100.0, GoalKind::Lose)]),
        FixedClock(today),
    );
    let report = predictor.run().unwrap();

    let json = serde_json::to_value(&report).unwrap();

    assert_eq!(json["hasEnoughData"], true);
    assert_eq!(json["entryCount"], 8);
    assert_eq!(json["trend"], "losing");
    assert_eq!(json["nextMonthDate"], "2025-09-01");
    assert!(json["nextMonthPrediction"].is_number());
    assert!(json["dailyWeightLoss"].is_number());
    assert!(json["goalPredictions"].is_array());
    assert_eq!(json["goalPredictions"][0]["kind"], "lose");
    // Suppressed legacy fields serialize as explicit nulls.
    assert!(json["goalDate"].is_null());
    assert!(json["goalDate90"].is_null());
}

#[test]
fn e2e_report_roundtrips_through_json() {
    let today = date(2025, 8, 9);
    let predictor = WeightPredictor::new(
        VecSampleSource(weekly_decline(today, 10, 110.0)),
        VecGoalSource(Vec::new()),
        FixedClock(today),
    );
    let report = predictor.run().unwrap();

    let json = serde_json::to_string(&report).unwrap();
    let back: PredictionReport = serde_json::from_str(&json).unwrap();

    assert_eq!(back, report);
}

#[test]
fn e2e_rounding_matches_report_contract() {
    let today = date(2025, 8, 9);
    // Slightly noisy decline so the slope carries many decimals.
    let samples: Vec<WeightSample> = (0..10)
        .map(|i| {
            let noise = if i % 2 == 0 { 0.07 } else { -0.04 };
            WeightSample::new(
                today - Duration::days((9 - i) as i64 * 3),
                110.0 - 0.37 * i as f64 + noise,
            )
        })
        .collect();

    let predictor = WeightPredictor::new(
        VecSampleSource(samples),
        VecGoalSource(Vec::new()),
        FixedClock(today),
    );
    let report = predictor.run().unwrap();

    let next_month = report.next_month_prediction.unwrap();
    assert_eq!((next_month * 100.0).round() / 100.0, next_month);

    let daily = report.daily_weight_loss.unwrap();
    assert_eq!((daily * 1000.0).round() / 1000.0, daily);

    assert_eq!((report.confidence * 10.0).round() / 10.0, report.confidence);
}

#[test]
fn e2e_insufficient_history_flows_through_the_predictor() {
    let today = date(2025, 8, 9);
    let predictor = WeightPredictor::new(
        VecSampleSource(vec![WeightSample::new(today, 104.2)]),
        VecGoalSource(vec![WeightGoal::new(1, 100.0, GoalKind::Lose)]),
        FixedClock(today),
    );

    let report = predictor.run().unwrap();

    assert!(!report.has_enough_data);
    assert!(report.goal_predictions.is_empty());
    assert_eq!(report.entry_count, 1);
}

#[test]
fn e2e_goal_source_failure_reaches_the_caller() {
    struct BrokenGoals;
    impl GoalSource for BrokenGoals {
        fn active_goals(&self) -> Result<Vec<WeightGoal>> {
            Err(SourceError::Unavailable {
                reason: "goal store offline".to_string(),
            })
        }
    }

    let today = date(2025, 8, 9);
    let predictor = WeightPredictor::new(
        VecSampleSource(weekly_decline(today, 5, 106.0)),
        BrokenGoals,
        FixedClock(today),
    );

    let err = predictor.run().unwrap_err();
    assert!(err.to_string().contains("goal store offline"));
}
