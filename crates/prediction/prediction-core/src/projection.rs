//! Goal and calendar projections
//!
//! Turns the blended slope into calendar dates: one optional date per goal,
//! the legacy fixed-threshold milestones, and the next-month point
//! estimate. Every outcome is a value or an explicit absence; a goal whose
//! trend contradicts it is reported, not dropped.

use chrono::{Datelike, Duration, NaiveDate};
use prediction_spi::{GoalKind, GoalPrediction, WeightGoal, WeightSample};

use crate::series::day_offset;
use crate::utils::round_to;

/// Legacy milestone thresholds evaluated when no goals are configured, kg
const LEGACY_THRESHOLD_100: f64 = 100.0;
const LEGACY_THRESHOLD_90: f64 = 90.0;

/// Weight-proximity band for maintain goals, kg
const MAINTAIN_BAND_KG: f64 = 5.0;

/// Whether a goal's direction is consistent with the current trend
fn should_predict(goal: &WeightGoal, slope: f64, current_kg: f64) -> bool {
    match goal.kind {
        GoalKind::Lose => slope < 0.0 && current_kg > goal.target_weight_kg,
        GoalKind::Gain => slope > 0.0 && current_kg < goal.target_weight_kg,
        GoalKind::Maintain => (current_kg - goal.target_weight_kg).abs() <= MAINTAIN_BAND_KG,
    }
}

/// Date at which the trend line reaches `target_kg`, if it lies ahead
///
/// Absent for a flat slope and for crossings at or before the latest
/// sample (non-positive day counts).
fn crossing_date(slope: f64, latest: &WeightSample, target_kg: f64) -> Option<NaiveDate> {
    if slope == 0.0 {
        return None;
    }

    let days_to_goal = (target_kg - latest.weight_kg) / slope;
    if days_to_goal > 0.0 {
        Some(latest.date + Duration::days(days_to_goal.round() as i64))
    } else {
        None
    }
}

/// Project every goal onto the combined trend
///
/// One output entry per input goal, in input order.
pub fn project_goals(
    slope: f64,
    latest: &WeightSample,
    goals: &[WeightGoal],
) -> Vec<GoalPrediction> {
    goals
        .iter()
        .map(|goal| {
            let prediction_date = if should_predict(goal, slope, latest.weight_kg) {
                crossing_date(slope, latest, goal.target_weight_kg)
            } else {
                None
            };

            GoalPrediction {
                id: goal.id,
                target_weight_kg: goal.target_weight_kg,
                kind: goal.kind,
                description: goal.description.clone(),
                prediction_date,
            }
        })
        .collect()
}

/// Legacy 100 kg / 90 kg milestone dates
///
/// Kept for callers predating configurable goals; only evaluated on a
/// falling trend from above the respective threshold.
pub fn legacy_goal_dates(
    slope: f64,
    latest: &WeightSample,
) -> (Option<NaiveDate>, Option<NaiveDate>) {
    if slope >= 0.0 {
        return (None, None);
    }

    let goal_date = (latest.weight_kg > LEGACY_THRESHOLD_100)
        .then(|| crossing_date(slope, latest, LEGACY_THRESHOLD_100))
        .flatten();
    let goal_date_90 = (latest.weight_kg > LEGACY_THRESHOLD_90)
        .then(|| crossing_date(slope, latest, LEGACY_THRESHOLD_90))
        .flatten();

    (goal_date, goal_date_90)
}

/// First day of the calendar month after `today`
///
/// Anchored to the injected "today", not the latest sample, so the
/// prediction stays tied to now even for stale histories.
pub fn next_month_start(today: NaiveDate) -> NaiveDate {
    let (year, month) = if today.month() == 12 {
        (today.year() + 1, 1)
    } else {
        (today.year(), today.month() + 1)
    };

    NaiveDate::from_ymd_opt(year, month, 1).expect("first of a month is a valid date")
}

/// Point estimate for the first of next month, two decimal places
///
/// The day offset from the latest sample may be negative when the sample
/// history runs ahead of "today"; the line is extrapolated backward in
/// that case.
pub fn next_month_weight(slope: f64, latest: &WeightSample, next_month: NaiveDate) -> f64 {
    let offset = day_offset(latest.date, next_month) as f64;
    round_to(latest.weight_kg + slope * offset, 2)
}
