//! Goal progress bookkeeping
//!
//! Progress and achievement are computed against the latest recorded
//! weight only. This is bookkeeping over the goal itself, independent of
//! the trend engine's slopes.

use chrono::NaiveDate;
use prediction_spi::{GoalKind, WeightGoal};

/// Tolerance for calling a maintain goal achieved, kg
const MAINTAIN_TOLERANCE_KG: f64 = 1.0;

/// Distance under which a goal counts as already at target, kg
const AT_TARGET_EPS_KG: f64 = 0.1;

/// Percentage progress toward a goal, clamped to `[0, 100]`
///
/// Lose and gain goals measure linear distance covered from the starting
/// weight; without a recorded starting weight there is nothing to measure
/// and progress is 0. Maintain goals score proximity: at 1 kg or more from
/// target, progress is 0.
pub fn progress_percent(goal: &WeightGoal, latest_kg: f64) -> f64 {
    let Some(starting) = goal.starting_weight_kg else {
        return 0.0;
    };

    let total = goal.target_weight_kg - starting;
    let covered = latest_kg - starting;

    if total.abs() < AT_TARGET_EPS_KG {
        return 100.0;
    }

    let progress = match goal.kind {
        GoalKind::Lose => (-covered) / (-total) * 100.0,
        GoalKind::Gain => covered / total * 100.0,
        GoalKind::Maintain => {
            let distance = (latest_kg - goal.target_weight_kg).abs();
            ((1.0 - distance) * 100.0).max(0.0)
        }
    };

    progress.clamp(0.0, 100.0)
}

/// Whether the latest weight satisfies the goal
pub fn is_achieved(goal: &WeightGoal, latest_kg: f64) -> bool {
    match goal.kind {
        GoalKind::Lose => latest_kg <= goal.target_weight_kg,
        GoalKind::Gain => latest_kg >= goal.target_weight_kg,
        GoalKind::Maintain => {
            (latest_kg - goal.target_weight_kg).abs() <= MAINTAIN_TOLERANCE_KG
        }
    }
}

/// Whole days from `today` until the goal's target date
///
/// Negative once the date has passed; `None` for open-ended goals.
pub fn days_to_target(goal: &WeightGoal, today: NaiveDate) -> Option<i64> {
    goal.target_date
        .map(|target| target.signed_duration_since(today).num_days())
}
