//! Prediction report models
//!
//! The fixed-shape result record of a prediction call. Every field is either
//! a concrete value or an explicit `None`; the report is never partially
//! populated, and goals are never silently dropped from it.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::weight_goal::GoalKind;

/// Direction of the blended trend
///
/// A combined slope of exactly zero classifies as `Gaining`: the check is
/// strictly `slope < 0`. Preserved boundary behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    /// Combined slope below zero
    Losing,
    /// Combined slope at or above zero
    Gaining,
}

/// Projection outcome for a single goal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalPrediction {
    /// Identifier of the input goal
    pub id: u64,
    /// Target weight in kilograms
    pub target_weight_kg: f64,
    /// Goal direction
    pub kind: GoalKind,
    /// Description carried over from the input goal
    pub description: Option<String>,
    /// Date the trend line reaches the target, absent when the trend
    /// contradicts the goal or the crossing lies in the past
    pub prediction_date: Option<NaiveDate>,
}

/// Result of a prediction call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PredictionReport {
    /// Whether at least two samples were available
    pub has_enough_data: bool,
    /// Projected weight on the first of next month, 2 decimals
    pub next_month_prediction: Option<f64>,
    /// First day of the month after the injected "today"
    pub next_month_date: Option<NaiveDate>,
    /// Legacy 100 kg milestone date, only without configured goals
    pub goal_date: Option<NaiveDate>,
    /// Legacy 90 kg milestone date, only without configured goals
    pub goal_date_90: Option<NaiveDate>,
    /// One entry per input goal, in input order
    pub goal_predictions: Vec<GoalPrediction>,
    /// Absolute daily weight change in kg, 3 decimals
    pub daily_weight_loss: Option<f64>,
    /// Goodness of fit of the confidence window, 0-100, 1 decimal
    pub confidence: f64,
    /// Trend direction of the combined slope
    pub trend: Option<Trend>,
    /// Number of samples received
    pub entry_count: usize,
}

impl PredictionReport {
    /// The defined steady state for fewer than two samples
    ///
    /// Not an error: every optional is absent, confidence is zero, and the
    /// sample count is echoed back.
    pub fn insufficient(entry_count: usize) -> Self {
        Self {
            has_enough_data: false,
            next_month_prediction: None,
            next_month_date: None,
            goal_date: None,
            goal_date_90: None,
            goal_predictions: Vec::new(),
            daily_weight_loss: None,
            confidence: 0.0,
            trend: None,
            entry_count,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insufficient_report_shape() {
        let report = PredictionReport::insufficient(1);

        assert!(!report.has_enough_data);
        assert!(report.next_month_prediction.is_none());
        assert!(report.next_month_date.is_none());
        assert!(report.goal_date.is_none());
        assert!(report.goal_date_90.is_none());
        assert!(report.goal_predictions.is_empty());
        assert!(report.daily_weight_loss.is_none());
        assert_eq!(report.confidence, 0.0);
        assert!(report.trend.is_none());
        assert_eq!(report.entry_count, 1);
    }

    #[test]
    fn test_trend_wire_format() {
        assert_eq!(serde_json::to_string(&Trend::Losing).unwrap(), "\"losing\"");
        assert_eq!(
            serde_json::to_string(&Trend::Gaining).unwrap(),
            "\"gaining\""
        );
    }

    #[test]
    fn test_report_serializes_camel_case() {
        let report = PredictionReport::insufficient(0);
        let json = serde_json::to_string(&report).unwrap();

        assert!(json.contains("\"hasEnoughData\":false"));
        assert!(json.contains("\"nextMonthPrediction\":null"));
        assert!(json.contains("\"goalDate90\":null"));
        assert!(json.contains("\"dailyWeightLoss\":null"));
        assert!(json.contains("\"entryCount\":0"));
    }

    #[test]
    fn test_goal_prediction_keeps_absent_date() {
        let prediction = GoalPrediction {
            id: 9,
            target_weight_kg: 85.0,
            kind: GoalKind::Gain,
            description: None,
            prediction_date: None,
        };
        let json = serde_json::to_string(&prediction).unwrap();
        assert!(json.contains("\"predictionDate\":null"));
    }
}
