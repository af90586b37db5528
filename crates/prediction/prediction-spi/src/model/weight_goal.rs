//! Weight goal model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Direction of a weight goal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GoalKind {
    /// Reach a target below the current weight
    Lose,
    /// Reach a target above the current weight
    Gain,
    /// Stay close to the target weight
    Maintain,
}

/// Lifecycle state of a goal
///
/// The engine only ever receives active goals; the full lifecycle lives
/// here so sources can model their bookkeeping with the same type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GoalStatus {
    /// Being pursued
    Active,
    /// Target reached
    Achieved,
    /// Given up by the user
    Abandoned,
}

/// A weight goal specification
///
/// Ownership stays with the caller; the engine reads goals and reports on
/// them but never mutates or retains them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightGoal {
    /// Caller-assigned identifier
    pub id: u64,
    /// Target weight in kilograms
    pub target_weight_kg: f64,
    /// Goal direction
    pub kind: GoalKind,
    /// Lifecycle state
    #[serde(default = "GoalStatus::active")]
    pub status: GoalStatus,
    /// Free-form description
    #[serde(default)]
    pub description: Option<String>,
    /// Weight when the goal was set, used for progress tracking
    #[serde(default)]
    pub starting_weight_kg: Option<f64>,
    /// Self-imposed deadline
    #[serde(default)]
    pub target_date: Option<NaiveDate>,
    /// Date the goal was created
    #[serde(default)]
    pub created_date: Option<NaiveDate>,
}

impl GoalStatus {
    fn active() -> Self {
        GoalStatus::Active
    }
}

impl WeightGoal {
    /// Create a goal with only the fields the engine requires
    pub fn new(id: u64, target_weight_kg: f64, kind: GoalKind) -> Self {
        Self {
            id,
            target_weight_kg,
            kind,
            status: GoalStatus::Active,
            description: None,
            starting_weight_kg: None,
            target_date: None,
            created_date: None,
        }
    }

    /// Attach a description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Attach the starting weight used for progress tracking
    pub fn with_starting_weight(mut self, weight_kg: f64) -> Self {
        self.starting_weight_kg = Some(weight_kg);
        self
    }

    /// Attach a target date
    pub fn with_target_date(mut self, date: NaiveDate) -> Self {
        self.target_date = Some(date);
        self
    }
}
