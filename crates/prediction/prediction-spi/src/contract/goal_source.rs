//! Trait for goal retrieval

use crate::error::Result;
use crate::model::WeightGoal;

/// Data source for currently-active weight goals
///
/// "Active" is the caller's bookkeeping: goals already achieved or
/// abandoned must not be returned. An empty vector switches the engine to
/// its legacy fixed-threshold milestones.
pub trait GoalSource: Send + Sync {
    /// All active goals, in the caller's preferred order
    fn active_goals(&self) -> Result<Vec<WeightGoal>>;
}
