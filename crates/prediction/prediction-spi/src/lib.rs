//! Prediction Service Provider Interface
//!
//! Defines the contracts, models, and error types for the weight trend
//! prediction stack:
//!
//! - [`SampleSource`] / [`GoalSource`]: boundary collaborators feeding the engine
//! - [`Clock`]: injectable calendar date for deterministic projections
//! - [`PredictionReport`]: the fixed-shape result record
//! - [`SourceError`]: standardized error type for data source failures

pub mod contract;
pub mod error;
pub mod model;

// Re-export all public items at crate root for convenience
pub use contract::{Clock, FixedClock, GoalSource, SampleSource, SystemClock};
pub use error::{Result, SourceError};
pub use model::{
    GoalKind, GoalPrediction, GoalStatus, PredictionReport, RegressionFit, Trend, WeightGoal,
    WeightSample,
};
