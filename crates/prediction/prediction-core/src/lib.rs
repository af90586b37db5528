//! Prediction Core
//!
//! Implementations of the weight trend engine: day-offset series
//! preparation, the three regression strategies, recent-window selection,
//! slope blending, confidence scoring, and goal projection.
//!
//! The engine is a pure function over its inputs: no I/O, no shared state,
//! no suspension points. One invocation runs to completion synchronously
//! and retains nothing.

pub mod blend;
pub mod confidence;
pub mod engine;
pub mod progress;
pub mod projection;
pub mod regression;
pub mod series;
pub mod utils;
pub mod window;

// Re-export SPI types for implementations
pub use prediction_spi::{
    GoalKind, GoalPrediction, GoalStatus, PredictionReport, RegressionFit, Result, SourceError,
    Trend, WeightGoal, WeightSample,
};

// Re-export main types
pub use blend::SlopeComponents;
pub use engine::PredictionEngine;
pub use series::DaySeries;
