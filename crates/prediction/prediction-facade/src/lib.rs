//! Prediction Facade
//!
//! High-level API for the weight trend prediction stack. Re-exports all
//! public types from the prediction crates for convenient usage.

// Re-export everything from API (which includes SPI and core)
pub use prediction_api::*;

// Explicit re-exports for documentation
pub use prediction_api::prelude;

// Re-export core modules for direct access
pub use prediction_core::{
    blend, confidence, engine, progress, projection, regression, series, window,
};

// Re-export SPI traits and models
pub use prediction_spi::{
    Clock, FixedClock, GoalKind, GoalPrediction, GoalSource, GoalStatus, PredictionReport,
    RegressionFit, SampleSource, SourceError, SystemClock, Trend, WeightGoal, WeightSample,
};
