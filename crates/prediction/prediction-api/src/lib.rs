//! Prediction Consumer API
//!
//! Consumer-facing wiring for the weight trend prediction stack.
//!
//! This crate provides:
//! - [`WeightPredictor`]: binds sample and goal sources plus a clock to the
//!   pure engine
//! - In-memory source adapters for embedding and tests
//! - Re-exports from SPI and core for convenience

// Re-export from core
pub use prediction_core::{
    blend, confidence, engine, progress, projection, regression, series, utils, window,
    DaySeries, PredictionEngine, SlopeComponents,
};

// Re-export models and traits from SPI
pub use prediction_spi::{
    Clock, FixedClock, GoalKind, GoalPrediction, GoalSource, GoalStatus, PredictionReport,
    RegressionFit, Result, SampleSource, SourceError, SystemClock, Trend, WeightGoal,
    WeightSample,
};

/// Binds the engine to its data sources and clock
///
/// The engine itself is pure; this type is the only place the boundary
/// collaborators meet it. Each [`run`](WeightPredictor::run) pulls a fresh
/// snapshot from both sources, so the predictor can be long-lived while the
/// engine stays stateless.
pub struct WeightPredictor<S, G, C> {
    samples: S,
    goals: G,
    clock: C,
    engine: PredictionEngine,
}

impl<S, G, C> WeightPredictor<S, G, C>
where
    S: SampleSource,
    G: GoalSource,
    C: Clock,
{
    /// Wire a predictor from its collaborators
    pub fn new(samples: S, goals: G, clock: C) -> Self {
        Self {
            samples,
            goals,
            clock,
            engine: PredictionEngine::new(),
        }
    }

    /// Pull both collections and produce a report
    ///
    /// Fails only when a source fails; the engine itself cannot.
    pub fn run(&self) -> Result<PredictionReport> {
        let samples = self.samples.samples()?;
        let goals = self.goals.active_goals()?;
        Ok(self.engine.report(&samples, &goals, self.clock.today()))
    }
}

/// Sample source over an in-memory vector
///
/// The vector must already be ordered by ascending date.
pub struct VecSampleSource(pub Vec<WeightSample>);

impl SampleSource for VecSampleSource {
    fn samples(&self) -> Result<Vec<WeightSample>> {
        Ok(self.0.clone())
    }
}

/// Goal source over an in-memory vector
pub struct VecGoalSource(pub Vec<WeightGoal>);

impl GoalSource for VecGoalSource {
    fn active_goals(&self) -> Result<Vec<WeightGoal>> {
        Ok(self.0.clone())
    }
}

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{VecGoalSource, VecSampleSource, WeightPredictor};
    pub use prediction_core::{DaySeries, PredictionEngine, SlopeComponents};
    pub use prediction_spi::{
        Clock, FixedClock, GoalKind, GoalPrediction, GoalSource, GoalStatus, PredictionReport,
        RegressionFit, Result, SampleSource, SourceError, SystemClock, Trend, WeightGoal,
        WeightSample,
    };
}
