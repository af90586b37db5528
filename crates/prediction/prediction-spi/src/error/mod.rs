//! Prediction error types

mod source_error;

pub use source_error::{Result, SourceError};
