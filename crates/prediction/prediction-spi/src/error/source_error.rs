//! Data source error types
//!
//! Only the collaborators that feed the engine can fail. The engine itself
//! is total: insufficient history, degenerate regressions, and unreachable
//! goals are steady states encoded in the report, never errors.

use thiserror::Error;

/// Result type alias for data source operations
pub type Result<T> = std::result::Result<T, SourceError>;

/// Errors that can occur while retrieving samples or goals
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SourceError {
    /// The underlying store could not be reached
    #[error("Source unavailable: {reason}")]
    Unavailable { reason: String },

    /// A record could not be decoded into a model
    #[error("Malformed record: {reason}")]
    Malformed { reason: String },

    /// Samples were not ordered by ascending date
    #[error("Sample out of order at index {index}")]
    OutOfOrder { index: usize },
}
