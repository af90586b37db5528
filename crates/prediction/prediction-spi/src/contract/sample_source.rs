//! Trait for weight sample retrieval

use crate::error::Result;
use crate::model::WeightSample;

/// Data source for the weight history
///
/// Implementations must return samples ordered by ascending date; the
/// engine relies on that order and does not re-sort. Duplicate dates are
/// fine. Returning an empty vector is valid and yields the
/// insufficient-data report downstream.
///
/// # Example
///
/// ```rust,ignore
/// use prediction_spi::{SampleSource, WeightSample};
///
/// fn count(source: &dyn SampleSource) -> prediction_spi::Result<usize> {
///     Ok(source.samples()?.len())
/// }
/// ```
pub trait SampleSource: Send + Sync {
    /// All recorded samples, ordered by ascending date
    fn samples(&self) -> Result<Vec<WeightSample>>;
}
