//! Recent-window selection
//!
//! The short-term trend and the confidence score both run on a recency
//! window rather than the full history. Two candidates compete: the samples
//! dated within the last 30 days, and the last 10 samples regardless of
//! span. Whichever holds more observations wins; ties go to the
//! date-bounded window.

use chrono::Duration;
use prediction_spi::WeightSample;

/// Date span of the recency window, in days
const RECENT_SPAN_DAYS: i64 = 30;

/// Entry-count alternative when the date span is sparsely sampled
const RECENT_MAX_ENTRIES: usize = 10;

/// Minimum window size for the window to drive blending and confidence
pub const RELIABLE_WINDOW: usize = 5;

/// Select the sample suffix most relevant to the short-term trend
///
/// Because samples arrive in ascending date order, both candidate windows
/// are suffixes of the input slice, so selection reduces to picking the
/// earlier start index. The returned slice borrows from the input; callers
/// re-anchor it before regression.
pub fn recent_window(samples: &[WeightSample]) -> &[WeightSample] {
    let Some(latest) = samples.last() else {
        return samples;
    };

    let cutoff = latest.date - Duration::days(RECENT_SPAN_DAYS);
    let by_date_start = samples.partition_point(|s| s.date < cutoff);
    let by_count_start = samples.len().saturating_sub(RECENT_MAX_ENTRIES);

    if by_date_start <= by_count_start {
        &samples[by_date_start..]
    } else {
        &samples[by_count_start..]
    }
}
