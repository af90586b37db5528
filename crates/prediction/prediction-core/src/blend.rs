//! Three-strategy slope blending
//!
//! The trend exposed downstream is a fixed-weight blend of three slope
//! estimates: the full-history OLS slope for stability, the recent-window
//! slope for responsiveness, and the exponentially weighted slope as a
//! balance between the two. The weights are fixed heuristics; changing
//! them changes observable predictions.

use serde::Serialize;

use crate::window::RELIABLE_WINDOW;

/// Fixed share of the exponentially weighted slope
const WEIGHTED_WEIGHT: f64 = 0.4;

/// Share of the recent-window slope when the window is well populated
const RECENT_WEIGHT_STRONG: f64 = 0.5;

/// Share of the recent-window slope when the window is thin
const RECENT_WEIGHT_WEAK: f64 = 0.3;

/// The three strategy slopes and their blend, in kg per day
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SlopeComponents {
    /// OLS slope over the full history
    pub overall: f64,
    /// OLS slope over the recent window; equals `overall` when the window
    /// holds fewer than two samples
    pub recent: f64,
    /// Exponentially weighted slope over the full history
    pub weighted: f64,
    /// The blended slope used for every projection
    pub combined: f64,
    /// Size of the selected recent window
    pub window_len: usize,
}

/// Blend the three strategy slopes with fixed, window-size-dependent weights
pub fn combine_slopes(overall: f64, recent: f64, weighted: f64, window_len: usize) -> f64 {
    let recent_weight = if window_len >= RELIABLE_WINDOW {
        RECENT_WEIGHT_STRONG
    } else {
        RECENT_WEIGHT_WEAK
    };
    let overall_weight = 1.0 - recent_weight - WEIGHTED_WEIGHT;

    recent * recent_weight + weighted * WEIGHTED_WEIGHT + overall * overall_weight
}
