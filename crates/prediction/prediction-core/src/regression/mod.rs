//! Regression strategies for trend estimation
//!
//! Two closed-form fits over day-offset / weight pairs:
//!
//! - **Ordinary least squares**: the stable, full-history baseline
//! - **Exponentially weighted least squares**: favors recent observations

pub mod linear;
pub mod weighted;

pub use linear::least_squares;
pub use weighted::{recency_weights, weighted_least_squares};
