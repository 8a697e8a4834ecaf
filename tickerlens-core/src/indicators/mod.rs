//! Indicator implementations and the indicator engine.
//!
//! Indicators are pure functions: price history in, one value per point out.
//! A value is `None` until the indicator's lookback window is satisfied.
//! Multi-series indicators (Bollinger) are exposed as separate instances per
//! band, keeping the single-series `Indicator` trait unchanged.

pub mod bollinger;
pub mod engine;
pub mod rsi;
pub mod sma;

pub use bollinger::{Bollinger, BollingerBand};
pub use engine::{compute_indicators, latest_pair, DISPLAY_WINDOW};
pub use rsi::{Rsi, NEUTRAL_RSI};
pub use sma::Sma;

use crate::domain::PricePoint;

/// Trait for indicators.
///
/// # Look-ahead contamination guard
/// No value at index t may depend on prices at t+1 or later. Computing over a
/// truncated series must reproduce the prefix of the full-series output.
pub trait Indicator: Send + Sync {
    /// Human-readable name (e.g., "sma_50", "rsi_14").
    fn name(&self) -> &str;

    /// Number of points needed before the indicator produces a windowed value.
    fn lookback(&self) -> usize;

    /// Compute the indicator for the whole series (same length as the input).
    fn compute(&self, series: &[PricePoint]) -> Vec<Option<f64>>;
}

/// Build a daily series from prices for testing.
#[cfg(test)]
pub fn make_series(prices: &[f64]) -> Vec<PricePoint> {
    let base_date = chrono::NaiveDate::from_ymd_opt(2024, 1, 2).unwrap();
    prices
        .iter()
        .enumerate()
        .map(|(i, &price)| {
            PricePoint::new(base_date + chrono::Duration::days(i as i64), price, 1000)
        })
        .collect()
}

/// Assert two f64 values are approximately equal (within epsilon).
#[cfg(test)]
pub fn assert_approx(actual: f64, expected: f64, epsilon: f64) {
    assert!(
        (actual - expected).abs() < epsilon,
        "assert_approx failed: actual={actual}, expected={expected}, diff={}, epsilon={epsilon}",
        (actual - expected).abs()
    );
}

/// Default epsilon for indicator tests.
#[cfg(test)]
pub const DEFAULT_EPSILON: f64 = 1e-10;
