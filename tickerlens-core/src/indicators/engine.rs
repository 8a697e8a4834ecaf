//! Indicator engine — annotates a full price series, then keeps the display window.
//!
//! Indicators are computed over the entire input before truncation so that
//! windowed values at the start of the visible range see their full history.

use super::{Bollinger, Indicator, Rsi, Sma, NEUTRAL_RSI};
use crate::domain::{IndicatorPoint, PricePoint};

/// Number of most recent points returned to callers.
pub const DISPLAY_WINDOW: usize = 200;

pub const SMA_FAST_PERIOD: usize = 50;
pub const SMA_SLOW_PERIOD: usize = 200;
pub const RSI_PERIOD: usize = 14;
pub const BOLLINGER_PERIOD: usize = 20;
pub const BOLLINGER_MULTIPLIER: f64 = 2.0;

/// Annotate `series` with SMA50, SMA200, RSI14, Bollinger(20, 2) and z-score.
///
/// Returns `min(series.len(), DISPLAY_WINDOW)` points, the most recent ones.
/// Total: short inputs produce absent windowed values, never an error.
pub fn compute_indicators(series: &[PricePoint]) -> Vec<IndicatorPoint> {
    let sma_fast = Sma::new(SMA_FAST_PERIOD).compute(series);
    let sma_slow = Sma::new(SMA_SLOW_PERIOD).compute(series);
    let rsi = Rsi::new(RSI_PERIOD).compute(series);
    let bb_upper = Bollinger::upper(BOLLINGER_PERIOD, BOLLINGER_MULTIPLIER).compute(series);
    let bb_lower = Bollinger::lower(BOLLINGER_PERIOD, BOLLINGER_MULTIPLIER).compute(series);
    let z_score = Bollinger::z_score(BOLLINGER_PERIOD).compute(series);

    let start = series.len().saturating_sub(DISPLAY_WINDOW);

    series
        .iter()
        .enumerate()
        .skip(start)
        .map(|(i, point)| IndicatorPoint {
            date: point.date,
            price: point.price,
            volume: point.volume,
            sma50: sma_fast[i],
            sma200: sma_slow[i],
            rsi: rsi[i].unwrap_or(NEUTRAL_RSI),
            bb_upper: bb_upper[i],
            bb_lower: bb_lower[i],
            z_score: z_score[i].unwrap_or(0.0),
        })
        .collect()
}

/// The latest point and its predecessor, the pair the scorer consumes.
///
/// A single-point series pairs the point with itself. Empty input yields `None`.
pub fn latest_pair(points: &[IndicatorPoint]) -> Option<(IndicatorPoint, IndicatorPoint)> {
    match points {
        [] => None,
        [only] => Some((*only, *only)),
        [.., previous, current] => Some((*current, *previous)),
    }
}
