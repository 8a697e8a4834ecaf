//! Individual factor scores.

use crate::domain::{AnalystConsensus, IndicatorPoint};

/// |z| beyond which price is considered stretched.
pub const Z_SCORE_EXTREME: f64 = 2.0;

/// Net analyst sentiment must leave (-0.3, 0.3) to count as directional.
pub const SENTIMENT_BAND: f64 = 0.3;

/// `price > reference`, false when the reference is absent.
fn above(price: f64, reference: Option<f64>) -> bool {
    matches!(reference, Some(r) if price > r)
}

/// +1 above SMA200, otherwise -1 (including when SMA200 is absent).
pub fn trend_score(current: &IndicatorPoint) -> i8 {
    if above(current.price, current.sma200) {
        1
    } else {
        -1
    }
}

/// +1 when oversold (z < -2), -1 when overbought (z > 2), else 0.
pub fn mean_reversion_score(current: &IndicatorPoint) -> i8 {
    if current.z_score < -Z_SCORE_EXTREME {
        1
    } else if current.z_score > Z_SCORE_EXTREME {
        -1
    } else {
        0
    }
}

/// Analyst consensus when it covers at least one analyst, otherwise price
/// versus SMA50 (absent SMA50 → -1).
pub fn sentiment_score(current: &IndicatorPoint, consensus: Option<&AnalystConsensus>) -> i8 {
    match consensus.and_then(AnalystConsensus::net_sentiment) {
        Some(net) if net > SENTIMENT_BAND => 1,
        Some(net) if net < -SENTIMENT_BAND => -1,
        Some(_) => 0,
        None => {
            if above(current.price, current.sma50) {
                1
            } else {
                -1
            }
        }
    }
}
