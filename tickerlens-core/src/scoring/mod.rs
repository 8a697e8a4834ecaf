//! Multi-factor scoring — Trend, Mean-Reversion, Sentiment.
//!
//! Each factor maps the latest indicator point to {-1, 0, +1}. The weighted
//! sum of the factors is the total score, which is thresholded into a
//! verdict. Scoring is a pure function of its arguments; nothing is cached.
//!
//! # Absent-indicator policy
//! Comparisons against an absent moving average evaluate to false, which
//! yields the bearish -1 for both the trend factor and the fallback
//! sentiment factor.

pub mod factors;

pub use factors::{
    mean_reversion_score, sentiment_score, trend_score, SENTIMENT_BAND, Z_SCORE_EXTREME,
};

use crate::domain::{AnalystConsensus, IndicatorPoint, ScoreResult, Verdict, Weights};
use crate::sizers::recommended_position;

/// Weighted total of the three factor scores.
pub fn total_score(trend: i8, rev: i8, sentiment: i8, weights: &Weights) -> f64 {
    trend as f64 * weights.trend
        + rev as f64 * weights.mean_rev
        + sentiment as f64 * weights.sentiment
}

/// Score the latest point against its predecessor.
///
/// `consensus` is optional: without it (or with zero analysts) sentiment
/// falls back to price versus SMA50.
pub fn score(
    current: &IndicatorPoint,
    previous: &IndicatorPoint,
    consensus: Option<&AnalystConsensus>,
    weights: &Weights,
) -> ScoreResult {
    let trend = trend_score(current);
    let rev = mean_reversion_score(current);
    let sentiment = sentiment_score(current, consensus);
    let total = total_score(trend, rev, sentiment, weights);

    ScoreResult {
        trend_score: trend,
        rev_score: rev,
        sentiment_score: sentiment,
        total_score: total,
        position_size: recommended_position(current, previous, total),
        verdict: Verdict::from_total(total),
    }
}
