//! Factor weights, verdicts, and score results.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Total score must exceed this magnitude to produce a directional verdict.
pub const VERDICT_THRESHOLD: f64 = 0.2;

/// Per-factor weights. The engine does not normalize them; the total score
/// scales with whatever is supplied.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Weights {
    pub trend: f64,
    pub mean_rev: f64,
    pub sentiment: f64,
}

impl Weights {
    pub fn new(trend: f64, mean_rev: f64, sentiment: f64) -> Self {
        Self {
            trend,
            mean_rev,
            sentiment,
        }
    }

    pub fn is_finite(&self) -> bool {
        self.trend.is_finite() && self.mean_rev.is_finite() && self.sentiment.is_finite()
    }
}

impl Default for Weights {
    fn default() -> Self {
        Self::new(0.4, 0.3, 0.3)
    }
}

/// Categorical recommendation derived from the thresholded total score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Verdict {
    Buy,
    Sell,
    Neutral,
}

impl Verdict {
    pub fn from_total(total_score: f64) -> Self {
        if total_score > VERDICT_THRESHOLD {
            Verdict::Buy
        } else if total_score < -VERDICT_THRESHOLD {
            Verdict::Sell
        } else {
            Verdict::Neutral
        }
    }

    pub fn is_directional(&self) -> bool {
        !matches!(self, Verdict::Neutral)
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Verdict::Buy => "BUY",
            Verdict::Sell => "SELL",
            Verdict::Neutral => "NEUTRAL",
        };
        f.write_str(s)
    }
}

/// Output of the factor scorer for one evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreResult {
    pub trend_score: i8,
    pub rev_score: i8,
    pub sentiment_score: i8,
    pub total_score: f64,
    /// Recommended exposure as a percentage in [0, 25].
    pub position_size: f64,
    pub verdict: Verdict,
}
