//! Relative Strength Index (RSI).
//!
//! RSI = 100 - 100 / (1 + avg_gain / avg_loss), with avg_loss of exactly 0
//! replaced by 1.
//!
//! Two phases:
//! - Bootstrap (indices 1..=period): gains and losses accumulate; the first
//!   computed value lands at index `period`. Earlier indices carry the
//!   neutral value 50 forward.
//! - Rolling (indices > period): sums over the trailing `period` deltas only.
//!   This is a plain windowed average, not Wilder smoothing.

use super::Indicator;
use crate::domain::PricePoint;

/// Value reported before the first RSI is computed.
pub const NEUTRAL_RSI: f64 = 50.0;

#[derive(Debug, Clone)]
pub struct Rsi {
    period: usize,
    name: String,
}

impl Rsi {
    pub fn new(period: usize) -> Self {
        assert!(period >= 1, "RSI period must be >= 1");
        Self {
            period,
            name: format!("rsi_{period}"),
        }
    }
}

impl Indicator for Rsi {
    fn name(&self) -> &str {
        &self.name
    }

    fn lookback(&self) -> usize {
        self.period
    }

    /// Every index carries a value; warmup indices hold `NEUTRAL_RSI`.
    fn compute(&self, series: &[PricePoint]) -> Vec<Option<f64>> {
        let n = series.len();
        let period = self.period as f64;
        let delta = |i: usize| series[i].price - series[i - 1].price;

        let mut result = Vec::with_capacity(n);
        let mut current = NEUTRAL_RSI;
        let mut gain_sum = 0.0;
        let mut loss_sum = 0.0;

        for i in 0..n {
            if i == 0 {
                // No prior delta
            } else if i <= self.period {
                let d = delta(i);
                if d > 0.0 {
                    gain_sum += d;
                } else {
                    loss_sum -= d;
                }
                if i == self.period {
                    current = compute_rsi(gain_sum / period, loss_sum / period);
                }
            } else {
                let (g, l) = ((i + 1 - self.period)..=i).map(delta).fold(
                    (0.0, 0.0),
                    |(g, l), d| if d > 0.0 { (g + d, l) } else { (g, l - d) },
                );
                current = compute_rsi(g / period, l / period);
            }
            result.push(Some(current));
        }

        result
    }
}

fn compute_rsi(avg_gain: f64, avg_loss: f64) -> f64 {
    let divisor = if avg_loss == 0.0 { 1.0 } else { avg_loss };
    100.0 - 100.0 / (1.0 + avg_gain / divisor)
}
