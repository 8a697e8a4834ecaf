//! Analyst recommendation counts.

use serde::{Deserialize, Serialize};

/// Analyst recommendation counts for one reporting period.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalystConsensus {
    pub strong_buy: u32,
    pub buy: u32,
    pub hold: u32,
    pub sell: u32,
    pub strong_sell: u32,
}

impl AnalystConsensus {
    /// Number of analysts; summed in `u64` so no count can overflow it.
    pub fn total(&self) -> u64 {
        [self.strong_buy, self.buy, self.hold, self.sell, self.strong_sell]
            .iter()
            .map(|&c| u64::from(c))
            .sum()
    }

    /// Weighted net sentiment in [-1, 1], or `None` when nobody covers the ticker.
    ///
    /// Strong ratings count double: `(2·sb + b − s − 2·ss) / total`, clamped.
    pub fn net_sentiment(&self) -> Option<f64> {
        let total = self.total();
        if total == 0 {
            return None;
        }
        let raw = (2.0 * self.strong_buy as f64 + self.buy as f64
            - self.sell as f64
            - 2.0 * self.strong_sell as f64)
            / total as f64;
        Some(raw.clamp(-1.0, 1.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_consensus_has_no_sentiment() {
        assert_eq!(AnalystConsensus::default().net_sentiment(), None);
    }

    #[test]
    fn all_strong_buy_clamps_to_one() {
        let c = AnalystConsensus {
            strong_buy: 5,
            ..Default::default()
        };
        assert_eq!(c.net_sentiment(), Some(1.0));
    }

    #[test]
    fn mixed_consensus() {
        // (2*2 + 3 - 1 - 0) / 10 = 0.6
        let c = AnalystConsensus {
            strong_buy: 2,
            buy: 3,
            hold: 4,
            sell: 1,
            strong_sell: 0,
        };
        assert_eq!(c.total(), 10);
        assert!((c.net_sentiment().unwrap() - 0.6).abs() < 1e-12);
    }

    #[test]
    fn huge_counts_do_not_overflow() {
        let c = AnalystConsensus {
            strong_buy: u32::MAX,
            buy: 1,
            hold: u32::MAX,
            ..Default::default()
        };
        assert_eq!(c.total(), 2 * u32::MAX as u64 + 1);
        let net = c.net_sentiment().unwrap();
        assert!((0.0..=1.0).contains(&net));
    }
}
