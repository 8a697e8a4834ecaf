//! Volatility-target sizer
//!
//! Scales exposure inversely to realized annualized volatility so that risk,
//! not notional, stays roughly constant. Loosely Kelly-style, not the Kelly
//! criterion.

use serde::{Deserialize, Serialize};

use crate::domain::{IndicatorPoint, Verdict};

/// Trading days per year used to annualize a daily return.
pub const TRADING_DAYS_PER_YEAR: f64 = 252.0;

/// Volatility-target sizer
///
/// # Formula
/// ```text
/// daily_return  = (current - previous) / previous
/// annual_vol    = |daily_return * sqrt(252)|
/// raw           = target_vol / max(annual_vol, vol_floor) * |total_score|
/// position_pct  = min(raw, max_raw) * scale
/// ```
///
/// # Example
/// - Total score: 0.5, annualized vol: 0.30
/// - raw = 0.15 / 0.30 * 0.5 = 0.25
/// - position = 0.25 * 10 = 2.5%
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VolTargetSizer {
    /// Target annualized volatility (0.15 = 15%)
    pub target_vol: f64,

    /// Lower bound on realized vol before dividing
    pub vol_floor: f64,

    /// Cap on the raw size before scaling
    pub max_raw: f64,

    /// Multiplier converting raw size into a percentage
    pub scale: f64,
}

impl Default for VolTargetSizer {
    fn default() -> Self {
        Self {
            target_vol: 0.15,
            vol_floor: 0.01,
            max_raw: 2.5,
            scale: 10.0,
        }
    }
}

impl VolTargetSizer {
    /// Largest percentage this sizer can return.
    pub fn max_position(&self) -> f64 {
        self.max_raw * self.scale
    }

    /// Annualized volatility implied by a single day-over-day move.
    ///
    /// A previous price of exactly 0 is replaced by 1.
    pub fn annualized_vol(current_price: f64, previous_price: f64) -> f64 {
        let base = if previous_price == 0.0 { 1.0 } else { previous_price };
        let daily_return = (current_price - base) / base;
        (daily_return * TRADING_DAYS_PER_YEAR.sqrt()).abs()
    }

    /// Size from an already-annualized volatility.
    pub fn size_from_vol(&self, annualized_vol: f64, total_score: f64) -> f64 {
        let raw = self.target_vol / annualized_vol.max(self.vol_floor) * total_score.abs();
        if raw.is_nan() {
            return 0.0;
        }
        raw.min(self.max_raw) * self.scale
    }

    /// Size from the two most recent prices.
    pub fn size(&self, current_price: f64, previous_price: f64, total_score: f64) -> f64 {
        self.size_from_vol(
            Self::annualized_vol(current_price, previous_price),
            total_score,
        )
    }

    /// Size with the display policy: no exposure unless the score clears the
    /// verdict threshold. A NaN total is NEUTRAL and sizes to 0.
    pub fn recommend(&self, current_price: f64, previous_price: f64, total_score: f64) -> f64 {
        if !Verdict::from_total(total_score).is_directional() {
            return 0.0;
        }
        self.size(current_price, previous_price, total_score)
    }
}

/// Raw sizing formula with the default sizer, as a percentage in [0, 25].
pub fn size_position(current: &IndicatorPoint, previous: &IndicatorPoint, total_score: f64) -> f64 {
    VolTargetSizer::default().size(current.price, previous.price, total_score)
}

/// Displayed position size: 0 whenever the verdict would be NEUTRAL.
pub fn recommended_position(
    current: &IndicatorPoint,
    previous: &IndicatorPoint,
    total_score: f64,
) -> f64 {
    VolTargetSizer::default().recommend(current.price, previous.price, total_score)
}
