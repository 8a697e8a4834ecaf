//! PricePoint and IndicatorPoint — the fundamental series units.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Daily close and volume for a single ticker on a single calendar day.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    pub date: NaiveDate,
    pub price: f64,
    pub volume: u64,
}

impl PricePoint {
    pub fn new(date: NaiveDate, price: f64, volume: u64) -> Self {
        Self {
            date,
            price,
            volume,
        }
    }

    /// Price is finite and strictly positive.
    pub fn is_sane(&self) -> bool {
        self.price.is_finite() && self.price > 0.0
    }
}

/// A price point annotated with every indicator the scorer reads.
///
/// Windowed values are `None` until their lookback is satisfied. RSI and
/// the z-score always carry a value (50 and 0 during warmup respectively).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IndicatorPoint {
    pub date: NaiveDate,
    pub price: f64,
    pub volume: u64,
    pub sma50: Option<f64>,
    pub sma200: Option<f64>,
    pub rsi: f64,
    pub bb_upper: Option<f64>,
    pub bb_lower: Option<f64>,
    pub z_score: f64,
}

impl IndicatorPoint {
    /// A point with no indicator history: absent windows, neutral RSI, zero z-score.
    pub fn bare(point: &PricePoint) -> Self {
        Self {
            date: point.date,
            price: point.price,
            volume: point.volume,
            sma50: None,
            sma200: None,
            rsi: 50.0,
            bb_upper: None,
            bb_lower: None,
            z_score: 0.0,
        }
    }

    pub fn price_point(&self) -> PricePoint {
        PricePoint::new(self.date, self.price, self.volume)
    }
}

/// Returns true if dates are strictly ascending (no duplicates, no reversals).
pub fn is_strictly_ascending(series: &[PricePoint]) -> bool {
    series.windows(2).all(|w| w[0].date < w[1].date)
}

/// Sort by date and keep the first point for each date, dropping insane prices.
pub fn canonicalize(mut series: Vec<PricePoint>) -> Vec<PricePoint> {
    series.retain(PricePoint::is_sane);
    series.sort_by_key(|p| p.date);
    series.dedup_by_key(|p| p.date);
    series
}
