//! Synthetic price series — seeded random walk with drift.
//!
//! Used whenever live history is unavailable. The walk is a pure function of
//! the ticker and the end date, so a ticker always renders the same chart.
//!
//! Layout: `SYNTHETIC_DAYS` consecutive calendar days ending at `end`. The
//! first `WARMUP_DAYS` exist only so 200-period indicators are valid from the
//! first displayed point.

use chrono::{Duration, NaiveDate};

use crate::domain::PricePoint;
use crate::rng::{seeded_rand, ticker_seed};

pub const SYNTHETIC_DAYS: usize = 400;
pub const WARMUP_DAYS: usize = 200;
/// Price floor of the walk.
pub const MIN_PRICE: f64 = 5.0;

/// Daily volatility as a fraction of the current price.
const DAILY_VOL_FRACTION: f64 = 0.02;
/// Offset separating the volume draws from the price draws.
const VOLUME_SEED_OFFSET: i64 = 1000;
const MAX_VOLUME: f64 = 1_000_000.0;

/// Build the synthetic series for `ticker`, last point dated `end`.
pub fn build_synthetic_series(ticker: &str, end: NaiveDate) -> Vec<PricePoint> {
    let seed = ticker_seed(ticker);

    let mut price = 100.0 + 50.0 * seeded_rand(seed);
    let drift = 0.2 * (seeded_rand(seed + 1) - 0.5);

    let first_date = end - Duration::days(SYNTHETIC_DAYS as i64 - 1);

    (0..SYNTHETIC_DAYS)
        .map(|i| {
            let step = i as i64;
            let volatility = DAILY_VOL_FRACTION * price;
            price += volatility * (seeded_rand(seed + step) - 0.5) + drift;
            price = price.max(MIN_PRICE);

            let volume = (seeded_rand(seed + step + VOLUME_SEED_OFFSET) * MAX_VOLUME).floor() as u64;

            PricePoint::new(first_date + Duration::days(step), price, volume)
        })
        .collect()
}
