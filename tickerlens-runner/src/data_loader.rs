//! Price-history resolution for the runner.
//!
//! Implements the fallback policy:
//! 1. If not offline and a provider is available → fetch live history
//! 2. If the fetch fails or returns no usable points → synthetic series (tagged)
//!
//! Loading never fails. There is no retry and no backoff: one failed fetch
//! is enough to switch to synthetic data for that ticker.

use chrono::NaiveDate;
use tickerlens_core::data::PriceHistoryProvider;
use tickerlens_core::domain::{canonicalize, DataSource, PricePoint};
use tickerlens_core::synthetic::build_synthetic_series;

/// Options controlling how a series is loaded.
#[derive(Debug, Clone, Copy)]
pub struct LoadOptions {
    /// If true, never make network requests.
    pub offline: bool,
    /// Last day of a synthetic series.
    pub end: NaiveDate,
}

impl LoadOptions {
    pub fn new(offline: bool, end: NaiveDate) -> Self {
        Self { offline, end }
    }

    /// Options ending today in local time.
    pub fn today(offline: bool) -> Self {
        Self::new(offline, chrono::Local::now().date_naive())
    }
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self::today(false)
    }
}

/// A resolved series with its provenance.
#[derive(Debug, Clone)]
pub struct LoadedSeries {
    pub series: Vec<PricePoint>,
    pub source: DataSource,
    /// BLAKE3 over ticker, dates, prices and volumes.
    pub series_hash: String,
    /// Why the live fetch was skipped or abandoned, when synthetic.
    pub fallback_reason: Option<String>,
}

impl LoadedSeries {
    pub fn is_synthetic(&self) -> bool {
        self.source.is_synthetic()
    }
}

/// Load the daily series for `ticker`, falling back to synthetic data.
pub fn load_series(
    ticker: &str,
    provider: Option<&dyn PriceHistoryProvider>,
    opts: &LoadOptions,
) -> LoadedSeries {
    let live = match (opts.offline, provider) {
        (true, _) => Err("offline mode".to_string()),
        (false, None) => Err("no history provider configured".to_string()),
        (false, Some(prov)) => match prov.fetch_history(ticker) {
            Ok(points) => {
                let points = canonicalize(points);
                if points.is_empty() {
                    Err(format!("{} returned no usable points", prov.name()))
                } else {
                    tracing::debug!(ticker, provider = prov.name(), points = points.len(), "fetched history");
                    Ok(points)
                }
            }
            Err(e) => Err(format!("{} fetch failed: {e}", prov.name())),
        },
    };

    let (series, source, fallback_reason) = match live {
        Ok(points) => (points, DataSource::YahooFinance, None),
        Err(reason) => {
            tracing::warn!(ticker, %reason, "using synthetic price series");
            (
                build_synthetic_series(ticker, opts.end),
                DataSource::Synthetic,
                Some(reason),
            )
        }
    };

    let series_hash = compute_series_hash(ticker, &series);
    LoadedSeries {
        series,
        source,
        series_hash,
        fallback_reason,
    }
}

/// Deterministic BLAKE3 hash over a ticker's series.
pub fn compute_series_hash(ticker: &str, series: &[PricePoint]) -> String {
    let mut hasher = blake3::Hasher::new();
    hasher.update(ticker.as_bytes());
    for point in series {
        hasher.update(point.date.to_string().as_bytes());
        hasher.update(&point.price.to_le_bytes());
        hasher.update(&point.volume.to_le_bytes());
    }
    hasher.finalize().to_hex().to_string()
}
