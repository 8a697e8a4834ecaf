//! Yahoo Finance price-history provider.
//!
//! Fetches two years of daily closes from Yahoo's v8 chart API. Yahoo has no
//! official API and is subject to unannounced format changes; any failure
//! surfaces as a `FetchError` and the caller substitutes synthetic data.
//! There is no retry and no backoff here.

use std::time::Duration;

use serde::Deserialize;

use super::http::{build_client, get_json, DEFAULT_TIMEOUT};
use super::provider::{FetchError, PriceHistoryProvider};
use crate::domain::{canonicalize, PricePoint};

pub const DEFAULT_BASE_URL: &str = "https://query2.finance.yahoo.com";

/// Yahoo Finance v8 chart API response.
#[derive(Debug, Deserialize)]
struct ChartResponse {
    chart: ChartResult,
}

#[derive(Debug, Deserialize)]
struct ChartResult {
    result: Option<Vec<ChartData>>,
    error: Option<ChartError>,
}

#[derive(Debug, Deserialize)]
struct ChartError {
    code: String,
    description: String,
}

#[derive(Debug, Deserialize)]
struct ChartData {
    timestamp: Option<Vec<i64>>,
    indicators: Indicators,
}

#[derive(Debug, Deserialize)]
struct Indicators {
    quote: Vec<QuoteData>,
}

#[derive(Debug, Deserialize)]
struct QuoteData {
    close: Vec<Option<f64>>,
    #[serde(default)]
    volume: Vec<Option<u64>>,
}

/// Yahoo Finance price-history provider.
pub struct YahooHistoryProvider {
    client: reqwest::blocking::Client,
    base_url: String,
    timeout: Duration,
}

impl YahooHistoryProvider {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, FetchError> {
        Ok(Self {
            client: build_client(timeout)?,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            timeout,
        })
    }

    pub fn with_defaults() -> Result<Self, FetchError> {
        Self::new(DEFAULT_BASE_URL, DEFAULT_TIMEOUT)
    }

    /// Build the chart API URL for two years of daily bars.
    fn chart_url(&self, symbol: &str) -> String {
        format!(
            "{}/v8/finance/chart/{symbol}?range=2y&interval=1d",
            self.base_url
        )
    }
}

/// Parse the chart API response into an ascending daily series.
///
/// Rows without a positive close (holidays, halted sessions) are dropped.
fn parse_chart(symbol: &str, resp: ChartResponse) -> Result<Vec<PricePoint>, FetchError> {
    let result = resp.chart.result.ok_or_else(|| {
        if let Some(err) = resp.chart.error {
            if err.code == "Not Found" {
                FetchError::SymbolNotFound {
                    symbol: symbol.to_string(),
                }
            } else {
                FetchError::ResponseFormatChanged(format!("{}: {}", err.code, err.description))
            }
        } else {
            FetchError::ResponseFormatChanged("empty result with no error".into())
        }
    })?;

    let data = result
        .into_iter()
        .next()
        .ok_or_else(|| FetchError::ResponseFormatChanged("result array is empty".into()))?;

    let timestamps = data
        .timestamp
        .ok_or_else(|| FetchError::ResponseFormatChanged("no timestamps".into()))?;

    let quote = data
        .indicators
        .quote
        .into_iter()
        .next()
        .ok_or_else(|| FetchError::ResponseFormatChanged("no quote data".into()))?;

    let mut points = Vec::with_capacity(timestamps.len());
    for (i, &ts) in timestamps.iter().enumerate() {
        let date = chrono::DateTime::from_timestamp(ts, 0)
            .map(|dt| dt.date_naive())
            .ok_or_else(|| FetchError::ResponseFormatChanged(format!("invalid timestamp: {ts}")))?;

        let Some(close) = quote.close.get(i).copied().flatten() else {
            continue;
        };
        let volume = quote.volume.get(i).copied().flatten().unwrap_or(0);

        points.push(PricePoint::new(date, close, volume));
    }

    let points = canonicalize(points);
    if points.is_empty() {
        return Err(FetchError::SymbolNotFound {
            symbol: symbol.to_string(),
        });
    }

    Ok(points)
}

impl PriceHistoryProvider for YahooHistoryProvider {
    fn name(&self) -> &str {
        "yahoo_finance"
    }

    fn fetch_history(&self, ticker: &str) -> Result<Vec<PricePoint>, FetchError> {
        let url = self.chart_url(ticker);
        let chart: ChartResponse =
            get_json(&self.client, self.name(), &url, &url, ticker, self.timeout)?;
        parse_chart(ticker, chart)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn parse(json: &str) -> Result<Vec<PricePoint>, FetchError> {
        parse_chart("SPY", serde_json::from_str(json).unwrap())
    }

    #[test]
    fn parses_closes_and_volumes() {
        // 2024-01-02 and 2024-01-03 at 14:30 UTC
        let json = r#"{"chart":{"result":[{"timestamp":[1704205800,1704292200],
            "indicators":{"quote":[{"close":[472.65,468.79],"volume":[123,456]}]}}],"error":null}}"#;
        let points = parse(json).unwrap();
        assert_eq!(points.len(), 2);
        assert_eq!(points[0].date, NaiveDate::from_ymd_opt(2024, 1, 2).unwrap());
        assert_eq!(points[0].price, 472.65);
        assert_eq!(points[1].volume, 456);
    }

    #[test]
    fn skips_missing_closes_and_defaults_volume() {
        let json = r#"{"chart":{"result":[{"timestamp":[1704205800,1704292200,1704378600],
            "indicators":{"quote":[{"close":[472.65,null,470.0],"volume":[null,1,2]}]}}],"error":null}}"#;
        let points = parse(json).unwrap();
        assert_eq!(points.len(), 2);
        assert_eq!(points[0].volume, 0);
        assert_eq!(points[1].price, 470.0);
    }

    #[test]
    fn unsorted_rows_come_back_ascending() {
        let json = r#"{"chart":{"result":[{"timestamp":[1704292200,1704205800],
            "indicators":{"quote":[{"close":[2.0,1.0],"volume":[1,1]}]}}],"error":null}}"#;
        let points = parse(json).unwrap();
        assert_eq!(points[0].price, 1.0);
        assert_eq!(points[1].price, 2.0);
    }

    #[test]
    fn not_found_error_maps_to_symbol_not_found() {
        let json = r#"{"chart":{"result":null,"error":{"code":"Not Found","description":"No data found"}}}"#;
        assert!(matches!(parse(json), Err(FetchError::SymbolNotFound { .. })));
    }

    #[test]
    fn other_errors_are_format_changes() {
        let json = r#"{"chart":{"result":null,"error":{"code":"Bad Request","description":"x"}}}"#;
        assert!(matches!(parse(json), Err(FetchError::ResponseFormatChanged(_))));
    }

    #[test]
    fn all_null_closes_is_not_found() {
        let json = r#"{"chart":{"result":[{"timestamp":[1704205800],
            "indicators":{"quote":[{"close":[null],"volume":[null]}]}}],"error":null}}"#;
        assert!(matches!(parse(json), Err(FetchError::SymbolNotFound { .. })));
    }

    #[test]
    fn chart_url_trims_trailing_slash() {
        let provider =
            YahooHistoryProvider::new("http://localhost:9/", Duration::from_secs(1)).unwrap();
        assert_eq!(
            provider.chart_url("AAPL"),
            "http://localhost:9/v8/finance/chart/AAPL?range=2y&interval=1d"
        );
    }
}
