//! Finnhub real-time provider: quote, analyst recommendations, company profile.
//!
//! Every call requires an API token. Without one the calls fail fast with
//! `MissingCredential` and no request is made.

use std::time::Duration;

use serde::Deserialize;

use super::http::{build_client, get_json, DEFAULT_TIMEOUT};
use super::provider::{FetchError, MarketIntelProvider};
use crate::domain::{AnalystConsensus, CompanyProfile, Quote};

pub const DEFAULT_BASE_URL: &str = "https://finnhub.io/api/v1";

#[derive(Debug, Deserialize)]
struct QuoteResponse {
    c: Option<f64>,
    d: Option<f64>,
    dp: Option<f64>,
    h: Option<f64>,
    l: Option<f64>,
    o: Option<f64>,
    pc: Option<f64>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RecommendationPeriod {
    #[serde(default)]
    period: String,
    #[serde(default)]
    strong_buy: u32,
    #[serde(default)]
    buy: u32,
    #[serde(default)]
    hold: u32,
    #[serde(default)]
    sell: u32,
    #[serde(default)]
    strong_sell: u32,
}

#[derive(Debug, Deserialize)]
struct ProfileResponse {
    name: Option<String>,
    #[serde(rename = "finnhubIndustry")]
    industry: Option<String>,
    exchange: Option<String>,
    currency: Option<String>,
    #[serde(rename = "marketCapitalization")]
    market_cap: Option<f64>,
}

/// Finnhub real-time provider.
pub struct FinnhubProvider {
    client: reqwest::blocking::Client,
    base_url: String,
    token: Option<String>,
    timeout: Duration,
}

impl FinnhubProvider {
    pub fn new(
        base_url: impl Into<String>,
        token: Option<String>,
        timeout: Duration,
    ) -> Result<Self, FetchError> {
        Ok(Self {
            client: build_client(timeout)?,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            token: token.filter(|t| !t.trim().is_empty()),
            timeout,
        })
    }

    pub fn with_token(token: impl Into<String>) -> Result<Self, FetchError> {
        Self::new(DEFAULT_BASE_URL, Some(token.into()), DEFAULT_TIMEOUT)
    }

    pub fn has_credential(&self) -> bool {
        self.token.is_some()
    }

    /// GET `{base}{path}?symbol=..&token=..`, logging only the path.
    fn get<T: serde::de::DeserializeOwned>(&self, path: &str, symbol: &str) -> Result<T, FetchError> {
        let token = self.token.as_deref().ok_or_else(|| FetchError::MissingCredential {
            provider: self.name().to_string(),
        })?;
        let url = format!("{}{path}?symbol={symbol}&token={token}", self.base_url);
        get_json(&self.client, self.name(), &url, path, symbol, self.timeout)
    }
}

fn quote_from_response(symbol: &str, resp: QuoteResponse) -> Result<Quote, FetchError> {
    // Finnhub answers unknown symbols with an all-zero quote.
    let current = resp.c.unwrap_or(0.0);
    if current <= 0.0 {
        return Err(FetchError::SymbolNotFound {
            symbol: symbol.to_string(),
        });
    }
    Ok(Quote {
        current,
        change: resp.d.unwrap_or(0.0),
        percent_change: resp.dp.unwrap_or(0.0),
        high: resp.h.unwrap_or(current),
        low: resp.l.unwrap_or(current),
        open: resp.o.unwrap_or(current),
        previous_close: resp.pc.unwrap_or(current),
    })
}

/// Most recent period; ISO `YYYY-MM-DD` periods order lexicographically.
fn latest_consensus(periods: Vec<RecommendationPeriod>) -> Option<AnalystConsensus> {
    periods
        .into_iter()
        .max_by(|a, b| a.period.cmp(&b.period))
        .map(|p| AnalystConsensus {
            strong_buy: p.strong_buy,
            buy: p.buy,
            hold: p.hold,
            sell: p.sell,
            strong_sell: p.strong_sell,
        })
}

fn profile_from_response(symbol: &str, resp: ProfileResponse) -> Result<CompanyProfile, FetchError> {
    // Unknown symbols come back as `{}`.
    let name = resp
        .name
        .filter(|n| !n.is_empty())
        .ok_or_else(|| FetchError::SymbolNotFound {
            symbol: symbol.to_string(),
        })?;
    Ok(CompanyProfile {
        name,
        industry: resp.industry.filter(|s| !s.is_empty()),
        exchange: resp.exchange.filter(|s| !s.is_empty()),
        currency: resp.currency.filter(|s| !s.is_empty()),
        market_cap: resp.market_cap,
    })
}

impl MarketIntelProvider for FinnhubProvider {
    fn name(&self) -> &str {
        "finnhub"
    }

    fn fetch_quote(&self, ticker: &str) -> Result<Quote, FetchError> {
        let resp: QuoteResponse = self.get("/quote", ticker)?;
        quote_from_response(ticker, resp)
    }

    fn fetch_consensus(&self, ticker: &str) -> Result<Option<AnalystConsensus>, FetchError> {
        let periods: Vec<RecommendationPeriod> = self.get("/stock/recommendation", ticker)?;
        Ok(latest_consensus(periods))
    }

    fn fetch_profile(&self, ticker: &str) -> Result<CompanyProfile, FetchError> {
        let resp: ProfileResponse = self.get("/stock/profile2", ticker)?;
        profile_from_response(ticker, resp)
    }
}
