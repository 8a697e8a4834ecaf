//! Real-time market context: quote, analyst consensus, company profile.
//!
//! The three requests run concurrently and fail independently. A failed
//! request is logged and its slot left empty; the analysis proceeds with
//! whatever arrived.

use serde::{Deserialize, Serialize};
use tickerlens_core::data::{FetchError, MarketIntelProvider};
use tickerlens_core::domain::{AnalystConsensus, CompanyProfile, Quote};

/// Whatever real-time context could be fetched for one ticker.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MarketSnapshot {
    pub quote: Option<Quote>,
    pub consensus: Option<AnalystConsensus>,
    pub profile: Option<CompanyProfile>,
}

impl MarketSnapshot {
    pub fn is_empty(&self) -> bool {
        self.quote.is_none() && self.consensus.is_none() && self.profile.is_none()
    }
}

/// Fetch quote, consensus and profile concurrently.
pub fn fetch_snapshot(provider: &dyn MarketIntelProvider, ticker: &str) -> MarketSnapshot {
    let (quote, (consensus, profile)) = rayon::join(
        || settle(provider, ticker, "quote", provider.fetch_quote(ticker)),
        || {
            rayon::join(
                || settle(provider, ticker, "consensus", provider.fetch_consensus(ticker)),
                || settle(provider, ticker, "profile", provider.fetch_profile(ticker)),
            )
        },
    );

    MarketSnapshot {
        quote,
        consensus: consensus.flatten(),
        profile,
    }
}

fn settle<T>(
    provider: &dyn MarketIntelProvider,
    ticker: &str,
    what: &str,
    result: Result<T, FetchError>,
) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(FetchError::MissingCredential { .. }) => {
            tracing::debug!(ticker, provider = provider.name(), what, "skipped: no credential");
            None
        }
        Err(e) => {
            tracing::warn!(ticker, provider = provider.name(), what, error = %e, "real-time fetch failed");
            None
        }
    }
}
