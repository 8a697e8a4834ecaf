//! Single-ticker and multi-ticker analysis orchestration.
//!
//! For each ticker the history pipeline (fetch or synthesize, then compute
//! indicators) and the real-time pipeline (quote, consensus, profile) run
//! concurrently. Scoring waits for both.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tickerlens_core::data::{
    FetchError, FinnhubProvider, MarketIntelProvider, PriceHistoryProvider, YahooHistoryProvider,
};
use tickerlens_core::domain::{
    AnalystConsensus, CompanyProfile, DataSource, IndicatorPoint, Quote, ScoreResult, Weights,
};
use tickerlens_core::indicators::{compute_indicators, latest_pair};
use tickerlens_core::scoring::score;

use crate::config::AnalysisConfig;
use crate::data_loader::{load_series, LoadOptions};
use crate::realtime::{fetch_snapshot, MarketSnapshot};

/// Current schema version for persisted reports.
pub const SCHEMA_VERSION: u32 = 1;

#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("ticker must not be empty")]
    EmptyTicker,
    #[error("invalid ticker '{0}': only letters, digits and . - ^ = are allowed")]
    InvalidTicker(String),
    #[error("provider setup failed: {0}")]
    Provider(#[from] FetchError),
    #[error("no price data for '{0}'")]
    NoData(String),
}

/// Providers, weights and load options shared by every analysis in a run.
pub struct AnalysisContext {
    history: Option<Box<dyn PriceHistoryProvider>>,
    intel: Option<Box<dyn MarketIntelProvider>>,
    weights: Weights,
    load: LoadOptions,
}

impl AnalysisContext {
    /// Context with no providers: synthetic history, no real-time context.
    pub fn offline(weights: Weights, load: LoadOptions) -> Self {
        Self {
            history: None,
            intel: None,
            weights,
            load: LoadOptions { offline: true, ..load },
        }
    }

    /// Build live providers from configuration.
    ///
    /// Without a Finnhub token the real-time pipeline is skipped entirely and
    /// sentiment falls back to price versus SMA50.
    pub fn from_config(config: &AnalysisConfig, load: LoadOptions) -> Result<Self, AnalysisError> {
        if config.offline || load.offline {
            return Ok(Self::offline(config.weights, load));
        }

        let providers = &config.providers;
        let history = YahooHistoryProvider::new(&providers.history_base_url, providers.timeout())?;
        let intel = match providers.resolve_api_key() {
            Some(token) => Some(Box::new(FinnhubProvider::new(
                &providers.intel_base_url,
                Some(token),
                providers.timeout(),
            )?) as Box<dyn MarketIntelProvider>),
            None => {
                tracing::info!(
                    env = %providers.api_key_env,
                    "no Finnhub API key; real-time context disabled"
                );
                None
            }
        };

        Ok(Self {
            history: Some(Box::new(history)),
            intel,
            weights: config.weights,
            load,
        })
    }

    pub fn with_history(mut self, provider: Box<dyn PriceHistoryProvider>) -> Self {
        self.history = Some(provider);
        self.load.offline = false;
        self
    }

    pub fn with_intel(mut self, provider: Box<dyn MarketIntelProvider>) -> Self {
        self.intel = Some(provider);
        self
    }

    pub fn weights(&self) -> &Weights {
        &self.weights
    }

    pub fn load_options(&self) -> &LoadOptions {
        &self.load
    }
}

/// Complete result of analysing one ticker.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub schema_version: u32,
    pub ticker: String,
    pub source: DataSource,
    pub series_hash: String,
    pub fallback_reason: Option<String>,
    pub weights: Weights,
    pub latest: IndicatorPoint,
    pub quote: Option<Quote>,
    pub consensus: Option<AnalystConsensus>,
    pub profile: Option<CompanyProfile>,
    pub score: ScoreResult,
    /// The visible indicator window, ascending by date.
    pub series: Vec<IndicatorPoint>,
}

/// Trim and upper-case a ticker symbol.
///
/// The result is used in file names, so path separators and other
/// punctuation outside `. - ^ =` are rejected.
pub fn normalize_ticker(raw: &str) -> Result<String, AnalysisError> {
    let ticker = raw.trim().to_ascii_uppercase();
    if ticker.is_empty() {
        return Err(AnalysisError::EmptyTicker);
    }
    let allowed = |c: char| c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '^' | '=');
    if !ticker.chars().all(allowed) || ticker.chars().all(|c| c == '.') {
        return Err(AnalysisError::InvalidTicker(raw.trim().to_string()));
    }
    Ok(ticker)
}

/// Analyse one ticker.
pub fn analyze(ticker: &str, ctx: &AnalysisContext) -> Result<AnalysisReport, AnalysisError> {
    let ticker = normalize_ticker(ticker)?;

    let ((loaded, points), snapshot) = rayon::join(
        || {
            let loaded = load_series(&ticker, ctx.history.as_deref(), &ctx.load);
            let points = compute_indicators(&loaded.series);
            (loaded, points)
        },
        || match (&ctx.intel, ctx.load.offline) {
            (Some(intel), false) => fetch_snapshot(intel.as_ref(), &ticker),
            _ => MarketSnapshot::default(),
        },
    );

    let (current, previous) =
        latest_pair(&points).ok_or_else(|| AnalysisError::NoData(ticker.clone()))?;
    let result = score(&current, &previous, snapshot.consensus.as_ref(), &ctx.weights);

    tracing::info!(
        ticker = %ticker,
        source = ?loaded.source,
        total = result.total_score,
        verdict = %result.verdict,
        "analysis complete"
    );

    Ok(AnalysisReport {
        schema_version: SCHEMA_VERSION,
        ticker,
        source: loaded.source,
        series_hash: loaded.series_hash,
        fallback_reason: loaded.fallback_reason,
        weights: ctx.weights,
        latest: current,
        quote: snapshot.quote,
        consensus: snapshot.consensus,
        profile: snapshot.profile,
        score: result,
        series: points,
    })
}

/// Analyse several tickers in parallel. Results keep the input order.
pub fn analyze_many(
    tickers: &[String],
    ctx: &AnalysisContext,
) -> Vec<Result<AnalysisReport, AnalysisError>> {
    tickers.par_iter().map(|t| analyze(t, ctx)).collect()
}
