//! Provider traits and structured fetch errors.
//!
//! The traits abstract over remote sources so callers can swap
//! implementations and mock them in tests. Providers never fall back on their
//! own; substituting synthetic data is the caller's decision.

use thiserror::Error;

use crate::domain::{AnalystConsensus, CompanyProfile, PricePoint, Quote};

/// Structured error types for remote fetches.
///
/// Displayable in CLI output and log lines. None of these are fatal to an
/// analysis: history failures fall back to synthetic data and real-time
/// failures leave the corresponding input absent.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("network unreachable: {0}")]
    Network(String),

    #[error("request timed out after {timeout_secs}s")]
    Timeout { timeout_secs: u64 },

    #[error("HTTP {status} from {provider}")]
    HttpStatus { provider: String, status: u16 },

    #[error("rate limited by {provider}")]
    RateLimited { provider: String },

    #[error("{provider} rejected the credential")]
    Unauthorized { provider: String },

    #[error("no API credential configured for {provider}")]
    MissingCredential { provider: String },

    #[error("symbol not found: {symbol}")]
    SymbolNotFound { symbol: String },

    #[error("response format changed: {0}")]
    ResponseFormatChanged(String),

    #[error("HTTP client setup failed: {0}")]
    Client(String),
}

/// Source of daily price history (roughly two years of closes).
pub trait PriceHistoryProvider: Send + Sync {
    /// Human-readable name of this provider.
    fn name(&self) -> &str;

    /// Fetch an ascending, de-duplicated daily series for `ticker`.
    fn fetch_history(&self, ticker: &str) -> Result<Vec<PricePoint>, FetchError>;
}

/// Source of real-time context: quote, analyst consensus, company profile.
///
/// The three calls are independent; a failure in one says nothing about the
/// others.
pub trait MarketIntelProvider: Send + Sync {
    fn name(&self) -> &str;

    fn fetch_quote(&self, ticker: &str) -> Result<Quote, FetchError>;

    /// Latest recommendation period, or `None` when the ticker has no coverage.
    fn fetch_consensus(&self, ticker: &str) -> Result<Option<AnalystConsensus>, FetchError>;

    fn fetch_profile(&self, ticker: &str) -> Result<CompanyProfile, FetchError>;
}
