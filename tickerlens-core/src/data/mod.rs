//! Remote data providers: price history and real-time market context.

pub mod finnhub;
pub mod http;
pub mod provider;
pub mod yahoo;

pub use finnhub::FinnhubProvider;
pub use http::DEFAULT_TIMEOUT;
pub use provider::{FetchError, MarketIntelProvider, PriceHistoryProvider};
pub use yahoo::YahooHistoryProvider;
