//! TickerLens Runner — analysis orchestration, configuration, export.
//!
//! This crate builds on `tickerlens-core` to provide:
//! - TOML configuration with provider endpoints and factor weights
//! - Price-history loading with synthetic fallback and series hashing
//! - Concurrent real-time snapshot (quote, consensus, profile)
//! - Single and multi-ticker analysis
//! - JSON report and indicator CSV export
//! - Logging initialisation

pub mod config;
pub mod data_loader;
pub mod export;
pub mod logging;
pub mod realtime;
pub mod runner;

pub use config::{AnalysisConfig, ConfigError, ProviderConfig};
pub use data_loader::{load_series, LoadOptions, LoadedSeries};
pub use export::{export_indicators_csv, export_json, import_json, save_report, SavedReport};
pub use logging::{init_logging, LoggingConfig};
pub use realtime::{fetch_snapshot, MarketSnapshot};
pub use runner::{
    analyze, analyze_many, normalize_ticker, AnalysisContext, AnalysisError, AnalysisReport,
    SCHEMA_VERSION,
};

#[cfg(test)]
mod send_sync_checks {
    use super::*;

    fn assert_send<T: Send>() {}
    fn assert_sync<T: Sync>() {}

    #[test]
    fn analysis_context_is_send_sync() {
        assert_send::<AnalysisContext>();
        assert_sync::<AnalysisContext>();
    }

    #[test]
    fn report_is_send_sync() {
        assert_send::<AnalysisReport>();
        assert_sync::<AnalysisReport>();
        assert_send::<MarketSnapshot>();
        assert_sync::<MarketSnapshot>();
    }

    #[test]
    fn config_types_are_send_sync() {
        assert_send::<AnalysisConfig>();
        assert_sync::<AnalysisConfig>();
        assert_send::<LoadOptions>();
        assert_sync::<LoadOptions>();
        assert_send::<LoadedSeries>();
        assert_sync::<LoadedSeries>();
    }

    #[test]
    fn errors_are_send_sync() {
        assert_send::<AnalysisError>();
        assert_sync::<AnalysisError>();
        assert_send::<ConfigError>();
        assert_sync::<ConfigError>();
    }
}
