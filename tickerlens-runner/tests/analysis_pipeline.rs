//! Integration tests for the analysis pipeline with stub providers.
//!
//! No network: history and real-time context come from in-process stubs so
//! the expected factor scores can be worked out by hand.

use chrono::{Duration, NaiveDate};
use proptest::prelude::*;
use tickerlens_core::data::{FetchError, MarketIntelProvider, PriceHistoryProvider};
use tickerlens_core::domain::{
    AnalystConsensus, CompanyProfile, DataSource, PricePoint, Quote, Verdict, Weights,
};
use tickerlens_runner::{analyze, analyze_many, save_report, AnalysisContext, LoadOptions};

fn end() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 28).unwrap()
}

/// 300 days of prices 100, 101, ..., 399.
struct RisingHistory;

impl PriceHistoryProvider for RisingHistory {
    fn name(&self) -> &str {
        "rising"
    }

    fn fetch_history(&self, _ticker: &str) -> Result<Vec<PricePoint>, FetchError> {
        let start = NaiveDate::from_ymd_opt(2023, 1, 1).unwrap();
        Ok((0..300)
            .map(|i| PricePoint::new(start + Duration::days(i), 100.0 + i as f64, 1_000))
            .collect())
    }
}

struct DownHistory;

impl PriceHistoryProvider for DownHistory {
    fn name(&self) -> &str {
        "down"
    }

    fn fetch_history(&self, _ticker: &str) -> Result<Vec<PricePoint>, FetchError> {
        Err(FetchError::HttpStatus {
            provider: "down".into(),
            status: 503,
        })
    }
}

struct Analysts(AnalystConsensus);

impl MarketIntelProvider for Analysts {
    fn name(&self) -> &str {
        "analysts"
    }

    fn fetch_quote(&self, _ticker: &str) -> Result<Quote, FetchError> {
        Err(FetchError::RateLimited {
            provider: "analysts".into(),
        })
    }

    fn fetch_consensus(&self, _ticker: &str) -> Result<Option<AnalystConsensus>, FetchError> {
        Ok(Some(self.0))
    }

    fn fetch_profile(&self, ticker: &str) -> Result<CompanyProfile, FetchError> {
        Ok(CompanyProfile {
            name: format!("{ticker} Corp"),
            exchange: Some("NASDAQ".into()),
            ..CompanyProfile::default()
        })
    }
}

fn live_ctx() -> AnalysisContext {
    AnalysisContext::offline(Weights::default(), LoadOptions::new(false, end()))
        .with_history(Box::new(RisingHistory))
}

#[test]
fn rising_series_without_consensus_is_buy_at_cap() {
    let report = analyze("RISE", &live_ctx()).unwrap();

    assert_eq!(report.source, DataSource::YahooFinance);
    assert_eq!(report.series.len(), 200);
    assert_eq!(report.latest.price, 399.0);
    assert_eq!(report.score.trend_score, 1);
    assert_eq!(report.score.rev_score, 0);
    assert_eq!(report.score.sentiment_score, 1);
    assert!((report.score.total_score - 0.7).abs() < 1e-12);
    assert_eq!(report.score.verdict, Verdict::Buy);
    assert_eq!(report.score.position_size, 25.0);
}

#[test]
fn bearish_consensus_overrides_price_sentiment() {
    let bearish = AnalystConsensus {
        strong_sell: 10,
        ..AnalystConsensus::default()
    };
    let ctx = live_ctx().with_intel(Box::new(Analysts(bearish)));
    let report = analyze("RISE", &ctx).unwrap();

    assert_eq!(report.score.sentiment_score, -1);
    assert_eq!(report.score.verdict, Verdict::Neutral);
    assert_eq!(report.score.position_size, 0.0);
    assert_eq!(report.consensus, Some(bearish));
    // Quote failed; profile still arrived.
    assert!(report.quote.is_none());
    assert_eq!(report.profile.unwrap().name, "RISE Corp");
}

#[test]
fn zero_analyst_consensus_falls_back_to_sma50() {
    let ctx = live_ctx().with_intel(Box::new(Analysts(AnalystConsensus::default())));
    let report = analyze("RISE", &ctx).unwrap();
    assert_eq!(report.score.sentiment_score, 1);
}

#[test]
fn failed_history_uses_synthetic_series() {
    let ctx = AnalysisContext::offline(Weights::default(), LoadOptions::new(false, end()))
        .with_history(Box::new(DownHistory));
    let report = analyze("AAPL", &ctx).unwrap();
    let offline = analyze(
        "AAPL",
        &AnalysisContext::offline(Weights::default(), LoadOptions::new(true, end())),
    )
    .unwrap();

    assert_eq!(report.source, DataSource::Synthetic);
    assert!(report.fallback_reason.unwrap().contains("503"));
    assert_eq!(report.series_hash, offline.series_hash);
    assert_eq!(report.score, offline.score);
    assert_eq!(report.latest.date, end());
}

#[test]
fn custom_weights_flow_through() {
    let ctx = AnalysisContext::offline(Weights::new(1.0, 0.0, 0.0), LoadOptions::new(false, end()))
        .with_history(Box::new(RisingHistory));
    let report = analyze("RISE", &ctx).unwrap();
    assert_eq!(report.weights, Weights::new(1.0, 0.0, 0.0));
    assert_eq!(report.score.total_score, 1.0);
}

#[test]
fn batch_analysis_writes_reports() {
    let ctx = AnalysisContext::offline(Weights::default(), LoadOptions::new(true, end()));
    let tickers = vec!["AAPL".to_string(), "MSFT".to_string()];
    let dir = tempfile::tempdir().unwrap();

    for result in analyze_many(&tickers, &ctx) {
        let report = result.unwrap();
        save_report(&report, dir.path()).unwrap();
    }

    assert!(dir.path().join("AAPL_report.json").exists());
    assert!(dir.path().join("MSFT_indicators.csv").exists());
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn offline_reports_are_well_formed(ticker in "[A-Z]{1,5}") {
        let ctx = AnalysisContext::offline(Weights::default(), LoadOptions::new(true, end()));
        let report = analyze(&ticker, &ctx).unwrap();
        prop_assert_eq!(report.series.len(), 200);
        prop_assert!(report.series.windows(2).all(|w| w[0].date < w[1].date));
        prop_assert!(report.series.iter().all(|p| p.price >= 5.0));
        prop_assert!(report.score.position_size >= 0.0 && report.score.position_size <= 25.0);
        prop_assert_eq!(
            report.score.verdict == Verdict::Neutral,
            report.score.position_size == 0.0
        );
    }
}
