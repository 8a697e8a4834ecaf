//! TickerLens Core — synthetic series, indicators, factor scoring, sizing.
//!
//! This crate contains the analysis engine:
//! - Domain types (price points, indicator points, consensus, scores)
//! - Deterministic seeded sequence generator
//! - Synthetic price series used when live history is unavailable
//! - Indicator engine (SMA50, SMA200, RSI14, Bollinger(20, 2), z-score)
//! - Trend / mean-reversion / sentiment factor scorer and verdict
//! - Volatility-target position sizer
//! - Provider traits with Yahoo Finance and Finnhub implementations
//!
//! Everything except `data` is synchronous, pure, and free of shared state.

pub mod data;
pub mod domain;
pub mod indicators;
pub mod rng;
pub mod scoring;
pub mod sizers;
pub mod synthetic;

pub use domain::{
    AnalystConsensus, CompanyProfile, DataSource, IndicatorPoint, PricePoint, Quote, ScoreResult,
    Verdict, Weights,
};
pub use indicators::compute_indicators;
pub use scoring::score;
pub use sizers::size_position;
pub use synthetic::build_synthetic_series;
