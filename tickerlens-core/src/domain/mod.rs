//! Domain types for TickerLens.

pub mod consensus;
pub mod market;
pub mod point;
pub mod score;

pub use consensus::AnalystConsensus;
pub use market::{CompanyProfile, DataSource, Quote};
pub use point::{canonicalize, is_strictly_ascending, IndicatorPoint, PricePoint};
pub use score::{ScoreResult, Verdict, Weights, VERDICT_THRESHOLD};
