//! Position sizing — volatility-targeted exposure recommendation.
//!
//! Sizers translate a conviction score and realized volatility into a
//! percentage of capital. They are signal-agnostic: the score is an input,
//! never reinterpreted here.

pub mod vol_target;

pub use vol_target::{recommended_position, size_position, VolTargetSizer};
