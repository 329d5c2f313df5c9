//! Application-level configuration.
//!
//! - [`RankingParams`]: confidence threshold and batch control

pub mod ranking_params;

pub use ranking_params::RankingParams;
