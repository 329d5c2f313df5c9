//! Answer scoring domain
//!
//! - [`option_scorer`]: per-option heuristics producing a [`ScoreBreakdown`]
//! - [`ranking`]: stable arg-max over option scores
//! - [`policy`]: confidence threshold for autonomous selection

pub mod option_scorer;
pub mod policy;
pub mod ranking;

pub use option_scorer::{BASE_SCORE, OptionFeatures, ScoreBreakdown, score_option};
pub use policy::{ConfidencePolicy, DEFAULT_CONFIDENCE_THRESHOLD, Decision};
pub use ranking::{OptionScore, Ranking, select_best};
