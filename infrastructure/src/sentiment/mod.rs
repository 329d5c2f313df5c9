//! Model-backed sentiment adapters.
//!
//! | adapter | feature | transport |
//! |---------|---------|-----------|
//! | [`HttpSentimentModel`] | `http-sentiment` | blocking `reqwest` POST |
//!
//! Without the feature the engine runs on lexical sentiment only.

#[cfg(feature = "http-sentiment")]
mod http;
mod labels;

#[cfg(feature = "http-sentiment")]
pub use http::HttpSentimentModel;
pub use labels::parse_prediction;
