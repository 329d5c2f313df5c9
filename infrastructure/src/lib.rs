//! Infrastructure layer for neuroform
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod logging;
pub mod nlp;
pub mod sentiment;

// Re-export commonly used types
pub use config::{
    ConfigLoader, ConfigValidationError, FileAnalyzerConfig, FileConfig, FileLoggingConfig,
    FileOutputConfig, FileRankingConfig, FileSentimentConfig, SentimentBackendKind,
};
pub use logging::JsonlDecisionLogger;
pub use nlp::LexiconTextAnalyzer;
#[cfg(feature = "http-sentiment")]
pub use sentiment::HttpSentimentModel;
