//! Sentiment model port
//!
//! Optional model-backed sentiment classifier. Any failure sends the engine
//! to the lexical estimator instead, so this port never makes ranking fail.

use neuroform_domain::Sentiment;
use thiserror::Error;

/// Errors that can occur while querying a sentiment model
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SentimentModelError {
    #[error("Sentiment model unavailable: {0}")]
    Unavailable(String),

    #[error("Sentiment request failed: {0}")]
    RequestFailed(String),

    #[error("Timeout")]
    Timeout,

    #[error("Unknown sentiment label: {0}")]
    UnknownLabel(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

/// A label with the model's confidence in it (if it reports one)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SentimentPrediction {
    pub label: Sentiment,
    pub confidence: Option<f64>,
}

impl SentimentPrediction {
    pub fn new(label: Sentiment, confidence: f64) -> Self {
        Self {
            label,
            confidence: Some(confidence.clamp(0.0, 1.0)),
        }
    }
}

/// Classifies short text as positive, negative or neutral.
pub trait SentimentModel: Send + Sync {
    /// Human-readable adapter name (for logs)
    fn name(&self) -> &str;

    /// Verify the model is reachable. Called once when the engine is built;
    /// a failure degrades the engine to lexical sentiment.
    fn health_check(&self) -> Result<(), SentimentModelError> {
        Ok(())
    }

    fn predict(&self, text: &str) -> Result<SentimentPrediction, SentimentModelError>;
}

/// Word-list sentiment as a [`SentimentModel`]. Never fails.
///
/// The engine's backend when no model is configured or healthy, and the
/// per-call fallback when a configured model errors.
#[derive(Debug, Clone, Copy, Default)]
pub struct LexicalSentimentModel;

impl LexicalSentimentModel {
    pub fn label(&self, text: &str) -> Sentiment {
        Sentiment::from_lexicon(text)
    }
}

impl SentimentModel for LexicalSentimentModel {
    fn name(&self) -> &str {
        "lexical"
    }

    fn predict(&self, text: &str) -> Result<SentimentPrediction, SentimentModelError> {
        Ok(SentimentPrediction {
            label: self.label(text),
            confidence: None,
        })
    }
}
