//! Answer engine errors

use crate::ports::text_analyzer::AnalyzerError;
use neuroform_domain::DomainError;
use thiserror::Error;

/// Errors surfaced by the [`AnswerEngine`](super::AnswerEngine).
///
/// A degraded sentiment model is not an error; it only produces a
/// `warn!` event.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// The required text analyzer is missing or failed to initialize.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// The caller supplied input that cannot be ranked.
    #[error("Invalid input: {0}")]
    InvalidInput(#[from] DomainError),

    /// The text analyzer failed while processing a question or option.
    #[error("Text analysis error: {0}")]
    Analyzer(#[from] AnalyzerError),
}

impl EngineError {
    /// Whether the caller should skip auto-fill for this question only
    /// (as opposed to halting answer selection entirely)
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, EngineError::InvalidInput(_))
    }
}
