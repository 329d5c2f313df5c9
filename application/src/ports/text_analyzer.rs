//! Text analysis port
//!
//! Tokenizer / part-of-speech tagger / lemmatizer consumed by question
//! classification and keyword extraction. This capability is required: an
//! engine cannot be built without one.

use neuroform_domain::Token;
use thiserror::Error;

/// Errors that can occur during text analysis
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AnalyzerError {
    #[error("Text analyzer unavailable: {0}")]
    Unavailable(String),

    #[error("Text analysis failed: {0}")]
    Failed(String),
}

/// Tokenizes and tags plain text.
///
/// Implementations must be safe for concurrent read-only use; the engine
/// shares one analyzer across every ranking call.
pub trait TextAnalyzer: Send + Sync {
    /// Human-readable adapter name (for logs)
    fn name(&self) -> &str;

    /// Verify the analyzer is loaded and usable. Called once when the
    /// engine is built.
    fn health_check(&self) -> Result<(), AnalyzerError> {
        Ok(())
    }

    /// Tokenize `text`, returning tokens in text order.
    ///
    /// Each token carries a lowercased surface form, a lemma, a
    /// part-of-speech tag and a stop-word flag.
    fn analyze(&self, text: &str) -> Result<Vec<Token>, AnalyzerError>;
}
