//! Ranking of scored options.

use super::option_scorer::ScoreBreakdown;
use crate::analysis::{QuestionAnalysis, Sentiment};
use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};

/// Stable arg-max: index and value of the highest score, first index on ties.
///
/// # Example
///
/// ```
/// use neuroform_domain::scoring::select_best;
///
/// assert_eq!(select_best(&[0.4, 0.9, 0.9]).unwrap(), (1, 0.9));
/// assert!(select_best(&[]).is_err());
/// ```
pub fn select_best(scores: &[f64]) -> Result<(usize, f64), DomainError> {
    let (&first, rest) = scores.split_first().ok_or(DomainError::EmptyOptions)?;
    let mut best = (0, first);
    for (offset, &score) in rest.iter().enumerate() {
        if score > best.1 {
            best = (offset + 1, score);
        }
    }
    Ok(best)
}

/// Score of one candidate answer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptionScore {
    /// Position in the caller's option sequence
    pub index: usize,
    pub text: String,
    pub sentiment: Sentiment,
    pub breakdown: ScoreBreakdown,
    /// Final clamped score
    pub score: f64,
}

impl OptionScore {
    pub fn new(index: usize, text: impl Into<String>, sentiment: Sentiment, breakdown: ScoreBreakdown) -> Self {
        Self {
            index,
            text: text.into(),
            sentiment,
            score: breakdown.score(),
            breakdown,
        }
    }
}

/// Result of ranking all options for one question
///
/// Invariant: `best_index < scores.len()` and
/// `confidence == scores[best_index].score == max(scores)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ranking {
    pub question: String,
    pub analysis: QuestionAnalysis,
    pub scores: Vec<OptionScore>,
    pub best_index: usize,
    /// Winning score, a proxy for certainty rather than a probability
    pub confidence: f64,
}

impl Ranking {
    /// Build a ranking from per-option scores in input order.
    pub fn new(
        question: impl Into<String>,
        analysis: QuestionAnalysis,
        scores: Vec<OptionScore>,
    ) -> Result<Self, DomainError> {
        let values: Vec<f64> = scores.iter().map(|s| s.score).collect();
        let (best_index, confidence) = select_best(&values)?;
        Ok(Self {
            question: question.into(),
            analysis,
            scores,
            best_index,
            confidence,
        })
    }

    /// The winning option
    pub fn best(&self) -> &OptionScore {
        &self.scores[self.best_index]
    }

    /// `(best_index, confidence)` pair handed back to the form orchestrator
    pub fn selection(&self) -> (usize, f64) {
        (self.best_index, self.confidence)
    }
}
