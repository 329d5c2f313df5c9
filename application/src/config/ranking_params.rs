//! Ranking parameters: use case control.
//!
//! [`RankingParams`] groups the static parameters that control how the
//! ranking use cases behave. These are application-layer concerns; the
//! scoring heuristics themselves are fixed in the domain.

use neuroform_domain::{ConfidencePolicy, DEFAULT_CONFIDENCE_THRESHOLD};
use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankingParams {
    /// Minimum confidence for autonomous selection.
    pub confidence_threshold: f64,
    /// Maximum number of questions ranked concurrently in a batch.
    pub batch_concurrency: usize,
    /// Per-question time limit imposed by the batch caller.
    pub question_timeout: Option<Duration>,
}

impl Default for RankingParams {
    fn default() -> Self {
        Self {
            confidence_threshold: DEFAULT_CONFIDENCE_THRESHOLD,
            batch_concurrency: 4,
            question_timeout: Some(Duration::from_secs(30)),
        }
    }
}

impl RankingParams {
    // ==================== Builder Methods ====================

    pub fn with_confidence_threshold(mut self, threshold: f64) -> Self {
        self.confidence_threshold = threshold;
        self
    }

    pub fn with_batch_concurrency(mut self, concurrency: usize) -> Self {
        self.batch_concurrency = concurrency.max(1);
        self
    }

    pub fn with_question_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.question_timeout = timeout;
        self
    }

    pub fn policy(&self) -> ConfidencePolicy {
        ConfidencePolicy::new(self.confidence_threshold)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default() {
        let params = RankingParams::default();
        assert_eq!(params.confidence_threshold, DEFAULT_CONFIDENCE_THRESHOLD);
        assert_eq!(params.batch_concurrency, 4);
        assert_eq!(params.question_timeout, Some(Duration::from_secs(30)));
    }

    #[test]
    fn test_builder() {
        let params = RankingParams::default()
            .with_confidence_threshold(0.75)
            .with_batch_concurrency(0)
            .with_question_timeout(None);

        assert_eq!(params.policy().threshold(), 0.75);
        assert_eq!(params.batch_concurrency, 1);
        assert!(params.question_timeout.is_none());
    }
}
