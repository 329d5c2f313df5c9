//! Rank Batch use case
//!
//! Ranks every question scraped from a form. Items are independent: one
//! failing item is reported and the rest of the batch carries on.

use super::rank_answers::{RankAnswersInput, RankAnswersUseCase};
use crate::engine::EngineError;
use crate::ports::progress::RankingProgressNotifier;
use neuroform_domain::Decision;
use serde::Deserialize;
use std::time::Duration;
use thiserror::Error;

/// Why a batch item produced no decision
#[derive(Error, Debug, Clone, PartialEq)]
pub enum BatchItemError {
    #[error(transparent)]
    Rank(#[from] EngineError),

    #[error("Timed out after {0:?}")]
    TimedOut(Duration),

    #[error("Worker failed: {0}")]
    Worker(String),
}

/// One form question with its candidate answers
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct QuestionItem {
    /// Caller-chosen identifier (e.g. the form field name)
    #[serde(default)]
    pub id: String,
    #[serde(flatten)]
    pub input: RankAnswersInput,
}

impl QuestionItem {
    pub fn new(id: impl Into<String>, input: RankAnswersInput) -> Self {
        Self {
            id: id.into(),
            input,
        }
    }
}

/// Result for one batch item, in input order
#[derive(Debug, Clone)]
pub struct BatchOutcome {
    pub id: String,
    pub result: Result<Decision, BatchItemError>,
}

impl BatchOutcome {
    pub fn is_success(&self) -> bool {
        self.result.is_ok()
    }
}

/// Counts of a finished batch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BatchSummary {
    pub succeeded: usize,
    pub failed: usize,
}

impl BatchSummary {
    pub fn from_outcomes(outcomes: &[BatchOutcome]) -> Self {
        let succeeded = outcomes.iter().filter(|o| o.is_success()).count();
        Self {
            succeeded,
            failed: outcomes.len() - succeeded,
        }
    }
}

/// Use case for ranking a batch of form questions.
///
/// [`execute`](Self::execute) runs the items one after another.
/// Callers that want concurrency drive [`execute_item`](Self::execute_item)
/// from their own workers and finish with [`finish`](Self::finish).
#[derive(Clone)]
pub struct RankBatchUseCase {
    rank: RankAnswersUseCase,
}

impl RankBatchUseCase {
    pub fn new(rank: RankAnswersUseCase) -> Self {
        Self { rank }
    }

    /// Rank all items sequentially, reporting progress as it goes.
    pub fn execute(
        &self,
        items: &[QuestionItem],
        progress: &dyn RankingProgressNotifier,
    ) -> Vec<BatchOutcome> {
        progress.on_batch_start(items.len());
        let outcomes: Vec<BatchOutcome> = items
            .iter()
            .map(|item| self.execute_item(item, progress))
            .collect();
        self.finish(&outcomes, progress);
        outcomes
    }

    /// Rank a single item and report it.
    pub fn execute_item(
        &self,
        item: &QuestionItem,
        progress: &dyn RankingProgressNotifier,
    ) -> BatchOutcome {
        let result = self.rank.execute(&item.input).map_err(BatchItemError::from);
        Self::report(&item.id, result, progress)
    }

    /// Report an outcome produced outside [`execute_item`](Self::execute_item)
    /// (a timeout or a crashed worker).
    pub fn report(
        id: &str,
        result: Result<Decision, BatchItemError>,
        progress: &dyn RankingProgressNotifier,
    ) -> BatchOutcome {
        match &result {
            Ok(decision) => progress.on_question_ranked(id, decision),
            Err(e) => progress.on_question_failed(id, e),
        }
        BatchOutcome {
            id: id.to_string(),
            result,
        }
    }

    /// Emit the batch-complete notification.
    pub fn finish(
        &self,
        outcomes: &[BatchOutcome],
        progress: &dyn RankingProgressNotifier,
    ) -> BatchSummary {
        let summary = BatchSummary::from_outcomes(outcomes);
        progress.on_batch_complete(summary.succeeded, summary.failed);
        summary
    }
}
