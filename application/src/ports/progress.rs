//! Progress notification port
//!
//! Defines the interface for reporting progress while a batch of form
//! questions is ranked.

use crate::use_cases::rank_batch::BatchItemError;
use neuroform_domain::Decision;

/// Callback for progress updates during batch ranking
///
/// Implementations live in the presentation layer (progress bars, plain
/// text, a GUI event stream).
pub trait RankingProgressNotifier: Send + Sync {
    /// Called once before any question is ranked
    fn on_batch_start(&self, total: usize);

    /// Called when a question was ranked
    fn on_question_ranked(&self, id: &str, decision: &Decision);

    /// Called when a question could not be ranked
    fn on_question_failed(&self, id: &str, error: &BatchItemError);

    /// Called once after every question was processed
    fn on_batch_complete(&self, succeeded: usize, failed: usize);
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoProgress;

impl RankingProgressNotifier for NoProgress {
    fn on_batch_start(&self, _total: usize) {}
    fn on_question_ranked(&self, _id: &str, _decision: &Decision) {}
    fn on_question_failed(&self, _id: &str, _error: &BatchItemError) {}
    fn on_batch_complete(&self, _succeeded: usize, _failed: usize) {}
}
