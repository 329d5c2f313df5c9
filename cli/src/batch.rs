//! Concurrent batch ranking
//!
//! The engine is synchronous (and its HTTP sentiment client blocking), so
//! every item runs on a blocking worker thread under the async runtime.

use futures::StreamExt;
use neuroform_application::{
    BatchItemError, BatchOutcome, NoProgress, QuestionItem, RankBatchUseCase, RankingParams,
    RankingProgressNotifier,
};
use neuroform_domain::Decision;
use std::sync::Arc;

/// Rank items on blocking worker threads, at most `batch_concurrency` at a
/// time, each bounded by the per-question timeout. Outcomes keep input order.
pub async fn rank_concurrently(
    batch: RankBatchUseCase,
    items: Vec<QuestionItem>,
    params: &RankingParams,
    progress: Arc<dyn RankingProgressNotifier>,
) -> Vec<BatchOutcome> {
    progress.on_batch_start(items.len());
    let timeout = params.question_timeout;

    let tasks = items.into_iter().map(|item| {
        let batch = batch.clone();
        let progress = Arc::clone(&progress);
        async move {
            let id = item.id.clone();
            let worker = tokio::task::spawn_blocking(move || {
                batch.execute_item(&item, &NoProgress).result
            });
            let result = match timeout {
                Some(limit) => match tokio::time::timeout(limit, worker).await {
                    Ok(joined) => flatten_join(joined),
                    Err(_) => Err(BatchItemError::TimedOut(limit)),
                },
                None => flatten_join(worker.await),
            };
            RankBatchUseCase::report(&id, result, progress.as_ref())
        }
    });

    let outcomes: Vec<BatchOutcome> = futures::stream::iter(tasks)
        .buffered(params.batch_concurrency.max(1))
        .collect()
        .await;

    batch.finish(&outcomes, progress.as_ref());
    outcomes
}

fn flatten_join(
    joined: Result<Result<Decision, BatchItemError>, tokio::task::JoinError>,
) -> Result<Decision, BatchItemError> {
    joined.unwrap_or_else(|e| Err(BatchItemError::Worker(e.to_string())))
}
