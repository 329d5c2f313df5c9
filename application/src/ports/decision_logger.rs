//! Port for structured decision logging.
//!
//! Defines the [`DecisionLogger`] trait for recording every ranking the
//! engine produces (question, options, selection, confidence) to a
//! machine-readable audit log.
//!
//! This is separate from `tracing`-based operation logs: tracing handles
//! human-readable diagnostics, while this port captures each decision in a
//! replayable format (JSONL).

use serde_json::Value;

/// A structured decision event for logging.
pub struct DecisionEvent {
    /// Event type identifier (e.g., "ranking", "ranking_failed").
    pub event_type: &'static str,
    /// JSON payload with event-specific data.
    pub payload: Value,
}

impl DecisionEvent {
    pub fn new(event_type: &'static str, payload: Value) -> Self {
        Self {
            event_type,
            payload,
        }
    }
}

/// Port for logging decision events.
///
/// `log` is synchronous and non-fallible; logging failures never disturb
/// ranking.
pub trait DecisionLogger: Send + Sync {
    fn log(&self, event: DecisionEvent);
}

/// No-op implementation for tests and when logging is disabled.
pub struct NoDecisionLogger;

impl DecisionLogger for NoDecisionLogger {
    fn log(&self, _event: DecisionEvent) {}
}
