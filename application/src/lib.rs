//! Application layer for neuroform
//!
//! This crate contains the answer engine handle, use cases, port
//! definitions, and application configuration. It depends only on the
//! domain layer.

pub mod config;
pub mod engine;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::RankingParams;
pub use engine::{AnswerEngine, AnswerEngineBuilder, EngineError, SentimentBackend};
pub use ports::{
    decision_logger::{DecisionEvent, DecisionLogger, NoDecisionLogger},
    progress::{NoProgress, RankingProgressNotifier},
    sentiment_model::{LexicalSentimentModel, SentimentModel, SentimentModelError, SentimentPrediction},
    text_analyzer::{AnalyzerError, TextAnalyzer},
};
pub use use_cases::rank_answers::{RankAnswersInput, RankAnswersUseCase};
pub use use_cases::rank_batch::{
    BatchItemError, BatchOutcome, BatchSummary, QuestionItem, RankBatchUseCase,
};
