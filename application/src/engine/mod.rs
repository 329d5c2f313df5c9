//! Answer engine: the explicit initialization handle that owns the loaded
//! text-analysis and sentiment capabilities.

mod answer_engine;
mod error;

pub use answer_engine::{AnswerEngine, AnswerEngineBuilder, SentimentBackend};
pub use error::EngineError;
