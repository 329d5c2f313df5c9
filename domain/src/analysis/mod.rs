//! Question analysis domain
//!
//! Turns a tagged question into a [`QuestionAnalysis`]:
//!
//! ```text
//! tokens ──▶ QuestionType ──▶ StrategyTag
//!        │               └──▶ ExpectedAnswerType
//!        └─▶ keywords
//! text ────▶ Sentiment (model-backed or lexical)
//! ```

pub mod entities;
pub mod expected_answer;
pub mod keywords;
pub mod question_type;
pub mod sentiment;
pub mod strategy;
pub mod token;

pub use entities::QuestionAnalysis;
pub use expected_answer::ExpectedAnswerType;
pub use keywords::{content_lemmas, extract_keywords};
pub use question_type::QuestionType;
pub use sentiment::Sentiment;
pub use strategy::StrategyTag;
pub use token::{PartOfSpeech, Token};
