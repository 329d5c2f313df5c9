//! Domain layer for neuroform
//!
//! This crate contains the answer-selection logic: given a form question and
//! a small set of candidate answers, deterministically rank the answers.
//! It has no dependencies on infrastructure or presentation concerns, and
//! every function here is pure and synchronous.
//!
//! # Pipeline
//!
//! ```text
//! question text ─▶ tokens ─▶ QuestionAnalysis ─┐
//!                                              ├─▶ ScoreBreakdown per option ─▶ Ranking
//! option texts ──▶ tokens ─▶ OptionFeatures ───┘
//! ```
//!
//! Tokenizing and tagging are delegated to a text-analysis capability that
//! lives outside this crate; only its output ([`Token`]) is modelled here.

pub mod analysis;
pub mod config;
pub mod core;
pub mod scoring;
pub mod util;

// Re-export commonly used types
pub use analysis::{
    ExpectedAnswerType, PartOfSpeech, QuestionAnalysis, QuestionType, Sentiment, StrategyTag,
    Token, content_lemmas, extract_keywords,
};
pub use config::{ConfigIssue, ConfigIssueCode, OutputFormat, Severity};
pub use core::error::DomainError;
pub use scoring::{
    BASE_SCORE, ConfidencePolicy, DEFAULT_CONFIDENCE_THRESHOLD, Decision, OptionFeatures,
    OptionScore, Ranking, ScoreBreakdown, score_option, select_best,
};
