//! Port definitions (interfaces for external adapters)
//!
//! Ports define the contracts that infrastructure adapters must implement.

pub mod decision_logger;
pub mod progress;
pub mod sentiment_model;
pub mod text_analyzer;
