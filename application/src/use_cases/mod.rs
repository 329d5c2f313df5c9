//! Use cases
//!
//! Application-level operations that orchestrate domain logic.

pub mod rank_answers;
pub mod rank_batch;
