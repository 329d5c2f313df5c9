//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Ranking needs at least one option; arg-max over nothing is undefined.
    #[error("No answer options supplied")]
    EmptyOptions,
}
