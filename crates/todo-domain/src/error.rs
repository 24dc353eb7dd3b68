//! Domain Errors
//!
//! Errors raised while validating user input. The list mutations themselves
//! are total and swallow these.

use thiserror::Error;

/// Common result type for domain operations
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// Todo text was empty after trimming
    #[error("todo text is empty")]
    EmptyText,
    /// A status key outside the closed set
    #[error("unknown status: {0:?}")]
    UnknownStatus(String),
}
