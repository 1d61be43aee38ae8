//! Shared error types for the services crate.

use thiserror::Error;

/// Errors emitted by the grading services.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum GradingError {
    #[error("no checks supplied for grading")]
    NoChecks,
}
