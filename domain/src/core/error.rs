//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Invalid option label: {0}")]
    InvalidLabel(String),

    #[error("Invalid voting configuration: {0}")]
    InvalidConfig(String),

    #[error("Question has no options")]
    NoOptions,
}
