//! Error types for subject domain validation.

use thiserror::Error;

/// Errors returned while constructing or validating subject values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SubjectDomainError {
    /// Subject identifiers are positive integers.
    #[error("invalid subject identifier {0}, expected a positive integer")]
    InvalidSubjectId(u64),

    /// The subject name is empty after trimming.
    #[error("subject name must not be empty")]
    EmptyName,
}
