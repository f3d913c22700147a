//! Error types for task domain validation and parsing.

use super::TaskId;
use thiserror::Error;

/// Errors returned while constructing or validating task values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskDomainError {
    /// Task identifiers are positive integers.
    #[error("invalid task identifier {0}, expected a positive integer")]
    InvalidTaskId(u64),

    /// The task title is empty after trimming.
    #[error("task title must not be empty")]
    EmptyTitle,

    /// The subject name is empty after trimming.
    #[error("task subject must not be empty")]
    EmptySubject,

    /// The year and month do not name a calendar month.
    #[error("invalid calendar month {year}-{month}")]
    InvalidMonth {
        /// Requested year.
        year: i32,
        /// Requested month number.
        month: u32,
    },

    /// A persisted task disagrees with itself about completion.
    #[error("task {0} must carry a completion timestamp exactly when completed")]
    InconsistentCompletion(TaskId),
}

/// Error returned while parsing priorities from text.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown task priority: {0}")]
pub struct ParsePriorityError(pub String);
