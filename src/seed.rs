//! Bundled seed dataset.
//!
//! Both stores start from a static dataset compiled into the crate. The
//! dataset uses the same shape as serialized records: a capitalized `Id`
//! key and camel-case field names.

use crate::subject::domain::{PersistedSubjectData, Subject, SubjectDomainError, SubjectId};
use crate::task::domain::{PersistedTaskData, Task, TaskDomainError, TaskId};
use std::collections::HashSet;
use thiserror::Error;

const TASKS_JSON: &str = include_str!("../data/tasks.json");
const SUBJECTS_JSON: &str = include_str!("../data/subjects.json");

/// Errors raised while loading a seed dataset.
#[derive(Debug, Error)]
pub enum SeedError {
    /// The dataset is not valid JSON of the expected shape.
    #[error("malformed seed data: {0}")]
    Json(#[from] serde_json::Error),

    /// A seeded task violates a domain rule.
    #[error("invalid seeded task: {0}")]
    Task(#[from] TaskDomainError),

    /// A seeded subject violates a domain rule.
    #[error("invalid seeded subject: {0}")]
    Subject(#[from] SubjectDomainError),

    /// Two seeded tasks share an identifier.
    #[error("duplicate seeded task identifier: {0}")]
    DuplicateTaskId(TaskId),

    /// Two seeded subjects share an identifier.
    #[error("duplicate seeded subject identifier: {0}")]
    DuplicateSubjectId(SubjectId),
}

/// Returns the bundled seed tasks in dataset order.
///
/// # Errors
///
/// Returns [`SeedError`] when the bundled dataset is malformed.
pub fn tasks() -> Result<Vec<Task>, SeedError> {
    parse_tasks(TASKS_JSON)
}

/// Returns the bundled seed subjects in dataset order.
///
/// # Errors
///
/// Returns [`SeedError`] when the bundled dataset is malformed.
pub fn subjects() -> Result<Vec<Subject>, SeedError> {
    parse_subjects(SUBJECTS_JSON)
}

/// Parses a JSON task dataset.
///
/// # Errors
///
/// Returns [`SeedError`] when the input is malformed, a record is
/// inconsistent, or identifiers repeat.
pub fn parse_tasks(json: &str) -> Result<Vec<Task>, SeedError> {
    let records: Vec<PersistedTaskData> = serde_json::from_str(json)?;
    let mut seen = HashSet::with_capacity(records.len());
    records
        .into_iter()
        .map(|record| {
            if !seen.insert(record.id) {
                return Err(SeedError::DuplicateTaskId(record.id));
            }
            Ok(Task::from_persisted(record)?)
        })
        .collect()
}

/// Parses a JSON subject dataset.
///
/// # Errors
///
/// Returns [`SeedError`] when the input is malformed, a record is invalid,
/// or identifiers repeat.
pub fn parse_subjects(json: &str) -> Result<Vec<Subject>, SeedError> {
    let records: Vec<PersistedSubjectData> = serde_json::from_str(json)?;
    let mut seen = HashSet::with_capacity(records.len());
    records
        .into_iter()
        .map(|record| {
            if !seen.insert(record.id) {
                return Err(SeedError::DuplicateSubjectId(record.id));
            }
            Ok(Subject::from_persisted(record)?)
        })
        .collect()
}
