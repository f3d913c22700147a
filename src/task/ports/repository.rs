//! Repository port for task storage.

use crate::task::domain::{Task, TaskDraft, TaskId, TaskPatch};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for task repository operations.
pub type TaskRepositoryResult<T> = Result<T, TaskRepositoryError>;

/// Task storage contract.
///
/// Every returned task is an independent copy; mutating it never changes
/// the stored record. Failed operations leave the store unchanged.
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Returns every task in store order.
    async fn all(&self) -> TaskRepositoryResult<Vec<Task>>;

    /// Finds a task by identifier.
    ///
    /// Returns `None` when the task does not exist.
    async fn find_by_id(&self, id: TaskId) -> TaskRepositoryResult<Option<Task>>;

    /// Stores a new task built from the draft.
    ///
    /// The store assigns a fresh identifier, marks the task incomplete, and
    /// stamps its creation time.
    async fn create(&self, draft: TaskDraft) -> TaskRepositoryResult<Task>;

    /// Merges a partial update into an existing task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::NotFound`] when the task does not exist.
    async fn update(&self, id: TaskId, patch: TaskPatch) -> TaskRepositoryResult<Task>;

    /// Removes a task, returning the removed record.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::NotFound`] when the task does not exist.
    async fn delete(&self, id: TaskId) -> TaskRepositoryResult<Task>;

    /// Marks a task complete and stamps its completion time.
    ///
    /// Completing an already completed task refreshes the completion time.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::NotFound`] when the task does not exist.
    async fn mark_complete(&self, id: TaskId) -> TaskRepositoryResult<Task>;
}

/// Errors returned by task repository implementations.
#[derive(Debug, Clone, Error)]
pub enum TaskRepositoryError {
    /// The task was not found.
    #[error("task not found: {0}")]
    NotFound(TaskId),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl TaskRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }

    /// Returns `true` for the not-found condition.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}
