//! Repository port for subject storage.

use crate::subject::domain::{Subject, SubjectDraft, SubjectId, SubjectPatch};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for subject repository operations.
pub type SubjectRepositoryResult<T> = Result<T, SubjectRepositoryError>;

/// Subject storage contract.
///
/// Returned subjects are independent copies. There is no referential check
/// against tasks in either direction.
#[async_trait]
pub trait SubjectRepository: Send + Sync {
    /// Returns every subject in store order.
    async fn all(&self) -> SubjectRepositoryResult<Vec<Subject>>;

    /// Finds a subject by identifier.
    ///
    /// Returns `None` when the subject does not exist.
    async fn find_by_id(&self, id: SubjectId) -> SubjectRepositoryResult<Option<Subject>>;

    /// Stores a new subject under a fresh identifier.
    async fn create(&self, draft: SubjectDraft) -> SubjectRepositoryResult<Subject>;

    /// Merges a partial update into an existing subject.
    ///
    /// # Errors
    ///
    /// Returns [`SubjectRepositoryError::NotFound`] when the subject does not
    /// exist.
    async fn update(&self, id: SubjectId, patch: SubjectPatch)
    -> SubjectRepositoryResult<Subject>;

    /// Removes a subject, returning the removed record.
    ///
    /// # Errors
    ///
    /// Returns [`SubjectRepositoryError::NotFound`] when the subject does not
    /// exist.
    async fn delete(&self, id: SubjectId) -> SubjectRepositoryResult<Subject>;
}

/// Errors returned by subject repository implementations.
#[derive(Debug, Clone, Error)]
pub enum SubjectRepositoryError {
    /// The subject was not found.
    #[error("subject not found: {0}")]
    NotFound(SubjectId),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl SubjectRepositoryError {
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
