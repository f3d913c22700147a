//! Subject catalogue service.

use crate::{
    config::{DEFAULT_EVENT_CAPACITY, StoreConfig},
    events::{ChangeEvent, ChangeFeed, ChangeKind},
    subject::{
        domain::{
            Subject, SubjectDecoration, SubjectDomainError, SubjectDraft, SubjectId, SubjectPatch,
        },
        ports::{SubjectRepository, SubjectRepositoryError},
    },
};
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::broadcast;
use tracing::info;

/// Request payload for creating a subject.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateSubjectRequest {
    name: String,
    color: String,
    icon: String,
}

impl CreateSubjectRequest {
    /// Creates a request.
    #[must_use]
    pub fn new(name: impl Into<String>, color: impl Into<String>, icon: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            color: color.into(),
            icon: icon.into(),
        }
    }

    fn into_draft(self) -> Result<SubjectDraft, SubjectDomainError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(SubjectDomainError::EmptyName);
        }
        Ok(SubjectDraft::new(name, self.color.trim(), self.icon.trim()))
    }
}

/// Service-level errors for subject operations.
#[derive(Debug, Error)]
pub enum SubjectServiceError {
    /// Input validation failed.
    #[error(transparent)]
    Domain(#[from] SubjectDomainError),
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] SubjectRepositoryError),
}

impl SubjectServiceError {
    /// Returns `true` when the subject did not exist.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::Repository(SubjectRepositoryError::NotFound(_)))
    }
}

/// Result type for subject service operations.
pub type SubjectServiceResult<T> = Result<T, SubjectServiceError>;

/// Subject catalogue service.
pub struct SubjectService<R: SubjectRepository> {
    repository: Arc<R>,
    events: ChangeFeed<Subject>,
}

impl<R: SubjectRepository> Clone for SubjectService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
            events: self.events.clone(),
        }
    }
}

impl<R: SubjectRepository> SubjectService<R> {
    /// Creates a new subject service.
    #[must_use]
    pub fn new(repository: Arc<R>) -> Self {
        Self {
            repository,
            events: ChangeFeed::new(DEFAULT_EVENT_CAPACITY),
        }
    }

    /// Creates a subject service using the configured event capacity.
    #[must_use]
    pub fn from_config(repository: Arc<R>, config: &StoreConfig) -> Self {
        Self {
            repository,
            events: ChangeFeed::new(config.event_capacity()),
        }
    }

    /// Subscribes to subject changes made through this service.
    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<ChangeEvent<Subject>> {
        self.events.subscribe()
    }

    /// Returns every subject in store order.
    ///
    /// # Errors
    ///
    /// Returns [`SubjectServiceError::Repository`] when the store fails.
    pub async fn list_subjects(&self) -> SubjectServiceResult<Vec<Subject>> {
        Ok(self.repository.all().await?)
    }

    /// Finds a subject by identifier.
    ///
    /// # Errors
    ///
    /// Returns [`SubjectServiceError::Repository`] when the store fails.
    pub async fn find_subject(&self, id: SubjectId) -> SubjectServiceResult<Option<Subject>> {
        Ok(self.repository.find_by_id(id).await?)
    }

    /// Finds the first subject whose name equals `name` exactly.
    ///
    /// # Errors
    ///
    /// Returns [`SubjectServiceError::Repository`] when the store fails.
    pub async fn find_by_name(&self, name: &str) -> SubjectServiceResult<Option<Subject>> {
        let subjects = self.repository.all().await?;
        Ok(subjects.into_iter().find(|subject| subject.name() == name))
    }

    /// Returns the decoration for a task's subject name, falling back to the
    /// defaults when no subject carries that name.
    ///
    /// # Errors
    ///
    /// Returns [`SubjectServiceError::Repository`] when the store fails.
    pub async fn decoration_for(&self, name: &str) -> SubjectServiceResult<SubjectDecoration> {
        let subjects = self.repository.all().await?;
        Ok(SubjectDecoration::resolve(&subjects, name))
    }

    /// Validates and creates a subject.
    ///
    /// # Errors
    ///
    /// Returns [`SubjectServiceError::Domain`] when the name is blank, or
    /// [`SubjectServiceError::Repository`] when the store fails.
    pub async fn create_subject(
        &self,
        request: CreateSubjectRequest,
    ) -> SubjectServiceResult<Subject> {
        let draft = request.into_draft()?;
        let subject = self.repository.create(draft).await?;
        info!(subject_id = %subject.id(), name = subject.name(), "Subject created");
        self.events.publish(ChangeKind::Created, subject.clone());
        Ok(subject)
    }

    /// Validates and merges a partial update into a subject.
    ///
    /// Renaming a subject does not rename the tasks that refer to it.
    ///
    /// # Errors
    ///
    /// Returns [`SubjectServiceError::Domain`] when a supplied name is blank,
    /// or [`SubjectServiceError::Repository`] when the subject does not exist
    /// or the store fails.
    pub async fn update_subject(
        &self,
        id: SubjectId,
        mut patch: SubjectPatch,
    ) -> SubjectServiceResult<Subject> {
        if let Some(name) = patch.name.take() {
            let trimmed = name.trim();
            if trimmed.is_empty() {
                return Err(SubjectDomainError::EmptyName.into());
            }
            patch.name = Some(trimmed.to_owned());
        }
        let subject = self.repository.update(id, patch).await?;
        self.events.publish(ChangeKind::Updated, subject.clone());
        Ok(subject)
    }

    /// Deletes a subject, returning the removed record.
    ///
    /// Tasks naming the subject keep the name as plain text.
    ///
    /// # Errors
    ///
    /// Returns [`SubjectServiceError::Repository`] when the subject does not
    /// exist or the store fails.
    pub async fn delete_subject(&self, id: SubjectId) -> SubjectServiceResult<Subject> {
        let subject = self.repository.delete(id).await?;
        info!(subject_id = %id, "Subject deleted");
        self.events.publish(ChangeKind::Deleted, subject.clone());
        Ok(subject)
    }
}
