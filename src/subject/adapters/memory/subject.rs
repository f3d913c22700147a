//! In-memory repository holding subjects for the lifetime of the process.

use async_trait::async_trait;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};
use tracing::{debug, info, warn};

use crate::{
    config::StoreConfig,
    latency::{LatencyProfile, StoreOperation},
    seed::{self, SeedError},
    subject::{
        domain::{Subject, SubjectDraft, SubjectId, SubjectPatch},
        ports::{SubjectRepository, SubjectRepositoryError, SubjectRepositoryResult},
    },
};

/// Thread-safe in-memory subject repository.
#[derive(Debug, Clone, Default)]
pub struct InMemorySubjectRepository {
    state: Arc<RwLock<InMemorySubjectState>>,
    latency: LatencyProfile,
}

#[derive(Debug, Default)]
struct InMemorySubjectState {
    subjects: Vec<Subject>,
    last_id: Option<SubjectId>,
}

impl InMemorySubjectState {
    fn next_id(&mut self) -> SubjectId {
        let id = self.last_id.map_or(SubjectId::FIRST, SubjectId::next);
        self.last_id = Some(id);
        id
    }

    fn position(&self, id: SubjectId) -> SubjectRepositoryResult<usize> {
        self.subjects
            .iter()
            .position(|subject| subject.id() == id)
            .ok_or_else(|| {
                warn!(subject_id = %id, "Subject not found");
                SubjectRepositoryError::NotFound(id)
            })
    }
}

impl InMemorySubjectRepository {
    /// Creates an empty repository that resolves immediately.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a repository holding the given subjects in order.
    #[must_use]
    pub fn with_subjects(subjects: Vec<Subject>) -> Self {
        let last_id = subjects.iter().map(Subject::id).max();
        Self {
            state: Arc::new(RwLock::new(InMemorySubjectState { subjects, last_id })),
            latency: LatencyProfile::none(),
        }
    }

    /// Creates a repository holding the bundled seed subjects.
    ///
    /// # Errors
    ///
    /// Returns [`SeedError`] when the bundled dataset is malformed.
    pub fn seeded() -> Result<Self, SeedError> {
        let subjects = seed::subjects()?;
        info!(subject_count = subjects.len(), "Seeded subject store");
        Ok(Self::with_subjects(subjects))
    }

    /// Creates a repository as described by the store configuration.
    ///
    /// # Errors
    ///
    /// Returns [`SeedError`] when seeding is enabled and the bundled dataset
    /// is malformed.
    pub fn from_config(config: &StoreConfig) -> Result<Self, SeedError> {
        let repository = if config.seeds() {
            Self::seeded()?
        } else {
            Self::new()
        };
        Ok(repository.with_latency(config.subject_latency()))
    }

    /// Replaces the simulated latency profile.
    #[must_use]
    pub const fn with_latency(mut self, latency: LatencyProfile) -> Self {
        self.latency = latency;
        self
    }

    fn read_state(&self) -> SubjectRepositoryResult<RwLockReadGuard<'_, InMemorySubjectState>> {
        self.state.read().map_err(|err| {
            SubjectRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })
    }

    fn write_state(&self) -> SubjectRepositoryResult<RwLockWriteGuard<'_, InMemorySubjectState>> {
        self.state.write().map_err(|err| {
            SubjectRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })
    }

    async fn pause(&self, operation: StoreOperation) {
        debug!(operation = operation.as_str(), "Subject store operation");
        self.latency.pause(operation).await;
    }
}

#[async_trait]
impl SubjectRepository for InMemorySubjectRepository {
    async fn all(&self) -> SubjectRepositoryResult<Vec<Subject>> {
        self.pause(StoreOperation::GetAll).await;
        Ok(self.read_state()?.subjects.clone())
    }

    async fn find_by_id(&self, id: SubjectId) -> SubjectRepositoryResult<Option<Subject>> {
        self.pause(StoreOperation::GetById).await;
        let state = self.read_state()?;
        Ok(state.subjects.iter().find(|subject| subject.id() == id).cloned())
    }

    async fn create(&self, draft: SubjectDraft) -> SubjectRepositoryResult<Subject> {
        self.pause(StoreOperation::Create).await;
        let mut state = self.write_state()?;
        let id = state.next_id();
        let subject = Subject::create(id, draft);
        state.subjects.push(subject.clone());
        debug!(subject_id = %id, "Subject created");
        Ok(subject)
    }

    async fn update(
        &self,
        id: SubjectId,
        patch: SubjectPatch,
    ) -> SubjectRepositoryResult<Subject> {
        self.pause(StoreOperation::Update).await;
        let mut state = self.write_state()?;
        let index = state.position(id)?;
        let subject = state
            .subjects
            .get_mut(index)
            .ok_or(SubjectRepositoryError::NotFound(id))?;
        subject.apply(patch);
        debug!(subject_id = %id, "Subject updated");
        Ok(subject.clone())
    }

    async fn delete(&self, id: SubjectId) -> SubjectRepositoryResult<Subject> {
        self.pause(StoreOperation::Delete).await;
        let mut state = self.write_state()?;
        let index = state.position(id)?;
        let removed = state.subjects.remove(index);
        debug!(subject_id = %id, "Subject deleted");
        Ok(removed)
    }
}
