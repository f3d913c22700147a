//! In-memory repository holding tasks for the lifetime of the process.

use async_trait::async_trait;
use mockable::Clock;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};
use tracing::{debug, info, warn};

use crate::{
    config::StoreConfig,
    latency::{LatencyProfile, StoreOperation},
    seed::{self, SeedError},
    task::{
        domain::{Task, TaskDraft, TaskId, TaskPatch},
        ports::{TaskRepository, TaskRepositoryError, TaskRepositoryResult},
    },
};

/// Thread-safe in-memory task repository.
///
/// Tasks keep their insertion order. Identifiers come from a high-water mark
/// so an identifier is never handed out twice, even after deletions.
pub struct InMemoryTaskRepository<C: Clock + Send + Sync> {
    state: Arc<RwLock<InMemoryTaskState>>,
    clock: Arc<C>,
    latency: LatencyProfile,
}

#[derive(Debug, Default)]
struct InMemoryTaskState {
    tasks: Vec<Task>,
    last_id: Option<TaskId>,
}

impl InMemoryTaskState {
    fn with_tasks(tasks: Vec<Task>) -> Self {
        let last_id = tasks.iter().map(Task::id).max();
        Self { tasks, last_id }
    }

    fn next_id(&mut self) -> TaskId {
        let id = self.last_id.map_or(TaskId::FIRST, TaskId::next);
        self.last_id = Some(id);
        id
    }

    fn position(&self, id: TaskId) -> TaskRepositoryResult<usize> {
        self.tasks
            .iter()
            .position(|task| task.id() == id)
            .ok_or_else(|| {
                warn!(task_id = %id, "Task not found");
                TaskRepositoryError::NotFound(id)
            })
    }

    fn task_mut(&mut self, id: TaskId) -> TaskRepositoryResult<&mut Task> {
        let index = self.position(id)?;
        self.tasks
            .get_mut(index)
            .ok_or(TaskRepositoryError::NotFound(id))
    }
}

impl<C: Clock + Send + Sync> Clone for InMemoryTaskRepository<C> {
    fn clone(&self) -> Self {
        Self {
            state: Arc::clone(&self.state),
            clock: Arc::clone(&self.clock),
            latency: self.latency,
        }
    }
}

impl<C: Clock + Send + Sync> InMemoryTaskRepository<C> {
    /// Creates an empty repository that resolves immediately.
    #[must_use]
    pub fn new(clock: Arc<C>) -> Self {
        Self::with_tasks(clock, Vec::new())
    }

    /// Creates a repository holding the given tasks in order.
    #[must_use]
    pub fn with_tasks(clock: Arc<C>, tasks: Vec<Task>) -> Self {
        Self {
            state: Arc::new(RwLock::new(InMemoryTaskState::with_tasks(tasks))),
            clock,
            latency: LatencyProfile::none(),
        }
    }

    /// Creates a repository holding the bundled seed tasks.
    ///
    /// # Errors
    ///
    /// Returns [`SeedError`] when the bundled dataset is malformed.
    pub fn seeded(clock: Arc<C>) -> Result<Self, SeedError> {
        let tasks = seed::tasks()?;
        info!(task_count = tasks.len(), "Seeded task store");
        Ok(Self::with_tasks(clock, tasks))
    }

    /// Creates a repository as described by the store configuration.
    ///
    /// # Errors
    ///
    /// Returns [`SeedError`] when seeding is enabled and the bundled dataset
    /// is malformed.
    pub fn from_config(clock: Arc<C>, config: &StoreConfig) -> Result<Self, SeedError> {
        let repository = if config.seeds() {
            Self::seeded(clock)?
        } else {
            Self::new(clock)
        };
        Ok(repository.with_latency(config.task_latency()))
    }

    /// Replaces the simulated latency profile.
    #[must_use]
    pub const fn with_latency(mut self, latency: LatencyProfile) -> Self {
        self.latency = latency;
        self
    }

    fn read_state(&self) -> TaskRepositoryResult<RwLockReadGuard<'_, InMemoryTaskState>> {
        self.state.read().map_err(|err| {
            TaskRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })
    }

    fn write_state(&self) -> TaskRepositoryResult<RwLockWriteGuard<'_, InMemoryTaskState>> {
        self.state.write().map_err(|err| {
            TaskRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })
    }

    async fn pause(&self, operation: StoreOperation) {
        debug!(operation = operation.as_str(), "Task store operation");
        self.latency.pause(operation).await;
    }
}

#[async_trait]
impl<C: Clock + Send + Sync> TaskRepository for InMemoryTaskRepository<C> {
    async fn all(&self) -> TaskRepositoryResult<Vec<Task>> {
        self.pause(StoreOperation::GetAll).await;
        let state = self.read_state()?;
        Ok(state.tasks.clone())
    }

    async fn find_by_id(&self, id: TaskId) -> TaskRepositoryResult<Option<Task>> {
        self.pause(StoreOperation::GetById).await;
        let state = self.read_state()?;
        Ok(state.tasks.iter().find(|task| task.id() == id).cloned())
    }

    async fn create(&self, draft: TaskDraft) -> TaskRepositoryResult<Task> {
        self.pause(StoreOperation::Create).await;
        let mut state = self.write_state()?;
        let id = state.next_id();
        let task = Task::create(id, draft, &*self.clock);
        state.tasks.push(task.clone());
        debug!(task_id = %id, "Task created");
        Ok(task)
    }

    async fn update(&self, id: TaskId, patch: TaskPatch) -> TaskRepositoryResult<Task> {
        self.pause(StoreOperation::Update).await;
        let mut state = self.write_state()?;
        let task = state.task_mut(id)?;
        task.apply(patch, &*self.clock);
        debug!(task_id = %id, "Task updated");
        Ok(task.clone())
    }

    async fn delete(&self, id: TaskId) -> TaskRepositoryResult<Task> {
        self.pause(StoreOperation::Delete).await;
        let mut state = self.write_state()?;
        let index = state.position(id)?;
        let removed = state.tasks.remove(index);
        debug!(task_id = %id, "Task deleted");
        Ok(removed)
    }

    async fn mark_complete(&self, id: TaskId) -> TaskRepositoryResult<Task> {
        self.pause(StoreOperation::MarkComplete).await;
        let mut state = self.write_state()?;
        let task = state.task_mut(id)?;
        task.mark_complete(&*self.clock);
        debug!(task_id = %id, "Task marked complete");
        Ok(task.clone())
    }
}
