//! Service layer for task creation, mutation, and dashboard queries.

use crate::{
    config::{DEFAULT_EVENT_CAPACITY, StoreConfig},
    events::{ChangeEvent, ChangeFeed, ChangeKind},
    task::{
        domain::{Priority, Task, TaskDomainError, TaskDraft, TaskId, TaskPatch},
        ports::{TaskRepository, TaskRepositoryError},
        query::{
            self, CalendarMonth, CompletionStats, StatusCounts, TaskFilter, visible_tasks,
        },
    },
};
use chrono::{DateTime, Local, NaiveDate, Utc};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::broadcast;
use tracing::{debug, info};

/// Request payload for creating a task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateTaskRequest {
    title: String,
    subject: String,
    due_date: DateTime<Utc>,
    description: Option<String>,
    priority: Priority,
}

impl CreateTaskRequest {
    /// Creates a request with the required fields and medium priority.
    #[must_use]
    pub fn new(
        title: impl Into<String>,
        subject: impl Into<String>,
        due_date: DateTime<Utc>,
    ) -> Self {
        Self {
            title: title.into(),
            subject: subject.into(),
            due_date,
            description: None,
            priority: Priority::default(),
        }
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the priority.
    #[must_use]
    pub const fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    fn into_draft(self) -> Result<TaskDraft, TaskDomainError> {
        let title = required_text(&self.title, TaskDomainError::EmptyTitle)?;
        let subject = required_text(&self.subject, TaskDomainError::EmptySubject)?;
        let mut draft = TaskDraft::new(title, subject, self.due_date).with_priority(self.priority);
        if let Some(description) = self.description {
            draft = draft.with_description(description.trim());
        }
        Ok(draft)
    }
}

fn required_text(value: &str, empty: TaskDomainError) -> Result<String, TaskDomainError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(empty);
    }
    Ok(trimmed.to_owned())
}

fn validate_patch(mut patch: TaskPatch) -> Result<TaskPatch, TaskDomainError> {
    if let Some(title) = patch.title.take() {
        patch.title = Some(required_text(&title, TaskDomainError::EmptyTitle)?);
    }
    if let Some(subject) = patch.subject.take() {
        patch.subject = Some(required_text(&subject, TaskDomainError::EmptySubject)?);
    }
    Ok(patch)
}

/// Service-level errors for task operations.
#[derive(Debug, Error)]
pub enum TaskServiceError {
    /// Input validation failed.
    #[error(transparent)]
    Domain(#[from] TaskDomainError),
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] TaskRepositoryError),
}

impl TaskServiceError {
    /// Returns `true` when the task did not exist.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::Repository(TaskRepositoryError::NotFound(_)))
    }
}

/// Result type for task service operations.
pub type TaskServiceResult<T> = Result<T, TaskServiceError>;

/// Task orchestration service.
///
/// Validates input before it reaches the store, publishes a change event
/// after every successful mutation, and answers the dashboard and calendar
/// queries against the clock's local day.
pub struct TaskService<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    clock: Arc<C>,
    events: ChangeFeed<Task>,
}

impl<R, C> Clone for TaskService<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
            clock: Arc::clone(&self.clock),
            events: self.events.clone(),
        }
    }
}

impl<R, C> TaskService<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new task service.
    #[must_use]
    pub fn new(repository: Arc<R>, clock: Arc<C>) -> Self {
        Self {
            repository,
            clock,
            events: ChangeFeed::new(DEFAULT_EVENT_CAPACITY),
        }
    }

    /// Creates a task service using the configured event capacity.
    #[must_use]
    pub fn from_config(repository: Arc<R>, clock: Arc<C>, config: &StoreConfig) -> Self {
        Self {
            repository,
            clock,
            events: ChangeFeed::new(config.event_capacity()),
        }
    }

    /// Subscribes to task changes made through this service.
    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<ChangeEvent<Task>> {
        self.events.subscribe()
    }

    fn now(&self) -> DateTime<Local> {
        self.clock.local()
    }

    /// Returns every task in store order.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Repository`] when the store fails.
    pub async fn list_tasks(&self) -> TaskServiceResult<Vec<Task>> {
        Ok(self.repository.all().await?)
    }

    /// Finds a task by identifier.
    ///
    /// Returns `Ok(None)` when the task does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Repository`] when the store fails.
    pub async fn find_task(&self, id: TaskId) -> TaskServiceResult<Option<Task>> {
        Ok(self.repository.find_by_id(id).await?)
    }

    /// Validates and creates a task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Domain`] when the title or subject is
    /// blank, or [`TaskServiceError::Repository`] when the store fails.
    pub async fn create_task(&self, request: CreateTaskRequest) -> TaskServiceResult<Task> {
        let draft = request.into_draft()?;
        let task = self.repository.create(draft).await?;
        info!(task_id = %task.id(), subject = task.subject(), "Task created");
        self.events.publish(ChangeKind::Created, task.clone());
        Ok(task)
    }

    /// Validates and merges a partial update into a task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Domain`] when a supplied title or subject
    /// is blank, or [`TaskServiceError::Repository`] when the task does not
    /// exist or the store fails.
    pub async fn update_task(&self, id: TaskId, patch: TaskPatch) -> TaskServiceResult<Task> {
        let validated = validate_patch(patch)?;
        let task = self.repository.update(id, validated).await?;
        debug!(task_id = %id, "Task updated");
        self.events.publish(ChangeKind::Updated, task.clone());
        Ok(task)
    }

    /// Deletes a task, returning the removed record.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Repository`] when the task does not exist
    /// or the store fails.
    pub async fn delete_task(&self, id: TaskId) -> TaskServiceResult<Task> {
        let task = self.repository.delete(id).await?;
        info!(task_id = %id, "Task deleted");
        self.events.publish(ChangeKind::Deleted, task.clone());
        Ok(task)
    }

    /// Marks a task complete.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Repository`] when the task does not exist
    /// or the store fails.
    pub async fn complete_task(&self, id: TaskId) -> TaskServiceResult<Task> {
        let task = self.repository.mark_complete(id).await?;
        info!(task_id = %id, "Task completed");
        self.events.publish(ChangeKind::Completed, task.clone());
        Ok(task)
    }

    /// Returns the filtered task list in display order.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Repository`] when the store fails.
    pub async fn visible_tasks(&self, filter: &TaskFilter) -> TaskServiceResult<Vec<Task>> {
        let tasks = self.repository.all().await?;
        Ok(visible_tasks(&tasks, filter, &self.now()))
    }

    /// Returns task counts per status tab.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Repository`] when the store fails.
    pub async fn status_counts(&self) -> TaskServiceResult<StatusCounts> {
        let tasks = self.repository.all().await?;
        Ok(StatusCounts::compute(&tasks, &self.now()))
    }

    /// Returns the dashboard summary counts.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Repository`] when the store fails.
    pub async fn completion_stats(&self) -> TaskServiceResult<CompletionStats> {
        let tasks = self.repository.all().await?;
        Ok(CompletionStats::compute(&tasks, &self.now()))
    }

    /// Returns incomplete tasks due today.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Repository`] when the store fails.
    pub async fn todays_tasks(&self) -> TaskServiceResult<Vec<Task>> {
        let tasks = self.repository.all().await?;
        Ok(query::todays_tasks(&tasks, &self.now()))
    }

    /// Returns incomplete tasks due before today.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Repository`] when the store fails.
    pub async fn overdue_tasks(&self) -> TaskServiceResult<Vec<Task>> {
        let tasks = self.repository.all().await?;
        Ok(query::overdue_tasks(&tasks, &self.now()))
    }

    /// Returns incomplete tasks due after the start of today.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Repository`] when the store fails.
    pub async fn upcoming_tasks(&self) -> TaskServiceResult<Vec<Task>> {
        let tasks = self.repository.all().await?;
        Ok(query::upcoming_tasks(&tasks, &self.now()))
    }

    /// Returns the tasks due on a calendar day.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Repository`] when the store fails.
    pub async fn tasks_on(&self, date: NaiveDate) -> TaskServiceResult<Vec<Task>> {
        let tasks = self.repository.all().await?;
        Ok(query::tasks_on(&tasks, date, &Local))
    }

    /// Returns the calendar grid for a month.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Domain`] when the month does not exist,
    /// or [`TaskServiceError::Repository`] when the store fails.
    pub async fn calendar_month(&self, year: i32, month: u32) -> TaskServiceResult<CalendarMonth> {
        let tasks = self.repository.all().await?;
        Ok(CalendarMonth::build(year, month, &tasks, &self.now())?)
    }
}
