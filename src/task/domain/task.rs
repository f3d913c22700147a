//! Task record and the inputs used to create and update it.

use super::{DueStatus, Priority, TaskDomainError, TaskId, calendar_day};
use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Study task record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    #[serde(rename = "Id")]
    id: TaskId,
    title: String,
    description: Option<String>,
    subject: String,
    due_date: DateTime<Utc>,
    priority: Priority,
    completed: bool,
    created_at: DateTime<Utc>,
    completed_at: Option<DateTime<Utc>>,
}

/// Caller-supplied fields of a new task.
///
/// The store accepts drafts as given; validation belongs to the caller.
/// Identifier, completion, and timestamps are always assigned by the store,
/// so any such keys in serialized input are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskDraft {
    /// Task title.
    pub title: String,
    /// Optional free-form description.
    #[serde(default)]
    pub description: Option<String>,
    /// Subject name, matched against subjects by equality.
    pub subject: String,
    /// Due date and time.
    pub due_date: DateTime<Utc>,
    /// Task priority.
    #[serde(default)]
    pub priority: Priority,
}

impl TaskDraft {
    /// Creates a draft with medium priority and no description.
    #[must_use]
    pub fn new(
        title: impl Into<String>,
        subject: impl Into<String>,
        due_date: DateTime<Utc>,
    ) -> Self {
        Self {
            title: title.into(),
            description: None,
            subject: subject.into(),
            due_date,
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
}

/// Partial update merged into an existing task.
///
/// Absent fields keep their current value. There is no identifier or
/// creation timestamp to overwrite; an `Id` key in serialized input is
/// ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TaskPatch {
    /// Replacement title.
    pub title: Option<String>,
    /// Replacement description. An empty description clears it.
    pub description: Option<String>,
    /// Replacement subject name.
    pub subject: Option<String>,
    /// Replacement due date.
    pub due_date: Option<DateTime<Utc>>,
    /// Replacement priority.
    pub priority: Option<Priority>,
    /// Replacement completion flag.
    pub completed: Option<bool>,
}

impl TaskPatch {
    /// Creates an empty patch.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the subject name.
    #[must_use]
    pub fn with_subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = Some(subject.into());
        self
    }

    /// Sets the due date.
    #[must_use]
    pub const fn with_due_date(mut self, due_date: DateTime<Utc>) -> Self {
        self.due_date = Some(due_date);
        self
    }

    /// Sets the priority.
    #[must_use]
    pub const fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = Some(priority);
        self
    }

    /// Sets the completion flag.
    #[must_use]
    pub const fn with_completed(mut self, completed: bool) -> Self {
        self.completed = Some(completed);
        self
    }

    /// Returns `true` when the patch changes nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Parameter object for reconstructing a stored task, such as seed data.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersistedTaskData {
    /// Persisted task identifier.
    #[serde(rename = "Id")]
    pub id: TaskId,
    /// Persisted title.
    pub title: String,
    /// Persisted description.
    #[serde(default)]
    pub description: Option<String>,
    /// Persisted subject name.
    pub subject: String,
    /// Persisted due date.
    pub due_date: DateTime<Utc>,
    /// Persisted priority.
    #[serde(default)]
    pub priority: Priority,
    /// Persisted completion flag.
    #[serde(default)]
    pub completed: bool,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Persisted completion timestamp.
    #[serde(default)]
    pub completed_at: Option<DateTime<Utc>>,
}

impl Task {
    /// Creates a new, incomplete task from a draft.
    #[must_use]
    pub fn create(id: TaskId, draft: TaskDraft, clock: &impl Clock) -> Self {
        Self {
            id,
            title: draft.title,
            description: normalize_description(draft.description),
            subject: draft.subject,
            due_date: draft.due_date,
            priority: draft.priority,
            completed: false,
            created_at: clock.utc(),
            completed_at: None,
        }
    }

    /// Reconstructs a task from stored data.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::InconsistentCompletion`] when the
    /// completion flag and completion timestamp disagree.
    pub fn from_persisted(data: PersistedTaskData) -> Result<Self, TaskDomainError> {
        if data.completed != data.completed_at.is_some() {
            return Err(TaskDomainError::InconsistentCompletion(data.id));
        }
        Ok(Self {
            id: data.id,
            title: data.title,
            description: normalize_description(data.description),
            subject: data.subject,
            due_date: data.due_date,
            priority: data.priority,
            completed: data.completed,
            created_at: data.created_at,
            completed_at: data.completed_at,
        })
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the description, if any.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Returns the subject name.
    #[must_use]
    pub fn subject(&self) -> &str {
        &self.subject
    }

    /// Returns the due date.
    #[must_use]
    pub const fn due_date(&self) -> DateTime<Utc> {
        self.due_date
    }

    /// Returns the priority.
    #[must_use]
    pub const fn priority(&self) -> Priority {
        self.priority
    }

    /// Returns whether the task is completed.
    #[must_use]
    pub const fn is_completed(&self) -> bool {
        self.completed
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the completion timestamp, set exactly when completed.
    #[must_use]
    pub const fn completed_at(&self) -> Option<DateTime<Utc>> {
        self.completed_at
    }

    /// Returns the calendar day the task is due on, as observed in `tz`.
    #[must_use]
    pub fn due_day<Tz: TimeZone>(&self, tz: &Tz) -> NaiveDate {
        calendar_day(self.due_date, tz)
    }

    /// Classifies the task relative to `now`.
    #[must_use]
    pub fn due_status<Tz: TimeZone>(&self, now: &DateTime<Tz>) -> DueStatus {
        DueStatus::classify(self.due_date, self.completed, now)
    }

    /// Merges a partial update into the task.
    ///
    /// Completing an incomplete task stamps the completion time; reopening
    /// clears it.
    pub fn apply(&mut self, patch: TaskPatch, clock: &impl Clock) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(description) = patch.description {
            self.description = normalize_description(Some(description));
        }
        if let Some(subject) = patch.subject {
            self.subject = subject;
        }
        if let Some(due_date) = patch.due_date {
            self.due_date = due_date;
        }
        if let Some(priority) = patch.priority {
            self.priority = priority;
        }
        match patch.completed {
            Some(true) if !self.completed => self.mark_complete(clock),
            Some(false) => self.reopen(),
            _ => {}
        }
    }

    /// Marks the task complete, refreshing the completion time even when it
    /// was already completed.
    pub fn mark_complete(&mut self, clock: &impl Clock) {
        self.completed = true;
        self.completed_at = Some(clock.utc());
    }

    /// Returns the task to the incomplete state.
    pub const fn reopen(&mut self) {
        self.completed = false;
        self.completed_at = None;
    }
}

fn normalize_description(description: Option<String>) -> Option<String> {
    description.filter(|text| !text.trim().is_empty())
}
