//! Status, subject, and priority filtering with display ordering.

use crate::task::domain::{Priority, Task};
use chrono::{DateTime, TimeZone};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Completion-based status criterion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusFilter {
    /// No status restriction.
    All,
    /// Incomplete tasks only.
    Active,
    /// Completed tasks only.
    Completed,
    /// Incomplete tasks due on a day before today.
    Overdue,
}

impl StatusFilter {
    /// Every status, in tab order.
    pub const ALL: [Self; 4] = [Self::All, Self::Active, Self::Completed, Self::Overdue];

    /// Returns the canonical text representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Active => "active",
            Self::Completed => "completed",
            Self::Overdue => "overdue",
        }
    }

    /// Returns whether `task` satisfies this status at `now`.
    #[must_use]
    pub fn matches<Tz: TimeZone>(self, task: &Task, now: &DateTime<Tz>) -> bool {
        match self {
            Self::All => true,
            Self::Active => !task.is_completed(),
            Self::Completed => task.is_completed(),
            Self::Overdue => {
                !task.is_completed() && task.due_day(&now.timezone()) < now.date_naive()
            }
        }
    }
}

/// Error returned while parsing a status filter from text.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown status filter: {0}")]
pub struct ParseStatusFilterError(pub String);

impl TryFrom<&str> for StatusFilter {
    type Error = ParseStatusFilterError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim().to_ascii_lowercase().as_str() {
            "all" => Ok(Self::All),
            "active" => Ok(Self::Active),
            "completed" => Ok(Self::Completed),
            "overdue" => Ok(Self::Overdue),
            _ => Err(ParseStatusFilterError(value.to_owned())),
        }
    }
}

impl FromStr for StatusFilter {
    type Err = ParseStatusFilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_from(s)
    }
}

impl fmt::Display for StatusFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Criteria narrowing the visible task list.
///
/// A task is visible when it satisfies every criterion that is set. Subject
/// and priority sets are never empty: removing the last member clears the
/// criterion.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawTaskFilter")]
pub struct TaskFilter {
    status: Option<StatusFilter>,
    subjects: Option<BTreeSet<String>>,
    priorities: Option<BTreeSet<Priority>>,
}

/// Wire shape of [`TaskFilter`] before empty sets are cleared.
#[derive(Default, Deserialize)]
#[serde(default)]
struct RawTaskFilter {
    status: Option<StatusFilter>,
    subjects: Option<BTreeSet<String>>,
    priorities: Option<BTreeSet<Priority>>,
}

impl From<RawTaskFilter> for TaskFilter {
    fn from(raw: RawTaskFilter) -> Self {
        Self {
            status: raw.status,
            subjects: raw.subjects.and_then(non_empty),
            priorities: raw.priorities.and_then(non_empty),
        }
    }
}

impl TaskFilter {
    /// Creates a filter that matches every task.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Restricts by status.
    #[must_use]
    pub const fn with_status(mut self, status: StatusFilter) -> Self {
        self.status = Some(status);
        self
    }

    /// Restricts to the given subject names. An empty set clears the
    /// criterion.
    #[must_use]
    pub fn with_subjects<I, S>(mut self, subjects: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.subjects = non_empty(subjects.into_iter().map(Into::into).collect());
        self
    }

    /// Restricts to the given priorities. An empty set clears the criterion.
    #[must_use]
    pub fn with_priorities(mut self, priorities: impl IntoIterator<Item = Priority>) -> Self {
        self.priorities = non_empty(priorities.into_iter().collect());
        self
    }

    /// Returns the status criterion.
    #[must_use]
    pub const fn status(&self) -> Option<StatusFilter> {
        self.status
    }

    /// Returns the subject criterion.
    #[must_use]
    pub const fn subjects(&self) -> Option<&BTreeSet<String>> {
        self.subjects.as_ref()
    }

    /// Returns the priority criterion.
    #[must_use]
    pub const fn priorities(&self) -> Option<&BTreeSet<Priority>> {
        self.priorities.as_ref()
    }

    /// Returns `true` when any criterion is set.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.status.is_some() || self.subjects.is_some() || self.priorities.is_some()
    }

    /// Selects `status`, or clears it when it is already selected.
    pub fn toggle_status(&mut self, status: StatusFilter) {
        self.status = if self.status == Some(status) {
            None
        } else {
            Some(status)
        };
    }

    /// Adds or removes a subject name.
    pub fn toggle_subject(&mut self, subject: &str) {
        let mut subjects = self.subjects.take().unwrap_or_default();
        if !subjects.remove(subject) {
            subjects.insert(subject.to_owned());
        }
        self.subjects = non_empty(subjects);
    }

    /// Adds or removes a priority.
    pub fn toggle_priority(&mut self, priority: Priority) {
        let mut priorities = self.priorities.take().unwrap_or_default();
        if !priorities.remove(&priority) {
            priorities.insert(priority);
        }
        self.priorities = non_empty(priorities);
    }

    /// Clears every criterion.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Returns whether `task` satisfies every set criterion at `now`.
    #[must_use]
    pub fn matches<Tz: TimeZone>(&self, task: &Task, now: &DateTime<Tz>) -> bool {
        let status_ok = self.status.is_none_or(|status| status.matches(task, now));
        let subject_ok = self
            .subjects
            .as_ref()
            .is_none_or(|subjects| subjects.contains(task.subject()));
        let priority_ok = self
            .priorities
            .as_ref()
            .is_none_or(|priorities| priorities.contains(&task.priority()));
        status_ok && subject_ok && priority_ok
    }
}

fn non_empty<T>(set: BTreeSet<T>) -> Option<BTreeSet<T>> {
    if set.is_empty() { None } else { Some(set) }
}

/// Returns the tasks satisfying `filter`, in input order.
#[must_use]
pub fn filter_tasks<Tz: TimeZone>(
    tasks: &[Task],
    filter: &TaskFilter,
    now: &DateTime<Tz>,
) -> Vec<Task> {
    tasks
        .iter()
        .filter(|task| filter.matches(task, now))
        .cloned()
        .collect()
}

/// Orders tasks for display: incomplete before completed, then earliest due
/// date first. Tasks with equal keys keep their relative order.
pub fn sort_tasks(tasks: &mut [Task]) {
    tasks.sort_by_key(|task| (task.is_completed(), task.due_date()));
}

/// Filters then sorts, producing the list a view displays.
#[must_use]
pub fn visible_tasks<Tz: TimeZone>(
    tasks: &[Task],
    filter: &TaskFilter,
    now: &DateTime<Tz>,
) -> Vec<Task> {
    let mut visible = filter_tasks(tasks, filter, now);
    sort_tasks(&mut visible);
    visible
}

/// Task counts shown next to each status tab.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct StatusCounts {
    /// Every task.
    pub all: usize,
    /// Incomplete tasks.
    pub active: usize,
    /// Completed tasks.
    pub completed: usize,
    /// Overdue tasks.
    pub overdue: usize,
}

impl StatusCounts {
    /// Counts `tasks` by status at `now`.
    #[must_use]
    pub fn compute<Tz: TimeZone>(tasks: &[Task], now: &DateTime<Tz>) -> Self {
        let count = |status: StatusFilter| {
            tasks
                .iter()
                .filter(|task| status.matches(task, now))
                .count()
        };
        Self {
            all: tasks.len(),
            active: count(StatusFilter::Active),
            completed: count(StatusFilter::Completed),
            overdue: count(StatusFilter::Overdue),
        }
    }

    /// Returns the count for one status tab.
    #[must_use]
    pub const fn get(&self, status: StatusFilter) -> usize {
        match status {
            StatusFilter::All => self.all,
            StatusFilter::Active => self.active,
            StatusFilter::Completed => self.completed,
            StatusFilter::Overdue => self.overdue,
        }
    }
}
