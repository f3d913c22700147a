//! Calendar-day classification of due dates.

use chrono::{DateTime, NaiveDate, TimeZone, Utc};

/// Returns the calendar day of `instant` as observed in `tz`.
#[must_use]
pub fn calendar_day<Tz: TimeZone>(instant: DateTime<Utc>, tz: &Tz) -> NaiveDate {
    instant.with_timezone(tz).date_naive()
}

/// Where a task stands relative to the current day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DueStatus {
    /// The task has been completed.
    Completed,
    /// Incomplete and due on a day before today.
    Overdue,
    /// Incomplete and due today.
    DueToday,
    /// Incomplete and due after today.
    Upcoming,
}

impl DueStatus {
    /// Classifies an incomplete or completed due date against `now`.
    #[must_use]
    pub fn classify<Tz: TimeZone>(due: DateTime<Utc>, completed: bool, now: &DateTime<Tz>) -> Self {
        if completed {
            return Self::Completed;
        }
        let today = now.date_naive();
        let due_day = calendar_day(due, &now.timezone());
        match due_day.cmp(&today) {
            std::cmp::Ordering::Less => Self::Overdue,
            std::cmp::Ordering::Equal => Self::DueToday,
            std::cmp::Ordering::Greater => Self::Upcoming,
        }
    }

    /// Returns the display colour role for this status.
    #[must_use]
    pub const fn tone(self) -> &'static str {
        match self {
            Self::Completed => "success",
            Self::Overdue => "error",
            Self::DueToday => "warning",
            Self::Upcoming => "info",
        }
    }
}
