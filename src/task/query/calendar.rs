//! Month calendar grid.

use crate::task::domain::{Task, TaskDomainError};
use chrono::{DateTime, Datelike, Months, NaiveDate, TimeDelta, TimeZone};

/// Tasks due on `date` as observed in `tz`, in input order, completed or not.
#[must_use]
pub fn tasks_on<Tz: TimeZone>(tasks: &[Task], date: NaiveDate, tz: &Tz) -> Vec<Task> {
    tasks
        .iter()
        .filter(|task| task.due_day(tz) == date)
        .cloned()
        .collect()
}

/// One cell of a month grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarDay {
    date: NaiveDate,
    in_month: bool,
    is_today: bool,
    tasks: Vec<Task>,
}

impl CalendarDay {
    /// Returns the cell date.
    #[must_use]
    pub const fn date(&self) -> NaiveDate {
        self.date
    }

    /// Returns `true` when the day belongs to the displayed month rather than
    /// the padding weeks.
    #[must_use]
    pub const fn in_month(&self) -> bool {
        self.in_month
    }

    /// Returns `true` when the day is today.
    #[must_use]
    pub const fn is_today(&self) -> bool {
        self.is_today
    }

    /// Returns the tasks due on this day.
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }
}

/// Whole weeks, Sunday through Saturday, covering one month.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarMonth {
    first: NaiveDate,
    days: Vec<CalendarDay>,
}

impl CalendarMonth {
    /// Builds the grid for `year`/`month`, placing each task on its due day
    /// as observed in the timezone of `now`.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::InvalidMonth`] when the month does not
    /// exist.
    pub fn build<Tz: TimeZone>(
        year: i32,
        month: u32,
        tasks: &[Task],
        now: &DateTime<Tz>,
    ) -> Result<Self, TaskDomainError> {
        let invalid = || TaskDomainError::InvalidMonth { year, month };
        let first = NaiveDate::from_ymd_opt(year, month, 1).ok_or_else(invalid)?;
        let last = first
            .checked_add_months(Months::new(1))
            .and_then(|next| next.pred_opt())
            .ok_or_else(invalid)?;
        let lead = first.weekday().num_days_from_sunday();
        let trail = 6 - last.weekday().num_days_from_sunday();
        let grid_start = first - TimeDelta::days(i64::from(lead));
        let grid_end = last + TimeDelta::days(i64::from(trail));

        let tz = now.timezone();
        let today = now.date_naive();
        let days = grid_start
            .iter_days()
            .take_while(|date| *date <= grid_end)
            .map(|date| CalendarDay {
                date,
                in_month: date.month() == month && date.year() == year,
                is_today: date == today,
                tasks: tasks_on(tasks, date, &tz),
            })
            .collect();

        Ok(Self { first, days })
    }

    /// Builds the grid for the month containing `now`.
    #[must_use]
    pub fn current<Tz: TimeZone>(tasks: &[Task], now: &DateTime<Tz>) -> Self {
        let today = now.date_naive();
        Self::build(today.year(), today.month(), tasks, now).unwrap_or_else(|_| Self {
            first: today,
            days: Vec::new(),
        })
    }

    /// Returns the displayed year.
    #[must_use]
    pub fn year(&self) -> i32 {
        self.first.year()
    }

    /// Returns the displayed month number, starting at 1.
    #[must_use]
    pub fn month(&self) -> u32 {
        self.first.month()
    }

    /// Returns the month heading, such as `December 2024`.
    #[must_use]
    pub fn title(&self) -> String {
        self.first.format("%B %Y").to_string()
    }

    /// Returns every cell in display order.
    #[must_use]
    pub fn days(&self) -> &[CalendarDay] {
        &self.days
    }

    /// Returns the cells grouped into weeks.
    pub fn weeks(&self) -> impl Iterator<Item = &[CalendarDay]> {
        self.days.chunks(7)
    }

    /// Returns the cell for `date`, if it is displayed.
    #[must_use]
    pub fn day(&self, date: NaiveDate) -> Option<&CalendarDay> {
        self.days.iter().find(|day| day.date == date)
    }

    /// Returns the year and month shown before this one.
    #[must_use]
    pub fn previous_month(&self) -> (i32, u32) {
        let previous = self
            .first
            .checked_sub_months(Months::new(1))
            .unwrap_or(self.first);
        (previous.year(), previous.month())
    }

    /// Returns the year and month shown after this one.
    #[must_use]
    pub fn next_month(&self) -> (i32, u32) {
        let next = self
            .first
            .checked_add_months(Months::new(1))
            .unwrap_or(self.first);
        (next.year(), next.month())
    }
}
