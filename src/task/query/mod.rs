//! Read-side computations over a task list.
//!
//! Everything here is a pure function of a task slice and a reference
//! instant, so views can recompute on every refresh without touching the
//! store. Calendar-day comparisons happen in the timezone of the supplied
//! `now`.

mod calendar;
mod dashboard;
mod filter;
mod stats;

pub use calendar::{CalendarDay, CalendarMonth, tasks_on};
pub use dashboard::{overdue_tasks, todays_tasks, upcoming_tasks};
pub use filter::{
    ParseStatusFilterError, StatusCounts, StatusFilter, TaskFilter, filter_tasks, sort_tasks,
    visible_tasks,
};
pub use stats::CompletionStats;
