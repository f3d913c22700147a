//! Dashboard summary counts.

use crate::task::domain::Task;
use chrono::{DateTime, TimeDelta, TimeZone, Utc};
use serde::Serialize;

/// Length of the "this week" horizon.
const WEEK_HORIZON_DAYS: i64 = 7;

/// Summary counts derived from the full task list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompletionStats {
    /// Incomplete tasks due before the start of today.
    pub overdue_tasks: usize,
    /// Tasks due today, completed or not.
    pub today_tasks: usize,
    /// Incomplete tasks due no later than seven days from now.
    ///
    /// There is no lower bound: overdue tasks are counted here too.
    pub week_tasks: usize,
    /// Percentage of tasks completed, rounded half up; zero for no tasks.
    pub completion_rate: u32,
}

impl CompletionStats {
    /// Computes the summary over `tasks` at `now` in a single pass.
    #[must_use]
    pub fn compute<Tz: TimeZone>(tasks: &[Task], now: &DateTime<Tz>) -> Self {
        let tz = now.timezone();
        let today = now.date_naive();
        let week_end = now.with_timezone(&Utc) + TimeDelta::days(WEEK_HORIZON_DAYS);

        let mut stats = Self::default();
        let mut completed = 0_usize;
        for task in tasks {
            let due_day = task.due_day(&tz);
            if task.is_completed() {
                completed += 1;
            } else {
                if due_day < today {
                    stats.overdue_tasks += 1;
                }
                if task.due_date() <= week_end {
                    stats.week_tasks += 1;
                }
            }
            if due_day == today {
                stats.today_tasks += 1;
            }
        }
        stats.completion_rate = completion_rate(completed, tasks.len());
        stats
    }
}

/// Rounds `completed / total * 100` half up, returning zero when `total` is
/// zero.
fn completion_rate(completed: usize, total: usize) -> u32 {
    let done = u64::try_from(completed).unwrap_or(u64::MAX);
    let all = u64::try_from(total).unwrap_or(u64::MAX);
    let numerator = done.saturating_mul(200).saturating_add(all);
    let denominator = all.saturating_mul(2);
    numerator
        .checked_div(denominator)
        .map_or(0, |rate| u32::try_from(rate).unwrap_or(100))
}
