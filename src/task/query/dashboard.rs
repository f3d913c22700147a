//! Task lists shown on the dashboard.

use crate::task::domain::Task;
use chrono::{DateTime, TimeZone, Utc};

fn incomplete_where<Tz: TimeZone>(
    tasks: &[Task],
    now: &DateTime<Tz>,
    keep: impl Fn(&Task, &DateTime<Tz>) -> bool,
) -> Vec<Task> {
    tasks
        .iter()
        .filter(|task| !task.is_completed() && keep(task, now))
        .cloned()
        .collect()
}

/// Incomplete tasks due today, in input order.
#[must_use]
pub fn todays_tasks<Tz: TimeZone>(tasks: &[Task], now: &DateTime<Tz>) -> Vec<Task> {
    incomplete_where(tasks, now, |task, at| {
        task.due_day(&at.timezone()) == at.date_naive()
    })
}

/// Incomplete tasks due before the start of today, in input order.
#[must_use]
pub fn overdue_tasks<Tz: TimeZone>(tasks: &[Task], now: &DateTime<Tz>) -> Vec<Task> {
    incomplete_where(tasks, now, |task, at| {
        task.due_day(&at.timezone()) < at.date_naive()
    })
}

/// Incomplete tasks due after the start of today, in input order.
///
/// Tasks due later today count as upcoming as well.
#[must_use]
pub fn upcoming_tasks<Tz: TimeZone>(tasks: &[Task], now: &DateTime<Tz>) -> Vec<Task> {
    let tz = now.timezone();
    let start_of_today = now
        .date_naive()
        .and_hms_opt(0, 0, 0)
        .and_then(|midnight| tz.from_local_datetime(&midnight).earliest())
        .map(|start| start.with_timezone(&Utc));
    incomplete_where(tasks, now, |task, at| {
        start_of_today.map_or_else(
            || task.due_day(&at.timezone()) >= at.date_naive(),
            |start| task.due_date() > start,
        )
    })
}
