//! In-memory integration tests for task store operations.

use std::sync::Arc;

use super::helpers::{
    FixedClock, TestTaskService, clock, days_from_now, empty_tasks, seeded_tasks,
};
use chrono::{Datelike, Local, TimeDelta};
use rstest::rstest;
use studyflow::{
    events::ChangeKind,
    task::{
        adapters::memory::InMemoryTaskRepository,
        domain::{Priority, TaskDomainError, TaskId, TaskPatch},
        query::{StatusFilter, TaskFilter},
        services::{CreateTaskRequest, TaskService, TaskServiceError},
    },
};

fn request(title: &str, subject: &str, days: i64) -> CreateTaskRequest {
    CreateTaskRequest::new(title, subject, days_from_now(days))
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn seeded_store_lists_bundled_tasks_in_order(
    seeded_tasks: Result<TestTaskService, eyre::Report>,
) -> eyre::Result<()> {
    let service = seeded_tasks?;

    let tasks = service.list_tasks().await?;

    let ids: Vec<u64> = tasks.iter().map(|task| task.id().value()).collect();
    eyre::ensure!(ids == vec![1, 2, 3, 4, 5, 6, 7], "unexpected seed order {ids:?}");
    let stats = service.completion_stats().await?;
    eyre::ensure!(
        stats.completion_rate == 29,
        "expected 2 of 7 complete to round to 29, got {}",
        stats.completion_rate
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn created_tasks_continue_after_seeded_ids(
    seeded_tasks: Result<TestTaskService, eyre::Report>,
) -> eyre::Result<()> {
    let service = seeded_tasks?;

    let created = service
        .create_task(request("Problem set 5", "Mathematics", 3))
        .await?;

    eyre::ensure!(created.id().value() == 8, "expected id 8, got {}", created.id());
    eyre::ensure!(!created.is_completed(), "new task must start incomplete");
    eyre::ensure!(created.priority() == Priority::Medium, "default priority is medium");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn deleted_identifiers_are_never_reused(empty_tasks: TestTaskService) -> eyre::Result<()> {
    let first = empty_tasks.create_task(request("First", "Physics", 1)).await?;
    let second = empty_tasks.create_task(request("Second", "Physics", 2)).await?;

    empty_tasks.delete_task(second.id()).await?;
    let third = empty_tasks.create_task(request("Third", "Physics", 3)).await?;

    eyre::ensure!(first.id() == TaskId::FIRST, "first id should be 1");
    eyre::ensure!(third.id().value() == 3, "expected id 3, got {}", third.id());
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn returned_tasks_are_snapshots(empty_tasks: TestTaskService) -> eyre::Result<()> {
    let created = empty_tasks
        .create_task(request("Snapshot", "History", 2))
        .await?;

    empty_tasks
        .update_task(created.id(), TaskPatch::new().with_title("Renamed"))
        .await?;

    eyre::ensure!(created.title() == "Snapshot", "earlier snapshot must not change");
    let stored = empty_tasks
        .find_task(created.id())
        .await?
        .ok_or_else(|| eyre::eyre!("task should exist"))?;
    eyre::ensure!(stored.title() == "Renamed", "store should hold the update");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn completion_is_stamped_with_the_clock(clock: Arc<FixedClock>) -> eyre::Result<()> {
    let repository = InMemoryTaskRepository::new(Arc::clone(&clock));
    let service = TaskService::new(Arc::new(repository), Arc::clone(&clock));
    let created = service.create_task(request("Quiz", "Chemistry", 1)).await?;

    clock.advance(TimeDelta::hours(2));
    let completed = service.complete_task(created.id()).await?;

    eyre::ensure!(completed.is_completed(), "task should be completed");
    eyre::ensure!(
        completed.completed_at() == Some(days_from_now(0) + TimeDelta::hours(2)),
        "completion time should come from the clock"
    );

    let reopened = service
        .update_task(created.id(), TaskPatch::new().with_completed(false))
        .await?;
    eyre::ensure!(reopened.completed_at().is_none(), "reopening clears completion time");
    Ok(())
}

#[rstest]
#[case::blank_title(TaskPatch::new().with_title("   "), TaskDomainError::EmptyTitle)]
#[case::blank_subject(TaskPatch::new().with_subject(""), TaskDomainError::EmptySubject)]
#[tokio::test(flavor = "multi_thread")]
async fn invalid_patches_leave_the_task_unchanged(
    empty_tasks: TestTaskService,
    #[case] patch: TaskPatch,
    #[case] expected: TaskDomainError,
) -> eyre::Result<()> {
    let created = empty_tasks.create_task(request("Essay", "History", 4)).await?;

    let result = empty_tasks.update_task(created.id(), patch).await;

    eyre::ensure!(
        matches!(&result, Err(TaskServiceError::Domain(err)) if *err == expected),
        "expected {expected:?}, got {result:?}"
    );
    let stored = empty_tasks.find_task(created.id()).await?;
    eyre::ensure!(stored.as_ref() == Some(&created), "task must be unchanged");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn missing_tasks_report_not_found(empty_tasks: TestTaskService) -> eyre::Result<()> {
    let missing = TaskId::new(42)?;

    let update = empty_tasks
        .update_task(missing, TaskPatch::new().with_priority(Priority::High))
        .await;
    let delete = empty_tasks.delete_task(missing).await;
    let complete = empty_tasks.complete_task(missing).await;

    for (operation, outcome) in [("update", update), ("delete", delete), ("complete", complete)] {
        eyre::ensure!(
            outcome.as_ref().is_err_and(TaskServiceError::is_not_found),
            "{operation} should fail with not found, got {outcome:?}"
        );
    }
    eyre::ensure!(empty_tasks.find_task(missing).await?.is_none(), "lookup yields none");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn mutations_are_published_to_subscribers(empty_tasks: TestTaskService) -> eyre::Result<()> {
    let mut events = empty_tasks.subscribe();

    let created = empty_tasks.create_task(request("Lab", "Physics", 2)).await?;
    empty_tasks.complete_task(created.id()).await?;
    empty_tasks.delete_task(created.id()).await?;

    let mut kinds = Vec::new();
    for _ in 0..3 {
        kinds.push(events.recv().await?.kind());
    }
    eyre::ensure!(
        kinds == vec![ChangeKind::Created, ChangeKind::Completed, ChangeKind::Deleted],
        "unexpected event sequence {kinds:?}"
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn dashboard_queries_follow_the_clock(empty_tasks: TestTaskService) -> eyre::Result<()> {
    let overdue = empty_tasks.create_task(request("Late", "Physics", -2)).await?;
    let today = empty_tasks.create_task(request("Now", "Physics", 0)).await?;
    let soon = empty_tasks.create_task(request("Soon", "History", 3)).await?;
    let finished = empty_tasks.create_task(request("Done", "History", -1)).await?;
    empty_tasks.complete_task(finished.id()).await?;

    let overdue_ids: Vec<TaskId> = empty_tasks
        .overdue_tasks()
        .await?
        .iter()
        .map(|task| task.id())
        .collect();
    let today_ids: Vec<TaskId> = empty_tasks
        .todays_tasks()
        .await?
        .iter()
        .map(|task| task.id())
        .collect();
    let stats = empty_tasks.completion_stats().await?;
    let counts = empty_tasks.status_counts().await?;

    eyre::ensure!(overdue_ids == vec![overdue.id()], "overdue list {overdue_ids:?}");
    eyre::ensure!(today_ids == vec![today.id()], "today list {today_ids:?}");
    eyre::ensure!(stats.overdue_tasks == 1, "overdue stat {}", stats.overdue_tasks);
    eyre::ensure!(stats.today_tasks == 1, "today stat {}", stats.today_tasks);
    eyre::ensure!(stats.completion_rate == 25, "rate {}", stats.completion_rate);
    eyre::ensure!(counts.get(StatusFilter::Active) == 3, "active count");
    eyre::ensure!(counts.get(StatusFilter::Completed) == 1, "completed count");

    let visible = empty_tasks
        .visible_tasks(&TaskFilter::new().with_subjects(["History"]))
        .await?;
    let visible_ids: Vec<TaskId> = visible.iter().map(|task| task.id()).collect();
    eyre::ensure!(
        visible_ids == vec![soon.id(), finished.id()],
        "incomplete tasks sort before completed ones, got {visible_ids:?}"
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn calendar_month_places_tasks_on_their_due_day(
    empty_tasks: TestTaskService,
) -> eyre::Result<()> {
    let created = empty_tasks.create_task(request("Exam", "Mathematics", 0)).await?;
    let due_day = created.due_day(&Local);

    let month = empty_tasks
        .calendar_month(due_day.year(), due_day.month())
        .await?;
    let cell = month
        .day(due_day)
        .ok_or_else(|| eyre::eyre!("due day should appear in the grid"))?;

    eyre::ensure!(
        month.weeks().all(|week| week.len() == 7),
        "grid must cover whole weeks"
    );
    eyre::ensure!(cell.in_month() && cell.is_today(), "due day is today in month");
    eyre::ensure!(cell.tasks().len() == 1, "one task on the due day");
    eyre::ensure!(
        empty_tasks.tasks_on(due_day).await?.len() == 1,
        "tasks_on agrees with the grid"
    );

    let invalid = empty_tasks.calendar_month(2024, 13).await;
    eyre::ensure!(
        matches!(
            invalid,
            Err(TaskServiceError::Domain(TaskDomainError::InvalidMonth { month: 13, .. }))
        ),
        "month 13 must be rejected"
    );
    Ok(())
}
