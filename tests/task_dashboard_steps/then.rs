//! Then steps for task dashboard BDD scenarios.

use super::world::{DashboardWorld, run_async, titles};
use rstest_bdd_macros::then;
use studyflow::task::query::{StatusFilter, TaskFilter};

fn visible_titles(
    world: &DashboardWorld,
    filter: &TaskFilter,
) -> Result<Vec<String>, eyre::Report> {
    let tasks = run_async(world.service.visible_tasks(filter))
        .map_err(|err| eyre::eyre!("filtering failed: {err}"))?;
    Ok(titles(&tasks))
}

#[then("{overdue:u32} task is reported overdue and {today:u32} tasks are due today")]
fn overdue_and_today_counts(
    world: &DashboardWorld,
    overdue: u32,
    today: u32,
) -> Result<(), eyre::Report> {
    let stats = world
        .last_stats
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing statistics in scenario world"))?;

    eyre::ensure!(
        stats.overdue_tasks == usize::try_from(overdue)?,
        "expected {overdue} overdue tasks, found {}",
        stats.overdue_tasks
    );
    eyre::ensure!(
        stats.today_tasks == usize::try_from(today)?,
        "expected {today} tasks due today, found {}",
        stats.today_tasks
    );
    Ok(())
}

#[then(r#"the overdue filter lists only "{title}""#)]
fn overdue_filter_lists_only(world: &DashboardWorld, title: String) -> Result<(), eyre::Report> {
    let listed = visible_titles(world, &TaskFilter::new().with_status(StatusFilter::Overdue))?;
    eyre::ensure!(listed == [title.clone()], "expected only {title}, found {listed:?}");
    Ok(())
}

#[then(r#"the task list is ordered "{first}" before "{second}""#)]
fn task_list_order(
    world: &DashboardWorld,
    first: String,
    second: String,
) -> Result<(), eyre::Report> {
    let listed = visible_titles(world, &TaskFilter::new())?;
    eyre::ensure!(
        listed == [first.clone(), second.clone()],
        "expected {first} before {second}, found {listed:?}"
    );
    Ok(())
}

#[then("the completion rate is {rate:u32} percent")]
fn completion_rate_is(world: &DashboardWorld, rate: u32) -> Result<(), eyre::Report> {
    let stats = world
        .last_stats
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing statistics in scenario world"))?;
    eyre::ensure!(
        stats.completion_rate == rate,
        "expected {rate}%, found {}%",
        stats.completion_rate
    );
    Ok(())
}

#[then(r#"the active filter excludes "{title}""#)]
fn active_filter_excludes(world: &DashboardWorld, title: String) -> Result<(), eyre::Report> {
    let listed = visible_titles(world, &TaskFilter::new().with_status(StatusFilter::Active))?;
    eyre::ensure!(!listed.contains(&title), "{title} should not be active: {listed:?}");
    Ok(())
}

#[then("completion fails with a not found error")]
fn completion_not_found(world: &DashboardWorld) -> Result<(), eyre::Report> {
    let result = world
        .last_complete_result
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing completion result in scenario world"))?;
    eyre::ensure!(
        result.as_ref().is_err_and(|err| err.is_not_found()),
        "expected not found error, got {result:?}"
    );
    Ok(())
}

#[then("the store still holds {count:u32} task")]
fn store_holds(world: &DashboardWorld, count: u32) -> Result<(), eyre::Report> {
    let tasks = run_async(world.service.list_tasks())
        .map_err(|err| eyre::eyre!("listing failed: {err}"))?;
    eyre::ensure!(
        tasks.len() == usize::try_from(count)?,
        "expected {count} tasks, found {}",
        tasks.len()
    );
    Ok(())
}
