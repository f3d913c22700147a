//! When steps for task dashboard BDD scenarios.

use super::world::{DashboardWorld, run_async};
use eyre::WrapErr;
use rstest_bdd_macros::when;
use studyflow::task::domain::TaskId;

#[when("the dashboard statistics are computed")]
fn compute_statistics(world: &mut DashboardWorld) -> Result<(), eyre::Report> {
    let stats = run_async(world.service.completion_stats()).wrap_err("compute statistics")?;
    world.last_stats = Some(stats);
    Ok(())
}

#[when(r#"task "{title}" is marked complete"#)]
fn complete_named_task(world: &mut DashboardWorld, title: String) -> Result<(), eyre::Report> {
    let id = world.task_id(&title)?;
    let result = run_async(world.service.complete_task(id));
    world.last_complete_result = Some(result);
    Ok(())
}

#[when("an unknown task is marked complete")]
fn complete_unknown_task(world: &mut DashboardWorld) -> Result<(), eyre::Report> {
    let unknown = TaskId::new(999).wrap_err("construct unknown task id")?;
    let result = run_async(world.service.complete_task(unknown));
    world.last_complete_result = Some(result);
    Ok(())
}
