//! When steps for task tracking BDD scenarios.

use super::world::{TaskTrackingWorld, parse_status};
use rstest_bdd_macros::when;
use taskwell::task::domain::TaskId;

#[when(r#"a task "{title}" due in {days:i64} days with status "{status}" is added"#)]
fn add_task(
    world: &mut TaskTrackingWorld,
    title: String,
    days: i64,
    status: String,
) -> Result<(), eyre::Report> {
    world.add_task(&title, days, parse_status(&status)?);
    Ok(())
}

#[when("a task with a blank title is added")]
fn add_blank_task(world: &mut TaskTrackingWorld) {
    world.add_task("   ", 0, taskwell::task::domain::Status::NotStarted);
}

#[when(r#"the task "{title}" is marked "{status}""#)]
fn mark_task(
    world: &mut TaskTrackingWorld,
    title: String,
    status: String,
) -> Result<(), eyre::Report> {
    let task = world.task_titled(&title)?;
    let result = world
        .store
        .set_status(task.id(), parse_status(&status)?)
        .map(|_| ());
    world.last_result = Some(result);
    Ok(())
}

#[when(r#"the task "{title}" is removed"#)]
fn remove_task(world: &mut TaskTrackingWorld, title: String) -> Result<(), eyre::Report> {
    let task = world.task_titled(&title)?;
    let result = world.store.remove([task.id()]).map(|_| ());
    world.last_result = Some(result);
    Ok(())
}

#[when("a task that does not exist is removed")]
fn remove_unknown_task(world: &mut TaskTrackingWorld) {
    let result = world.store.remove([TaskId::new()]).map(|_| ());
    world.last_result = Some(result);
}
