//! Given steps for task tracking BDD scenarios.

use super::world::{TaskTrackingWorld, parse_status};
use rstest_bdd_macros::given;

#[given("an empty task store")]
fn empty_task_store(world: &mut TaskTrackingWorld) -> Result<(), eyre::Report> {
    if !world.store.is_empty()? {
        return Err(eyre::eyre!("expected a fresh store"));
    }
    Ok(())
}

#[given(r#"a task "{title}" due in {days:i64} days with status "{status}" is added"#)]
fn task_is_present(
    world: &mut TaskTrackingWorld,
    title: String,
    days: i64,
    status: String,
) -> Result<(), eyre::Report> {
    world.add_task(&title, days, parse_status(&status)?);
    match world.last_result.take() {
        Some(Ok(())) => Ok(()),
        other => Err(eyre::eyre!("scenario setup failed to add {title:?}: {other:?}")),
    }
}
