//! Given steps for task lifecycle BDD scenarios.

use super::world::{TaskLifecycleWorld, run_async};
use rstest_bdd_macros::given;
use tasktrack::api::payloads::{CreateTaskPayload, UpdateTaskPayload};

#[given(r#"a signed-in user "{email}""#)]
fn signed_in_user(world: &mut TaskLifecycleWorld, email: String) -> Result<(), eyre::Report> {
    world.authorization = Some(world.sign_up(&email)?);
    Ok(())
}

#[given(r#"a task titled "{title}""#)]
fn task_titled(world: &mut TaskLifecycleWorld, title: String) -> Result<(), eyre::Report> {
    let response = run_async(world.api.create_task(
        Some(world.authorization()?),
        CreateTaskPayload {
            title: Some(title),
            ..CreateTaskPayload::default()
        },
    ));
    let id = response
        .body()
        .and_then(|body| body.get("id"))
        .and_then(serde_json::Value::as_str)
        .ok_or_else(|| eyre::eyre!("task creation failed: {response:?}"))?
        .to_owned();
    world.task_id = Some(id);
    Ok(())
}

#[given(r#"the task has been moved to "{status}""#)]
fn task_moved_to(world: &mut TaskLifecycleWorld, status: String) -> Result<(), eyre::Report> {
    let response = if status == "completed" {
        run_async(
            world
                .api
                .complete_task(Some(world.authorization()?), world.task_id()?),
        )
    } else {
        run_async(world.api.update_task(
            Some(world.authorization()?),
            world.task_id()?,
            UpdateTaskPayload {
                status: Some(status),
                ..UpdateTaskPayload::default()
            },
        ))
    };
    eyre::ensure!(
        response.status() == 200,
        "scenario setup transition failed: {response:?}"
    );
    Ok(())
}
