//! When steps for task lifecycle BDD scenarios.

use super::world::{TaskLifecycleWorld, run_async};
use rstest_bdd_macros::when;
use tasktrack::api::payloads::{RegisterPayload, UpdateTaskPayload};

#[when("the task is completed")]
fn complete_task(world: &mut TaskLifecycleWorld) -> Result<(), eyre::Report> {
    let response = run_async(
        world
            .api
            .complete_task(Some(world.authorization()?), world.task_id()?),
    );
    world.last_response = Some(response);
    Ok(())
}

#[when(r#"the task status is set to "{status}""#)]
fn set_status(world: &mut TaskLifecycleWorld, status: String) -> Result<(), eyre::Report> {
    let response = run_async(world.api.update_task(
        Some(world.authorization()?),
        world.task_id()?,
        UpdateTaskPayload {
            status: Some(status),
            ..UpdateTaskPayload::default()
        },
    ));
    world.last_response = Some(response);
    Ok(())
}

#[when(r#"the task title is changed to "{title}""#)]
fn change_title(world: &mut TaskLifecycleWorld, title: String) -> Result<(), eyre::Report> {
    let response = run_async(world.api.update_task(
        Some(world.authorization()?),
        world.task_id()?,
        UpdateTaskPayload {
            title: Some(title),
            ..UpdateTaskPayload::default()
        },
    ));
    world.last_response = Some(response);
    Ok(())
}

#[when("the task is deleted")]
fn delete_task(world: &mut TaskLifecycleWorld) -> Result<(), eyre::Report> {
    let response = run_async(
        world
            .api
            .delete_task(Some(world.authorization()?), world.task_id()?),
    );
    world.last_response = Some(response);
    Ok(())
}

#[when(r#"another user "{email}" fetches the task"#)]
fn stranger_fetches(world: &mut TaskLifecycleWorld, email: String) -> Result<(), eyre::Report> {
    let stranger = world.sign_up(&email)?;
    let response = run_async(world.api.get_task(Some(&stranger), world.task_id()?));
    world.last_response = Some(response);
    Ok(())
}

#[when(r#"someone registers with email "{email}""#)]
fn register_with_email(world: &mut TaskLifecycleWorld, email: String) {
    let response = run_async(world.api.register(RegisterPayload {
        name: Some("Scenario user".to_owned()),
        email: Some(email),
        password: Some("correct horse battery".to_owned()),
    }));
    world.last_response = Some(response);
}
