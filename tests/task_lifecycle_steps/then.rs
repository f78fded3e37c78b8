//! Then steps for task lifecycle BDD scenarios.

use super::world::TaskLifecycleWorld;
use rstest_bdd_macros::then;

#[then(r#"the task is now "{status}""#)]
fn task_is_now(world: &TaskLifecycleWorld, status: String) -> Result<(), eyre::Report> {
    let response = world.last_response()?;
    let actual = response
        .body()
        .and_then(|body| body.get("status"))
        .and_then(serde_json::Value::as_str)
        .ok_or_else(|| eyre::eyre!("response carries no task: {response:?}"))?;

    if actual != status {
        return Err(eyre::eyre!("expected status {status}, found {actual}"));
    }
    Ok(())
}

#[then(r#"the request fails with "{code}""#)]
fn request_fails_with(world: &TaskLifecycleWorld, code: String) -> Result<(), eyre::Report> {
    let response = world.last_response()?;
    let actual = response
        .body()
        .and_then(|body| body.get("error"))
        .and_then(serde_json::Value::as_str)
        .ok_or_else(|| eyre::eyre!("response is not an error: {response:?}"))?;

    if actual != code {
        return Err(eyre::eyre!("expected error {code}, found {actual}"));
    }
    if response.status() != 400 {
        return Err(eyre::eyre!(
            "expected status 400, found {}",
            response.status()
        ));
    }
    Ok(())
}

#[then("the response status is {status:u16}")]
fn response_status_is(world: &TaskLifecycleWorld, status: u16) -> Result<(), eyre::Report> {
    let actual = world.last_response()?.status();
    if actual != status {
        return Err(eyre::eyre!("expected status {status}, found {actual}"));
    }
    Ok(())
}
