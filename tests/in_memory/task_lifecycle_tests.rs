//! In-memory integration tests for task lifecycle operations.

use super::helpers::Services;
use rstest::{fixture, rstest};
use tasktrack::{
    identity::domain::UserId,
    task::{
        domain::{TaskDomainError, TaskStatus},
        services::{CreateTaskRequest, TaskLifecycleError, UpdateTaskRequest},
    },
};

#[fixture]
fn services() -> Services {
    Services::new()
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn ship_report_moves_through_the_workflow(services: Services) -> eyre::Result<()> {
    let owner = UserId::new();
    let created = services
        .lifecycle
        .create(owner, CreateTaskRequest::new("Ship report"))
        .await?;
    eyre::ensure!(created.status() == TaskStatus::Pending);
    eyre::ensure!(created.owner() == owner);

    let early = services.lifecycle.complete(created.id(), owner).await;
    eyre::ensure!(
        matches!(
            early,
            Err(TaskLifecycleError::Domain(
                TaskDomainError::IllegalTransition { .. }
            ))
        ),
        "expected illegal transition, got {early:?}"
    );

    let started = services
        .lifecycle
        .update(
            created.id(),
            owner,
            UpdateTaskRequest::new().with_status("in_progress"),
        )
        .await?;
    eyre::ensure!(started.status() == TaskStatus::InProgress);

    let completed = services.lifecycle.complete(created.id(), owner).await?;
    eyre::ensure!(completed.status() == TaskStatus::Completed);

    let deleted = services.lifecycle.delete(created.id(), owner).await?;
    eyre::ensure!(deleted.id() == created.id());

    let missing = services.lifecycle.get_by_id(created.id(), owner).await;
    eyre::ensure!(matches!(missing, Err(TaskLifecycleError::NotFound(_))));
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn completed_task_rejects_every_field(services: Services) -> eyre::Result<()> {
    let owner = UserId::new();
    let task = services
        .lifecycle
        .create(owner, CreateTaskRequest::new("Archive logs"))
        .await?;
    services
        .lifecycle
        .update(
            task.id(),
            owner,
            UpdateTaskRequest::new().with_status("in_progress"),
        )
        .await?;
    services.lifecycle.complete(task.id(), owner).await?;

    let attempts = [
        UpdateTaskRequest::new().with_title("Renamed"),
        UpdateTaskRequest::new().with_description("More detail"),
        UpdateTaskRequest::new().with_due_date(chrono::Utc::now()),
        UpdateTaskRequest::new().with_status("completed"),
    ];
    for request in attempts {
        let result = services.lifecycle.update(task.id(), owner, request).await;
        eyre::ensure!(
            matches!(
                result,
                Err(TaskLifecycleError::Domain(TaskDomainError::TaskLocked(_)))
            ),
            "expected TaskLocked, got {result:?}"
        );
    }
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn other_users_cannot_reach_the_task(services: Services) -> eyre::Result<()> {
    let owner = UserId::new();
    let stranger = UserId::new();
    let task = services
        .lifecycle
        .create(owner, CreateTaskRequest::new("Private"))
        .await?;

    let fetched = services.lifecycle.get_by_id(task.id(), stranger).await;
    let updated = services
        .lifecycle
        .update(task.id(), stranger, UpdateTaskRequest::new().with_title("Mine"))
        .await;
    let completed = services.lifecycle.complete(task.id(), stranger).await;
    let deleted = services.lifecycle.delete(task.id(), stranger).await;

    for result in [fetched, updated, completed, deleted] {
        eyre::ensure!(
            matches!(result, Err(TaskLifecycleError::NotFound(id)) if id == task.id()),
            "expected NotFound, got {result:?}"
        );
    }

    let untouched = services.lifecycle.get_by_id(task.id(), owner).await?;
    eyre::ensure!(untouched.title().as_str() == "Private");
    Ok(())
}
