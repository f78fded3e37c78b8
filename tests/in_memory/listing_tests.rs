//! In-memory integration tests for task listing filters.

use super::helpers::Services;
use rstest::{fixture, rstest};
use tasktrack::{
    identity::domain::UserId,
    task::{
        domain::Task,
        services::{CreateTaskRequest, ListTasksRequest, TaskQueryError, UpdateTaskRequest},
    },
};

struct Seeded {
    services: Services,
    owner: UserId,
}

#[fixture]
async fn seeded() -> Seeded {
    let services = Services::new();
    let owner = UserId::new();
    let requests = [
        CreateTaskRequest::new("Write quarterly REPORT"),
        CreateTaskRequest::new("Buy milk").with_description("and a report binder"),
        CreateTaskRequest::new("Plan offsite"),
    ];
    for request in requests {
        if let Err(err) = services.lifecycle.create(owner, request).await {
            panic!("seeding failed: {err}");
        }
    }
    Seeded { services, owner }
}

fn titles(tasks: &[Task]) -> Vec<&str> {
    tasks.iter().map(|task| task.title().as_str()).collect()
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn unfiltered_listing_is_newest_first(#[future] seeded: Seeded) -> eyre::Result<()> {
    let Seeded { services, owner } = seeded.await;
    let tasks = services
        .queries
        .list_for_user(owner, ListTasksRequest::new())
        .await?;

    eyre::ensure!(tasks.len() == 3);
    let created: Vec<_> = tasks.iter().map(Task::created_at).collect();
    eyre::ensure!(
        created.windows(2).all(|pair| matches!(pair, [newer, older] if newer >= older)),
        "tasks are not ordered newest first: {created:?}"
    );
    Ok(())
}

#[rstest]
#[case::lowercase("report")]
#[case::uppercase("REPORT")]
#[case::mixed("RePoRt")]
#[tokio::test(flavor = "multi_thread")]
async fn keyword_search_ignores_case_across_fields(
    #[future] seeded: Seeded,
    #[case] keyword: &str,
) -> eyre::Result<()> {
    let Seeded { services, owner } = seeded.await;
    let tasks = services
        .queries
        .list_for_user(owner, ListTasksRequest::new().with_search(keyword))
        .await?;

    let mut found = titles(&tasks);
    found.sort_unstable();
    eyre::ensure!(
        found == ["Buy milk", "Write quarterly REPORT"],
        "unexpected matches: {found:?}"
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn status_filter_selects_matching_tasks(#[future] seeded: Seeded) -> eyre::Result<()> {
    let Seeded { services, owner } = seeded.await;
    let all = services
        .queries
        .list_for_user(owner, ListTasksRequest::new())
        .await?;
    let target = all
        .iter()
        .find(|task| task.title().as_str() == "Plan offsite")
        .ok_or_else(|| eyre::eyre!("seeded task missing"))?;
    services
        .lifecycle
        .update(
            target.id(),
            owner,
            UpdateTaskRequest::new().with_status("in_progress"),
        )
        .await?;

    let in_progress = services
        .queries
        .list_for_user(owner, ListTasksRequest::new().with_status("in_progress"))
        .await?;
    let pending = services
        .queries
        .list_for_user(owner, ListTasksRequest::new().with_status("pending"))
        .await?;

    eyre::ensure!(titles(&in_progress) == ["Plan offsite"]);
    eyre::ensure!(pending.len() == 2);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn status_wins_over_keyword(#[future] seeded: Seeded) -> eyre::Result<()> {
    let Seeded { services, owner } = seeded.await;
    let tasks = services
        .queries
        .list_for_user(
            owner,
            ListTasksRequest::new()
                .with_status("pending")
                .with_search("milk"),
        )
        .await?;

    eyre::ensure!(tasks.len() == 3);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn unknown_status_is_rejected(#[future] seeded: Seeded) -> eyre::Result<()> {
    let Seeded { services, owner } = seeded.await;
    let result = services
        .queries
        .list_for_user(owner, ListTasksRequest::new().with_status("archived"))
        .await;

    eyre::ensure!(matches!(result, Err(TaskQueryError::InvalidStatus(_))));
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn listings_are_scoped_to_the_caller(#[future] seeded: Seeded) -> eyre::Result<()> {
    let Seeded { services, .. } = seeded.await;
    let tasks = services
        .queries
        .list_for_user(UserId::new(), ListTasksRequest::new())
        .await?;

    eyre::ensure!(tasks.is_empty());
    Ok(())
}
