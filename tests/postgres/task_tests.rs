//! `PostgreSQL` integration tests for task ownership and cascade.

use jobtrack::identity::domain::UserId;
use jobtrack::tracker::{
    domain::{ApplicationId, Task, TaskTitle},
    ports::{TaskRepository, TrackerRepositoryError},
    services::NewApplicationRequest,
};
use mockable::DefaultClock;
use rstest::rstest;

use super::helpers::{BoxError, PgContext, context, task_rows_for};

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn postgres_delete_cascades_to_tasks(
    #[future] context: Result<Option<PgContext>, BoxError>,
) -> Result<(), BoxError> {
    let Some(ctx) = context.await? else {
        return Ok(());
    };
    let owner = UserId::new();
    let application = ctx
        .applications
        .create(owner, NewApplicationRequest::new("Acme", "SWE"))
        .await?;
    let task = ctx
        .tasks
        .create(owner, application.id(), "follow up")
        .await?
        .ok_or("task should be created")?;

    assert_eq!(task_rows_for(&ctx.pool, application.id()).await?, 1);

    let deleted = ctx.applications.delete(owner, application.id()).await?;
    let found = ctx.tasks.find(owner, task.id()).await?;

    assert_eq!(deleted, 1);
    assert!(found.is_none());
    assert_eq!(task_rows_for(&ctx.pool, application.id()).await?, 0);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn postgres_toggle_is_idempotent_and_owner_scoped(
    #[future] context: Result<Option<PgContext>, BoxError>,
) -> Result<(), BoxError> {
    let Some(ctx) = context.await? else {
        return Ok(());
    };
    let owner = UserId::new();
    let application = ctx
        .applications
        .create(owner, NewApplicationRequest::new("Acme", "SWE"))
        .await?;
    let task = ctx
        .tasks
        .create(owner, application.id(), "follow up")
        .await?
        .ok_or("task should be created")?;

    let rival = ctx.tasks.toggle(UserId::new(), task.id(), true).await?;
    let first = ctx.tasks.toggle(owner, task.id(), true).await?;
    let second = ctx.tasks.toggle(owner, task.id(), true).await?;
    let stored = ctx.tasks.find(owner, task.id()).await?;

    assert_eq!(rival, 0);
    assert_eq!((first, second), (1, 1));
    assert!(stored.is_some_and(|current| current.is_completed()));
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn postgres_tasks_of_other_owners_are_invisible(
    #[future] context: Result<Option<PgContext>, BoxError>,
) -> Result<(), BoxError> {
    let Some(ctx) = context.await? else {
        return Ok(());
    };
    let owner = UserId::new();
    let rival = UserId::new();
    let application = ctx
        .applications
        .create(owner, NewApplicationRequest::new("Acme", "SWE"))
        .await?;
    let task = ctx
        .tasks
        .create(owner, application.id(), "follow up")
        .await?
        .ok_or("task should be created")?;

    let planted = ctx.tasks.create(rival, application.id(), "plant").await?;
    let seen = ctx.tasks.find(rival, task.id()).await?;
    let removed = ctx.tasks.delete(rival, task.id()).await?;
    let listed = ctx.repository.list_tasks(rival).await?;

    assert!(planted.is_none());
    assert!(seen.is_none());
    assert_eq!(removed, 0);
    assert!(listed.is_empty());
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn postgres_task_for_missing_application_is_refused(
    #[future] context: Result<Option<PgContext>, BoxError>,
) -> Result<(), BoxError> {
    let Some(ctx) = context.await? else {
        return Ok(());
    };
    let missing = ApplicationId::new();
    let task = Task::new(missing, TaskTitle::new("orphan")?, &DefaultClock);

    let result = ctx.repository.store_task(&task).await;

    assert!(matches!(
        result,
        Err(TrackerRepositoryError::ApplicationNotFound(id)) if id == missing
    ));
    Ok(())
}
