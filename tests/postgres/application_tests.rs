//! `PostgreSQL` integration tests for owner-scoped applications.

use jobtrack::identity::domain::UserId;
use jobtrack::tracker::{
    domain::{Application, ApplicationDetails, Stage},
    ports::{ApplicationRepository, TrackerRepositoryError},
    services::NewApplicationRequest,
};
use mockable::DefaultClock;
use rstest::rstest;

use super::helpers::{BoxError, PgContext, context};

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn postgres_create_and_find_round_trip(
    #[future] context: Result<Option<PgContext>, BoxError>,
) -> Result<(), BoxError> {
    let Some(ctx) = context.await? else {
        return Ok(());
    };
    let owner = UserId::new();
    let request = NewApplicationRequest::new("Acme", "SWE")
        .with_location("Remote")
        .with_notes("   ");

    let created = ctx.applications.create(owner, request).await?;
    let found = ctx.applications.find(owner, created.id()).await?;

    assert_eq!(found, Some(created));
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn postgres_listing_is_owner_scoped_and_newest_first(
    #[future] context: Result<Option<PgContext>, BoxError>,
) -> Result<(), BoxError> {
    let Some(ctx) = context.await? else {
        return Ok(());
    };
    let owner = UserId::new();
    let rival = UserId::new();
    let older = ctx
        .applications
        .create(owner, NewApplicationRequest::new("Acme", "SWE"))
        .await?;
    ctx.applications
        .create(rival, NewApplicationRequest::new("Globex", "SRE"))
        .await?;
    let newer = ctx
        .applications
        .create(owner, NewApplicationRequest::new("Initech", "QA"))
        .await?;

    let listing = ctx.applications.list_for_owner(owner).await?;
    let ids: Vec<_> = listing.iter().map(|entry| entry.application.id()).collect();

    assert_eq!(ids, vec![newer.id(), older.id()]);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn postgres_rival_stage_update_affects_no_rows(
    #[future] context: Result<Option<PgContext>, BoxError>,
) -> Result<(), BoxError> {
    let Some(ctx) = context.await? else {
        return Ok(());
    };
    let owner = UserId::new();
    let created = ctx
        .applications
        .create(owner, NewApplicationRequest::new("Acme", "SWE"))
        .await?;

    let hijack = ctx
        .applications
        .update_stage(UserId::new(), created.id(), Stage::Rejected)
        .await?;
    let own = ctx
        .applications
        .update_stage(owner, created.id(), Stage::Interview)
        .await?;
    let stage = ctx
        .applications
        .find(owner, created.id())
        .await?
        .map(|application| application.stage());

    assert_eq!(hijack, 0);
    assert_eq!(own, 1);
    assert_eq!(stage, Some(Stage::Interview));
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn postgres_duplicate_identifier_is_rejected(
    #[future] context: Result<Option<PgContext>, BoxError>,
) -> Result<(), BoxError> {
    let Some(ctx) = context.await? else {
        return Ok(());
    };
    let details = ApplicationDetails::new("Acme", "SWE")?;
    let application = Application::new(UserId::new(), details, &DefaultClock);
    ctx.repository.store_application(&application).await?;

    let result = ctx.repository.store_application(&application).await;

    assert!(matches!(
        result,
        Err(TrackerRepositoryError::DuplicateApplication(id)) if id == application.id()
    ));
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn postgres_migrations_are_idempotent(
    #[future] context: Result<Option<PgContext>, BoxError>,
) -> Result<(), BoxError> {
    let Some(ctx) = context.await? else {
        return Ok(());
    };

    ctx.repository.run_migrations().await?;
    Ok(())
}
