//! End-to-end form flows over the in-memory identity provider and store.

use eyre::{Result, bail, ensure};
use jobtrack::actions::{ActionOutcome, AuthOutcome, FormData, PageOutcome, Route, TrackerActions};
use jobtrack::identity::{adapters::memory::InMemoryIdentityProvider, ports::Session};
use jobtrack::tracker::adapters::memory::InMemoryTrackerStore;
use rstest::{fixture, rstest};
use std::sync::Arc;

use super::helpers::SteppingClock;

type Actions = TrackerActions<InMemoryIdentityProvider, InMemoryTrackerStore, SteppingClock>;

#[fixture]
fn actions() -> Actions {
    TrackerActions::new(
        Arc::new(InMemoryIdentityProvider::new()),
        Arc::new(InMemoryTrackerStore::new()),
        Arc::new(SteppingClock::new()),
    )
    .expect("embedded templates should parse")
}

fn login_form(email: &str, password: &str) -> FormData {
    FormData::new()
        .with_field("email", email)
        .with_field("password", password)
}

async fn sign_up(actions: &Actions, email: &str) -> Result<Session> {
    match actions.sign_up(&login_form(email, "correct horse")).await? {
        AuthOutcome::SignedIn(session) => Ok(session),
        AuthOutcome::Rejected(reason) => bail!("sign-up rejected: {reason}"),
    }
}

async fn render_listing(actions: &Actions, session: &Session) -> Result<String> {
    match actions.applications_page(Some(&session.token)).await? {
        PageOutcome::Render(html) => Ok(html),
        PageOutcome::Redirect(route) => bail!("expected listing, redirected to {route:?}"),
    }
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn signed_up_user_creates_and_sees_an_application(actions: Actions) -> Result<()> {
    let session = sign_up(&actions, "ada@example.com").await?;
    let form = FormData::new()
        .with_field("company", "Acme")
        .with_field("role", "Platform Engineer");

    let outcome = actions
        .create_application(Some(&session.token), &form)
        .await?;
    let html = render_listing(&actions, &session).await?;

    ensure!(outcome == ActionOutcome::Redirect(Route::Applications), "got {outcome:?}");
    ensure!(html.contains("Platform Engineer"), "listing shows the new record");
    ensure!(html.contains("<option value=\"SAVED\" selected>"), "stage selector shows SAVED");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn listings_are_private_between_users(actions: Actions) -> Result<()> {
    let ada = sign_up(&actions, "ada@example.com").await?;
    let grace = sign_up(&actions, "grace@example.com").await?;
    let form = FormData::new()
        .with_field("company", "Acme")
        .with_field("role", "SWE");
    actions.create_application(Some(&ada.token), &form).await?;

    let html = render_listing(&actions, &grace).await?;

    ensure!(!html.contains("Acme"), "grace should not see ada's record");
    ensure!(html.contains("No applications yet."), "grace sees an empty listing");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn rival_cannot_restage_by_guessing_the_identifier(actions: Actions) -> Result<()> {
    let ada = sign_up(&actions, "ada@example.com").await?;
    let grace = sign_up(&actions, "grace@example.com").await?;
    let form = FormData::new()
        .with_field("company", "Acme")
        .with_field("role", "SWE");
    actions.create_application(Some(&ada.token), &form).await?;
    let id = actions
        .applications()
        .list_for_owner(ada.user_id)
        .await?
        .first()
        .map(|entry| entry.application.id().to_string())
        .ok_or_else(|| eyre::eyre!("application should exist"))?;

    let outcome = actions
        .update_stage(
            Some(&grace.token),
            &id,
            &FormData::new().with_field("stage", "OFFER"),
        )
        .await?;
    let html = render_listing(&actions, &ada).await?;

    ensure!(outcome == ActionOutcome::Redirect(Route::Applications), "got {outcome:?}");
    ensure!(html.contains("<option value=\"SAVED\" selected>"), "stage unchanged");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn duplicate_sign_up_and_wrong_password_are_rejected(actions: Actions) -> Result<()> {
    sign_up(&actions, "ada@example.com").await?;

    let duplicate = actions
        .sign_up(&login_form("ada@example.com", "another one"))
        .await?;
    let wrong = actions
        .sign_in(&login_form("ada@example.com", "not the password"))
        .await?;
    let right = actions
        .sign_in(&login_form("ada@example.com", "correct horse"))
        .await?;

    ensure!(matches!(duplicate, AuthOutcome::Rejected(_)), "got {duplicate:?}");
    ensure!(matches!(wrong, AuthOutcome::Rejected(_)), "got {wrong:?}");
    ensure!(matches!(right, AuthOutcome::SignedIn(_)), "got {right:?}");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn logout_ends_access_to_the_listing(actions: Actions) -> Result<()> {
    let session = sign_up(&actions, "ada@example.com").await?;

    let outcome = actions.logout(Some(&session.token)).await?;
    let page = actions.applications_page(Some(&session.token)).await?;

    ensure!(outcome == ActionOutcome::Redirect(Route::Login), "got {outcome:?}");
    ensure!(page == PageOutcome::Redirect(Route::Login), "got {page:?}");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn task_forms_toggle_and_remove(actions: Actions) -> Result<()> {
    let session = sign_up(&actions, "ada@example.com").await?;
    let form = FormData::new()
        .with_field("company", "Acme")
        .with_field("role", "SWE");
    actions.create_application(Some(&session.token), &form).await?;
    let application_id = actions
        .applications()
        .list_for_owner(session.user_id)
        .await?
        .first()
        .map(|entry| entry.application.id().to_string())
        .ok_or_else(|| eyre::eyre!("application should exist"))?;

    let blank = actions
        .create_task(
            Some(&session.token),
            &application_id,
            &FormData::new().with_field("title", "  "),
        )
        .await?;
    actions
        .create_task(
            Some(&session.token),
            &application_id,
            &FormData::new().with_field("title", "send thank-you note"),
        )
        .await?;
    let task_id = actions
        .applications()
        .list_for_owner(session.user_id)
        .await?
        .first()
        .and_then(|entry| entry.tasks.first())
        .map(|task| task.id().to_string())
        .ok_or_else(|| eyre::eyre!("task should exist"))?;

    actions
        .toggle_task(
            Some(&session.token),
            &task_id,
            &FormData::new().with_field("completed", "true"),
        )
        .await?;
    let checked = render_listing(&actions, &session).await?;
    actions
        .toggle_task(
            Some(&session.token),
            &task_id,
            &FormData::new().with_field("completed", "false"),
        )
        .await?;
    let unchecked = render_listing(&actions, &session).await?;
    actions.delete_task(Some(&session.token), &task_id).await?;
    let removed = render_listing(&actions, &session).await?;

    ensure!(
        matches!(blank, ActionOutcome::ValidationError(_)),
        "blank title should be refused, got {blank:?}"
    );
    ensure!(checked.contains("line-through"), "completed task is struck through");
    ensure!(!unchecked.contains("line-through"), "reopened task is not struck through");
    ensure!(!removed.contains("send thank-you note"), "task removed");
    ensure!(removed.contains("No tasks yet."), "task placeholder shown");
    Ok(())
}
