//! Given steps for tracker BDD scenarios.

use super::world::{TrackerWorld, run_async};
use eyre::WrapErr;
use jobtrack::identity::domain::UserId;
use jobtrack::tracker::services::NewApplicationRequest;
use rstest_bdd_macros::given;

#[given(r#"a signed-in user "{name}""#)]
fn signed_in_user(world: &mut TrackerWorld, name: String) {
    world.users.insert(name, UserId::new());
}

#[given(r#""{name}" has an application at "{company}" for "{role}""#)]
fn existing_application(
    world: &mut TrackerWorld,
    name: String,
    company: String,
    role: String,
) -> Result<(), eyre::Report> {
    let owner = world.user(&name)?;
    let created = run_async(
        world
            .applications
            .create(owner, NewApplicationRequest::new(company.clone(), role)),
    )
    .wrap_err("create application in scenario setup")?;
    world.applications_by_company.insert(company, created);
    Ok(())
}

#[given(r#""{name}" has added the task "{title}" to the application at "{company}""#)]
fn existing_task(
    world: &mut TrackerWorld,
    name: String,
    title: String,
    company: String,
) -> Result<(), eyre::Report> {
    let owner = world.user(&name)?;
    let application_id = world.application(&company)?.id();
    let created = run_async(world.tasks.create(owner, application_id, title.clone()))
        .wrap_err("create task in scenario setup")?
        .ok_or_else(|| eyre::eyre!("task target should be owned by {name}"))?;
    world.tasks_by_title.insert(title, created);
    Ok(())
}
