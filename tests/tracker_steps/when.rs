//! When steps for tracker BDD scenarios.

use super::world::{TrackerWorld, run_async};
use eyre::WrapErr;
use jobtrack::tracker::{domain::Stage, services::NewApplicationRequest};
use rstest_bdd_macros::when;

#[when(r#""{name}" creates an application at "{company}" for "{role}""#)]
fn create_application(
    world: &mut TrackerWorld,
    name: String,
    company: String,
    role: String,
) -> Result<(), eyre::Report> {
    let owner = world.user(&name)?;
    let result = run_async(
        world
            .applications
            .create(owner, NewApplicationRequest::new(company.clone(), role)),
    );
    match result {
        Ok(created) => {
            world.applications_by_company.insert(company, created);
        }
        Err(err) => world.last_create_error = Some(err),
    }
    Ok(())
}

#[when(r#""{name}" moves the application at "{company}" to "{stage}""#)]
fn move_application(
    world: &mut TrackerWorld,
    name: String,
    company: String,
    stage: String,
) -> Result<(), eyre::Report> {
    let caller = world.user(&name)?;
    let application_id = world.application(&company)?.id();
    let stage = Stage::try_from(stage.as_str())
        .map_err(|err| eyre::eyre!("invalid stage in scenario: {err}"))?;
    let affected = run_async(world.applications.update_stage(caller, application_id, stage))
        .wrap_err("update stage")?;
    world.last_affected = Some(affected);
    Ok(())
}

#[when(r#""{name}" deletes the application at "{company}""#)]
fn delete_application(
    world: &mut TrackerWorld,
    name: String,
    company: String,
) -> Result<(), eyre::Report> {
    let caller = world.user(&name)?;
    let application_id = world.application(&company)?.id();
    let affected = run_async(world.applications.delete(caller, application_id))
        .wrap_err("delete application")?;
    world.last_affected = Some(affected);
    Ok(())
}

#[when(r#""{name}" adds the task "{title}" to the application at "{company}""#)]
fn add_task(
    world: &mut TrackerWorld,
    name: String,
    title: String,
    company: String,
) -> Result<(), eyre::Report> {
    let caller = world.user(&name)?;
    let application_id = world.application(&company)?.id();
    let created = run_async(world.tasks.create(caller, application_id, title.clone()))
        .wrap_err("create task")?;
    world.last_task_created = Some(created.is_some());
    if let Some(task) = created {
        world.tasks_by_title.insert(title, task);
    }
    Ok(())
}

#[when(r#""{name}" marks the task "{title}" as completed"#)]
fn complete_task(
    world: &mut TrackerWorld,
    name: String,
    title: String,
) -> Result<(), eyre::Report> {
    let caller = world.user(&name)?;
    let task_id = world.task(&title)?.id();
    let affected =
        run_async(world.tasks.toggle(caller, task_id, true)).wrap_err("toggle task")?;
    world.last_affected = Some(affected);
    Ok(())
}
