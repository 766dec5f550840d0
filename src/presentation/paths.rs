//! URL paths targeted by the rendered forms.

use crate::tracker::domain::{ApplicationId, TaskId};

/// Login view.
pub const LOGIN: &str = "/login";
/// Sign-in form target.
pub const SIGN_IN: &str = "/login/sign-in";
/// Sign-up form target.
pub const SIGN_UP: &str = "/login/sign-up";
/// Logout form target.
pub const LOGOUT: &str = "/logout";
/// Listing view and create-application form target.
pub const APPLICATIONS: &str = "/applications";

/// Stage update form target for an application.
#[must_use]
pub fn update_stage(id: ApplicationId) -> String {
    format!("{APPLICATIONS}/{id}/stage")
}

/// Delete form target for an application.
#[must_use]
pub fn delete_application(id: ApplicationId) -> String {
    format!("{APPLICATIONS}/{id}/delete")
}

/// Add-task form target for an application.
#[must_use]
pub fn create_task(id: ApplicationId) -> String {
    format!("{APPLICATIONS}/{id}/tasks")
}

/// Toggle form target for a task.
#[must_use]
pub fn toggle_task(id: TaskId) -> String {
    format!("/tasks/{id}/toggle")
}

/// Delete form target for a task.
#[must_use]
pub fn delete_task(id: TaskId) -> String {
    format!("/tasks/{id}/delete")
}
