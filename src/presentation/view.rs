//! Serializable view models handed to the templates.

use super::{badge_class, paths};
use crate::tracker::domain::{ApplicationWithTasks, Stage, Task};
use serde::Serialize;

const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Serialize)]
pub(super) struct PageRoutes {
    logout: &'static str,
    create_application: &'static str,
    sign_in: &'static str,
    sign_up: &'static str,
}

impl PageRoutes {
    const fn new() -> Self {
        Self {
            logout: paths::LOGOUT,
            create_application: paths::APPLICATIONS,
            sign_in: paths::SIGN_IN,
            sign_up: paths::SIGN_UP,
        }
    }
}

#[derive(Debug, Serialize)]
pub(super) struct ApplicationsPageView<'a> {
    routes: PageRoutes,
    stages: Vec<&'static str>,
    applications: Vec<ApplicationView<'a>>,
}

impl<'a> ApplicationsPageView<'a> {
    pub(super) fn from_listing(listing: &'a [ApplicationWithTasks]) -> Self {
        Self {
            routes: PageRoutes::new(),
            stages: Stage::ALL.into_iter().map(Stage::as_str).collect(),
            applications: listing.iter().map(ApplicationView::from_entry).collect(),
        }
    }
}

#[derive(Debug, Serialize)]
struct ApplicationView<'a> {
    id: String,
    company: &'a str,
    role: &'a str,
    location: Option<&'a str>,
    url: Option<&'a str>,
    link: Option<&'a str>,
    salary: Option<&'a str>,
    notes: Option<&'a str>,
    stage: &'static str,
    badge_class: &'static str,
    created_at: String,
    actions: ApplicationActions,
    tasks: Vec<TaskView<'a>>,
}

#[derive(Debug, Serialize)]
struct ApplicationActions {
    update_stage: String,
    delete: String,
    create_task: String,
}

impl<'a> ApplicationView<'a> {
    fn from_entry(entry: &'a ApplicationWithTasks) -> Self {
        let application = &entry.application;
        let details = application.details();
        let id = application.id();
        Self {
            id: id.to_string(),
            company: details.company(),
            role: details.role(),
            location: details.location(),
            url: details.url(),
            link: details.url().filter(|url| is_web_link(url)),
            salary: details.salary(),
            notes: details.notes(),
            stage: application.stage().as_str(),
            badge_class: badge_class(application.stage()),
            created_at: application.created_at().format(DATE_FORMAT).to_string(),
            actions: ApplicationActions {
                update_stage: paths::update_stage(id),
                delete: paths::delete_application(id),
                create_task: paths::create_task(id),
            },
            tasks: entry.tasks.iter().map(TaskView::from_task).collect(),
        }
    }
}

/// Only `http` and `https` URLs become clickable links.
fn is_web_link(url: &str) -> bool {
    ["http://", "https://"].iter().any(|scheme| {
        url.get(..scheme.len())
            .is_some_and(|prefix| prefix.eq_ignore_ascii_case(scheme))
    })
}

#[derive(Debug, Serialize)]
struct TaskView<'a> {
    id: String,
    title: &'a str,
    completed: bool,
    actions: TaskActions,
}

#[derive(Debug, Serialize)]
struct TaskActions {
    toggle: String,
    delete: String,
}

impl<'a> TaskView<'a> {
    fn from_task(task: &'a Task) -> Self {
        let id = task.id();
        Self {
            id: id.to_string(),
            title: task.title().as_str(),
            completed: task.is_completed(),
            actions: TaskActions {
                toggle: paths::toggle_task(id),
                delete: paths::delete_task(id),
            },
        }
    }
}

#[derive(Debug, Serialize)]
pub(super) struct LoginPageView<'a> {
    routes: PageRoutes,
    error: Option<&'a str>,
}

impl<'a> LoginPageView<'a> {
    pub(super) const fn new(error: Option<&'a str>) -> Self {
        Self {
            routes: PageRoutes::new(),
            error,
        }
    }
}
