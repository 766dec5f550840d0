//! Template environment and page rendering entry points.

use super::view::{ApplicationsPageView, LoginPageView};
use crate::tracker::domain::ApplicationWithTasks;
use minijinja::Environment;
use thiserror::Error;

const APPLICATIONS_TEMPLATE: &str = "applications.html";
const LOGIN_TEMPLATE: &str = "login.html";

/// Error raised while loading or rendering a template.
#[derive(Debug, Error)]
#[error("template rendering failed: {0}")]
pub struct RenderError(#[from] minijinja::Error);

/// Renders the listing and login pages.
#[derive(Debug, Clone)]
pub struct PageRenderer {
    env: Environment<'static>,
}

impl PageRenderer {
    /// Loads the embedded templates.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError`] when a template fails to parse.
    pub fn new() -> Result<Self, RenderError> {
        let mut env = Environment::new();
        env.add_template(
            APPLICATIONS_TEMPLATE,
            include_str!("templates/applications.html"),
        )?;
        env.add_template(LOGIN_TEMPLATE, include_str!("templates/login.html"))?;
        Ok(Self { env })
    }

    /// Renders the listing view for the caller's applications.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError`] when rendering fails.
    pub fn render_applications(
        &self,
        listing: &[ApplicationWithTasks],
    ) -> Result<String, RenderError> {
        let template = self.env.get_template(APPLICATIONS_TEMPLATE)?;
        Ok(template.render(ApplicationsPageView::from_listing(listing))?)
    }

    /// Renders the login view, optionally with an error message.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError`] when rendering fails.
    pub fn render_login(&self, error: Option<&str>) -> Result<String, RenderError> {
        let template = self.env.get_template(LOGIN_TEMPLATE)?;
        Ok(template.render(LoginPageView::new(error))?)
    }
}
