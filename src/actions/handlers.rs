//! Form handlers for applications, tasks, and sessions.

use super::{ActionOutcome, ActionResult, AuthOutcome, FormData, PageOutcome, Route};
use crate::identity::{
    domain::{Credentials, SessionToken, UserId},
    ports::{IdentityError, IdentityProvider},
};
use crate::presentation::{PageRenderer, RenderError};
use crate::tracker::{
    domain::{ApplicationId, Stage, TaskId, TrackerDomainError},
    ports::{ApplicationRepository, TaskRepository},
    services::{
        ApplicationService, NewApplicationRequest, TaskService, TrackerServiceError,
        TrackerServiceResult,
    },
};
use mockable::Clock;
use std::sync::Arc;
use tracing::debug;

#[derive(Debug, Clone, Copy)]
enum AuthMode {
    SignIn,
    SignUp,
}

/// Form handlers wired to an identity provider and tracker storage.
pub struct TrackerActions<I, R, C>
where
    I: IdentityProvider,
    R: ApplicationRepository + TaskRepository,
    C: Clock + Send + Sync,
{
    identity: Arc<I>,
    applications: ApplicationService<R, C>,
    tasks: TaskService<R, C>,
    renderer: PageRenderer,
}

impl<I, R, C> TrackerActions<I, R, C>
where
    I: IdentityProvider,
    R: ApplicationRepository + TaskRepository,
    C: Clock + Send + Sync,
{
    /// Creates the handlers over shared storage.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError`] when the embedded templates fail to load.
    pub fn new(identity: Arc<I>, repository: Arc<R>, clock: Arc<C>) -> Result<Self, RenderError> {
        Ok(Self {
            identity,
            applications: ApplicationService::new(Arc::clone(&repository), Arc::clone(&clock)),
            tasks: TaskService::new(repository, clock),
            renderer: PageRenderer::new()?,
        })
    }

    /// Returns the application service.
    #[must_use]
    pub const fn applications(&self) -> &ApplicationService<R, C> {
        &self.applications
    }

    /// Returns the task service.
    #[must_use]
    pub const fn tasks(&self) -> &TaskService<R, C> {
        &self.tasks
    }

    async fn current_user(&self, session: Option<&SessionToken>) -> ActionResult<Option<UserId>> {
        let Some(token) = session else {
            return Ok(None);
        };
        Ok(self.identity.current_user(token).await?)
    }

    /// Renders the listing for the signed-in user.
    ///
    /// # Errors
    ///
    /// Returns [`ActionError`](super::ActionError) when storage, identity
    /// resolution, or rendering fails.
    pub async fn applications_page(
        &self,
        session: Option<&SessionToken>,
    ) -> ActionResult<PageOutcome> {
        let Some(owner) = self.current_user(session).await? else {
            return Ok(PageOutcome::Redirect(Route::Login));
        };
        let listing = self.applications.list_for_owner(owner).await?;
        Ok(PageOutcome::Render(
            self.renderer.render_applications(&listing)?,
        ))
    }

    /// Renders the login view, or redirects to the listing when the caller is
    /// already signed in.
    ///
    /// # Errors
    ///
    /// Returns [`ActionError`](super::ActionError) when identity resolution
    /// or rendering fails.
    pub async fn login_page(
        &self,
        session: Option<&SessionToken>,
        error: Option<&str>,
    ) -> ActionResult<PageOutcome> {
        if self.current_user(session).await?.is_some() {
            return Ok(PageOutcome::Redirect(Route::Applications));
        }
        Ok(PageOutcome::Render(self.renderer.render_login(error)?))
    }

    /// Handles the create-application form (`company`, `role`, `location`,
    /// `url`, `salary`, `notes`).
    ///
    /// # Errors
    ///
    /// Returns [`ActionError`](super::ActionError) when storage or identity
    /// resolution fails.
    pub async fn create_application(
        &self,
        session: Option<&SessionToken>,
        form: &FormData,
    ) -> ActionResult<ActionOutcome> {
        let Some(owner) = self.current_user(session).await? else {
            return Ok(ActionOutcome::Redirect(Route::Login));
        };
        let request = NewApplicationRequest::new(form.field("company"), form.field("role"))
            .with_location(form.field("location"))
            .with_url(form.field("url"))
            .with_salary(form.field("salary"))
            .with_notes(form.field("notes"));
        settle(self.applications.create(owner, request).await)
    }

    /// Handles the stage selector (`stage`) of one application.
    ///
    /// A missing stage reads as `SAVED` and unknown stage names are a
    /// validation error. Malformed identifiers are treated like identifiers
    /// of someone else's application.
    ///
    /// # Errors
    ///
    /// Returns [`ActionError`](super::ActionError) when storage or identity
    /// resolution fails.
    pub async fn update_stage(
        &self,
        session: Option<&SessionToken>,
        application_id: &str,
        form: &FormData,
    ) -> ActionResult<ActionOutcome> {
        let Some(owner) = self.current_user(session).await? else {
            return Ok(ActionOutcome::Redirect(Route::Login));
        };
        let Some(id) = ApplicationId::parse(application_id) else {
            debug!(%owner, "ignoring malformed application identifier");
            return Ok(ActionOutcome::Redirect(Route::Applications));
        };
        let submitted = match form.field("stage") {
            "" => Stage::Saved.as_str(),
            value => value,
        };
        let stage = match Stage::try_from(submitted) {
            Ok(stage) => stage,
            Err(err) => {
                return Ok(ActionOutcome::ValidationError(
                    TrackerDomainError::from(err).to_string(),
                ));
            }
        };
        settle(self.applications.update_stage(owner, id, stage).await)
    }

    /// Handles the delete button of one application.
    ///
    /// # Errors
    ///
    /// Returns [`ActionError`](super::ActionError) when storage or identity
    /// resolution fails.
    pub async fn delete_application(
        &self,
        session: Option<&SessionToken>,
        application_id: &str,
    ) -> ActionResult<ActionOutcome> {
        let Some(owner) = self.current_user(session).await? else {
            return Ok(ActionOutcome::Redirect(Route::Login));
        };
        let Some(id) = ApplicationId::parse(application_id) else {
            debug!(%owner, "ignoring malformed application identifier");
            return Ok(ActionOutcome::Redirect(Route::Applications));
        };
        settle(self.applications.delete(owner, id).await)
    }

    /// Handles the add-task form (`title`) of one application.
    ///
    /// Applications the caller does not own redirect to the listing without
    /// persisting anything.
    ///
    /// # Errors
    ///
    /// Returns [`ActionError`](super::ActionError) when storage or identity
    /// resolution fails.
    pub async fn create_task(
        &self,
        session: Option<&SessionToken>,
        application_id: &str,
        form: &FormData,
    ) -> ActionResult<ActionOutcome> {
        let Some(owner) = self.current_user(session).await? else {
            return Ok(ActionOutcome::Redirect(Route::Login));
        };
        let Some(id) = ApplicationId::parse(application_id) else {
            debug!(%owner, "ignoring malformed application identifier");
            return Ok(ActionOutcome::Redirect(Route::Applications));
        };
        settle(self.tasks.create(owner, id, form.field("title")).await)
    }

    /// Handles the completion toggle (`completed`) of one task.
    ///
    /// `true`, `on`, and `1` mark the task completed; any other value,
    /// including a missing field, clears the flag.
    ///
    /// # Errors
    ///
    /// Returns [`ActionError`](super::ActionError) when storage or identity
    /// resolution fails.
    pub async fn toggle_task(
        &self,
        session: Option<&SessionToken>,
        task_id: &str,
        form: &FormData,
    ) -> ActionResult<ActionOutcome> {
        let Some(owner) = self.current_user(session).await? else {
            return Ok(ActionOutcome::Redirect(Route::Login));
        };
        let Some(id) = TaskId::parse(task_id) else {
            debug!(%owner, "ignoring malformed task identifier");
            return Ok(ActionOutcome::Redirect(Route::Applications));
        };
        let completed = form.flag("completed");
        settle(self.tasks.toggle(owner, id, completed).await)
    }

    /// Handles the remove button of one task.
    ///
    /// # Errors
    ///
    /// Returns [`ActionError`](super::ActionError) when storage or identity
    /// resolution fails.
    pub async fn delete_task(
        &self,
        session: Option<&SessionToken>,
        task_id: &str,
    ) -> ActionResult<ActionOutcome> {
        let Some(owner) = self.current_user(session).await? else {
            return Ok(ActionOutcome::Redirect(Route::Login));
        };
        let Some(id) = TaskId::parse(task_id) else {
            debug!(%owner, "ignoring malformed task identifier");
            return Ok(ActionOutcome::Redirect(Route::Applications));
        };
        settle(self.tasks.delete(owner, id).await)
    }

    /// Ends the caller's session, if any, and returns to the login view.
    ///
    /// # Errors
    ///
    /// Returns [`ActionError::Identity`](super::ActionError::Identity) when
    /// the provider fails.
    pub async fn logout(&self, session: Option<&SessionToken>) -> ActionResult<ActionOutcome> {
        if let Some(token) = session {
            self.identity.sign_out(token).await?;
        }
        Ok(ActionOutcome::Redirect(Route::Login))
    }

    /// Handles the sign-in button of the login form (`email`, `password`).
    ///
    /// # Errors
    ///
    /// Returns [`ActionError::Identity`](super::ActionError::Identity) when
    /// the provider fails for reasons other than the credentials.
    pub async fn sign_in(&self, form: &FormData) -> ActionResult<AuthOutcome> {
        self.open_session(form, AuthMode::SignIn).await
    }

    /// Handles the sign-up button of the login form (`email`, `password`).
    ///
    /// # Errors
    ///
    /// Returns [`ActionError::Identity`](super::ActionError::Identity) when
    /// the provider fails for reasons other than the credentials.
    pub async fn sign_up(&self, form: &FormData) -> ActionResult<AuthOutcome> {
        self.open_session(form, AuthMode::SignUp).await
    }

    async fn open_session(&self, form: &FormData, mode: AuthMode) -> ActionResult<AuthOutcome> {
        let (email, password) = (form.field("email"), form.raw("password"));
        let checked = match mode {
            AuthMode::SignIn => Credentials::for_sign_in(email, password),
            AuthMode::SignUp => Credentials::new(email, password),
        };
        let credentials = match checked {
            Ok(credentials) => credentials,
            Err(err) => return Ok(AuthOutcome::Rejected(err.to_string())),
        };
        let result = match mode {
            AuthMode::SignIn => self.identity.sign_in(&credentials).await,
            AuthMode::SignUp => self.identity.sign_up(&credentials).await,
        };
        match result {
            Ok(session) => Ok(AuthOutcome::SignedIn(session)),
            Err(err @ (IdentityError::InvalidCredentials | IdentityError::DuplicateAccount(_))) => {
                Ok(AuthOutcome::Rejected(err.to_string()))
            }
            Err(err) => Err(err.into()),
        }
    }
}

/// Maps a service result onto the outcome shown to the caller.
fn settle<T>(result: TrackerServiceResult<T>) -> ActionResult<ActionOutcome> {
    match result {
        Ok(_) => Ok(ActionOutcome::Redirect(Route::Applications)),
        Err(TrackerServiceError::Domain(err)) => Ok(ActionOutcome::ValidationError(err.to_string())),
        Err(err) => Err(err.into()),
    }
}
