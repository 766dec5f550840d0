//! Service layer for creating, listing, restaging, and deleting applications.

use crate::identity::domain::UserId;
use crate::tracker::{
    domain::{
        Application, ApplicationDetails, ApplicationId, ApplicationWithTasks, Stage, Task,
        TrackerDomainError,
    },
    ports::{ApplicationRepository, TaskRepository},
};
use mockable::Clock;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, warn};

use super::TrackerServiceResult;

/// Request payload for creating an application.
///
/// Values are taken as submitted; trimming and blank handling happen in the
/// domain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewApplicationRequest {
    company: String,
    role: String,
    location: Option<String>,
    url: Option<String>,
    salary: Option<String>,
    notes: Option<String>,
}

impl NewApplicationRequest {
    /// Creates a request with the required company and role.
    #[must_use]
    pub fn new(company: impl Into<String>, role: impl Into<String>) -> Self {
        Self {
            company: company.into(),
            role: role.into(),
            location: None,
            url: None,
            salary: None,
            notes: None,
        }
    }

    /// Sets the location.
    #[must_use]
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    /// Sets the posting URL.
    #[must_use]
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    /// Sets the salary note.
    #[must_use]
    pub fn with_salary(mut self, salary: impl Into<String>) -> Self {
        self.salary = Some(salary.into());
        self
    }

    /// Sets free-form notes.
    #[must_use]
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    fn into_details(self) -> Result<ApplicationDetails, TrackerDomainError> {
        let mut details = ApplicationDetails::new(self.company, self.role)?;
        if let Some(location) = self.location {
            details = details.with_location(location);
        }
        if let Some(url) = self.url {
            details = details.with_url(url);
        }
        if let Some(salary) = self.salary {
            details = details.with_salary(salary);
        }
        if let Some(notes) = self.notes {
            details = details.with_notes(notes);
        }
        Ok(details)
    }
}

/// Owner-scoped application orchestration service.
#[derive(Clone)]
pub struct ApplicationService<R, C>
where
    R: ApplicationRepository + TaskRepository,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    clock: Arc<C>,
}

impl<R, C> ApplicationService<R, C>
where
    R: ApplicationRepository + TaskRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new application service.
    #[must_use]
    pub const fn new(repository: Arc<R>, clock: Arc<C>) -> Self {
        Self { repository, clock }
    }

    /// Creates an application owned by `owner` in the `SAVED` stage.
    ///
    /// # Errors
    ///
    /// Returns [`TrackerServiceError::Domain`](super::TrackerServiceError::Domain)
    /// when company or role is blank, in which case nothing is persisted, or
    /// [`TrackerServiceError::Repository`](super::TrackerServiceError::Repository)
    /// when storage fails.
    pub async fn create(
        &self,
        owner: UserId,
        request: NewApplicationRequest,
    ) -> TrackerServiceResult<Application> {
        let details = request.into_details()?;
        let application = Application::new(owner, details, &*self.clock);
        self.repository
            .store_application(&application)
            .await
            .inspect_err(|err| warn!(error = %err, %owner, "failed to store application"))?;
        debug!(%owner, application_id = %application.id(), "created application");
        Ok(application)
    }

    /// Lists the caller's applications, newest first, each with its tasks
    /// newest first.
    ///
    /// # Errors
    ///
    /// Returns [`TrackerServiceError::Repository`](super::TrackerServiceError::Repository)
    /// when storage fails.
    pub async fn list_for_owner(
        &self,
        owner: UserId,
    ) -> TrackerServiceResult<Vec<ApplicationWithTasks>> {
        let applications = self.repository.list_applications(owner).await?;
        let mut tasks_by_application: HashMap<ApplicationId, Vec<Task>> = HashMap::new();
        for task in self.repository.list_tasks(owner).await? {
            tasks_by_application
                .entry(task.application_id())
                .or_default()
                .push(task);
        }

        Ok(applications
            .into_iter()
            .map(|application| {
                let tasks = tasks_by_application
                    .remove(&application.id())
                    .unwrap_or_default();
                ApplicationWithTasks { application, tasks }
            })
            .collect())
    }

    /// Looks up one of the caller's applications.
    ///
    /// # Errors
    ///
    /// Returns [`TrackerServiceError::Repository`](super::TrackerServiceError::Repository)
    /// when storage fails.
    pub async fn find(
        &self,
        owner: UserId,
        id: ApplicationId,
    ) -> TrackerServiceResult<Option<Application>> {
        Ok(self.repository.find_application(owner, id).await?)
    }

    /// Reassigns the stage of one of the caller's applications.
    ///
    /// Any stage may follow any other. Returns the number of rows affected;
    /// `0` means the application does not exist or is not the caller's.
    ///
    /// # Errors
    ///
    /// Returns [`TrackerServiceError::Repository`](super::TrackerServiceError::Repository)
    /// when storage fails.
    pub async fn update_stage(
        &self,
        owner: UserId,
        id: ApplicationId,
        stage: Stage,
    ) -> TrackerServiceResult<usize> {
        let affected = self
            .repository
            .update_stage(owner, id, stage)
            .await
            .inspect_err(|err| {
                warn!(error = %err, %owner, application_id = %id, "stage update failed");
            })?;
        debug!(%owner, application_id = %id, %stage, affected, "stage update");
        Ok(affected)
    }

    /// Deletes one of the caller's applications and all of its tasks.
    ///
    /// Returns the number of application rows deleted.
    ///
    /// # Errors
    ///
    /// Returns [`TrackerServiceError::Repository`](super::TrackerServiceError::Repository)
    /// when storage fails.
    pub async fn delete(&self, owner: UserId, id: ApplicationId) -> TrackerServiceResult<usize> {
        let affected = self.repository.delete_application(owner, id).await?;
        debug!(%owner, application_id = %id, affected, "application delete");
        Ok(affected)
    }
}
