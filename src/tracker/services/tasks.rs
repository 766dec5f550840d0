//! Service layer for follow-up tasks.
//!
//! Ownership of the parent application is checked by the repository on
//! every call; nothing is cached between calls.

use crate::identity::domain::UserId;
use crate::tracker::{
    domain::{ApplicationId, Task, TaskId, TaskTitle},
    ports::{ApplicationRepository, TaskRepository, TrackerRepositoryError},
};
use mockable::Clock;
use std::sync::Arc;
use tracing::debug;

use super::TrackerServiceResult;

/// Owner-scoped task orchestration service.
#[derive(Clone)]
pub struct TaskService<R, C>
where
    R: ApplicationRepository + TaskRepository,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    clock: Arc<C>,
}

impl<R, C> TaskService<R, C>
where
    R: ApplicationRepository + TaskRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new task service.
    #[must_use]
    pub const fn new(repository: Arc<R>, clock: Arc<C>) -> Self {
        Self { repository, clock }
    }

    /// Adds a task to one of the caller's applications.
    ///
    /// Returns `Ok(None)` without persisting anything when the application
    /// does not exist or belongs to another user. Ownership is checked before
    /// the title is validated.
    ///
    /// # Errors
    ///
    /// Returns [`TrackerServiceError::Domain`](super::TrackerServiceError::Domain)
    /// when the title is blank, or
    /// [`TrackerServiceError::Repository`](super::TrackerServiceError::Repository)
    /// when storage fails.
    pub async fn create(
        &self,
        owner: UserId,
        application_id: ApplicationId,
        title: impl Into<String>,
    ) -> TrackerServiceResult<Option<Task>> {
        let Some(application) = self
            .repository
            .find_application(owner, application_id)
            .await?
        else {
            debug!(%owner, %application_id, "task target not owned by caller");
            return Ok(None);
        };

        let title = TaskTitle::new(title)?;
        let task = Task::new(application.id(), title, &*self.clock);
        match self.repository.store_task(&task).await {
            Ok(()) => {
                debug!(%owner, %application_id, task_id = %task.id(), "created task");
                Ok(Some(task))
            }
            Err(TrackerRepositoryError::ApplicationNotFound(_)) => {
                debug!(%owner, %application_id, "application deleted before task was stored");
                Ok(None)
            }
            Err(err) => Err(err.into()),
        }
    }

    /// Looks up one of the caller's tasks.
    ///
    /// # Errors
    ///
    /// Returns [`TrackerServiceError::Repository`](super::TrackerServiceError::Repository)
    /// when storage fails.
    pub async fn find(&self, owner: UserId, id: TaskId) -> TrackerServiceResult<Option<Task>> {
        Ok(self.repository.find_task(owner, id).await?)
    }

    /// Sets the completion flag of one of the caller's tasks.
    ///
    /// Setting the current value again is a no-op that still reports the row
    /// as affected. Returns `0` when the task is not the caller's.
    ///
    /// # Errors
    ///
    /// Returns [`TrackerServiceError::Repository`](super::TrackerServiceError::Repository)
    /// when storage fails.
    pub async fn toggle(
        &self,
        owner: UserId,
        id: TaskId,
        completed: bool,
    ) -> TrackerServiceResult<usize> {
        let affected = self.repository.set_task_completed(owner, id, completed).await?;
        debug!(%owner, task_id = %id, completed, affected, "task toggle");
        Ok(affected)
    }

    /// Deletes one of the caller's tasks.
    ///
    /// # Errors
    ///
    /// Returns [`TrackerServiceError::Repository`](super::TrackerServiceError::Repository)
    /// when storage fails.
    pub async fn delete(&self, owner: UserId, id: TaskId) -> TrackerServiceResult<usize> {
        let affected = self.repository.delete_task(owner, id).await?;
        debug!(%owner, task_id = %id, affected, "task delete");
        Ok(affected)
    }
}
