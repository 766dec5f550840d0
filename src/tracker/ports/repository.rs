//! Repository ports for owner-scoped application and task storage.
//!
//! Every read and mutation takes the caller's [`UserId`] and filters on it.
//! A record owned by someone else is indistinguishable from a record that
//! does not exist: lookups return `None` and mutations report zero affected
//! rows.

use crate::identity::domain::UserId;
use crate::tracker::domain::{Application, ApplicationId, Stage, Task, TaskId};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for tracker repository operations.
pub type TrackerRepositoryResult<T> = Result<T, TrackerRepositoryError>;

/// Application persistence contract.
#[async_trait]
pub trait ApplicationRepository: Send + Sync {
    /// Stores a new application.
    ///
    /// # Errors
    ///
    /// Returns [`TrackerRepositoryError::DuplicateApplication`] when the
    /// identifier already exists.
    async fn store_application(&self, application: &Application) -> TrackerRepositoryResult<()>;

    /// Finds an application owned by `owner`.
    async fn find_application(
        &self,
        owner: UserId,
        id: ApplicationId,
    ) -> TrackerRepositoryResult<Option<Application>>;

    /// Returns every application owned by `owner`, newest first.
    async fn list_applications(&self, owner: UserId) -> TrackerRepositoryResult<Vec<Application>>;

    /// Reassigns the stage of an application owned by `owner`.
    ///
    /// Returns the number of rows affected: `1` on success, `0` when the
    /// application does not exist or belongs to another user.
    async fn update_stage(
        &self,
        owner: UserId,
        id: ApplicationId,
        stage: Stage,
    ) -> TrackerRepositoryResult<usize>;

    /// Deletes an application owned by `owner` together with its tasks.
    ///
    /// Returns the number of application rows deleted.
    async fn delete_application(
        &self,
        owner: UserId,
        id: ApplicationId,
    ) -> TrackerRepositoryResult<usize>;
}

/// Task persistence contract. Ownership is resolved through the parent
/// application on every call.
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Stores a new task.
    ///
    /// Callers are expected to have checked ownership of the parent.
    ///
    /// # Errors
    ///
    /// Returns [`TrackerRepositoryError::ApplicationNotFound`] when the parent
    /// application no longer exists, or
    /// [`TrackerRepositoryError::DuplicateTask`] when the identifier exists.
    async fn store_task(&self, task: &Task) -> TrackerRepositoryResult<()>;

    /// Finds a task whose parent application is owned by `owner`.
    async fn find_task(&self, owner: UserId, id: TaskId) -> TrackerRepositoryResult<Option<Task>>;

    /// Returns every task under applications owned by `owner`, newest first.
    async fn list_tasks(&self, owner: UserId) -> TrackerRepositoryResult<Vec<Task>>;

    /// Sets the completion flag of a task whose parent is owned by `owner`.
    ///
    /// Returns the number of rows affected.
    async fn set_task_completed(
        &self,
        owner: UserId,
        id: TaskId,
        completed: bool,
    ) -> TrackerRepositoryResult<usize>;

    /// Deletes a task whose parent is owned by `owner`.
    ///
    /// Returns the number of rows deleted.
    async fn delete_task(&self, owner: UserId, id: TaskId) -> TrackerRepositoryResult<usize>;
}

/// Errors returned by tracker repository implementations.
#[derive(Debug, Clone, Error)]
pub enum TrackerRepositoryError {
    /// An application with the same identifier already exists.
    #[error("duplicate application identifier: {0}")]
    DuplicateApplication(ApplicationId),

    /// A task with the same identifier already exists.
    #[error("duplicate task identifier: {0}")]
    DuplicateTask(TaskId),

    /// The parent application of a new task does not exist.
    #[error("application not found: {0}")]
    ApplicationNotFound(ApplicationId),

    /// Persisted data could not be reconstructed into domain types.
    #[error("invalid persisted data: {0}")]
    InvalidPersistedData(Arc<dyn std::error::Error + Send + Sync>),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl TrackerRepositoryError {
    /// Wraps a data-quality or deserialization error from persisted rows.
    pub fn invalid_persisted_data(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::InvalidPersistedData(Arc::new(err))
    }

    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
