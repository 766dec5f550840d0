//! In-memory store backing both tracker repository ports.
//!
//! Applications and tasks share one lock so that deleting an application
//! removes its tasks atomically, matching the cascading foreign key in
//! `PostgreSQL`.

use async_trait::async_trait;
use std::cmp::Ordering;
use std::collections::HashMap;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::identity::domain::UserId;
use crate::tracker::{
    domain::{Application, ApplicationId, Stage, Task, TaskId},
    ports::{
        ApplicationRepository, TaskRepository, TrackerRepositoryError, TrackerRepositoryResult,
    },
};

/// Thread-safe in-memory tracker store.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTrackerStore {
    state: Arc<RwLock<TrackerState>>,
}

#[derive(Debug, Default)]
struct TrackerState {
    applications: HashMap<ApplicationId, Application>,
    tasks: HashMap<TaskId, Task>,
}

impl TrackerState {
    fn owns(&self, owner: UserId, application_id: ApplicationId) -> bool {
        self.applications
            .get(&application_id)
            .is_some_and(|application| application.owner() == owner)
    }

    fn owned_task_mut(&mut self, owner: UserId, id: TaskId) -> Option<&mut Task> {
        let parent = self.tasks.get(&id)?.application_id();
        if !self.owns(owner, parent) {
            return None;
        }
        self.tasks.get_mut(&id)
    }
}

impl InMemoryTrackerStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Counts the tasks held under an application, whoever owns it.
    ///
    /// # Errors
    ///
    /// Returns [`TrackerRepositoryError::Persistence`] when the store lock is
    /// poisoned.
    pub fn task_count_for(
        &self,
        application_id: ApplicationId,
    ) -> TrackerRepositoryResult<usize> {
        let state = self.read_state()?;
        Ok(state
            .tasks
            .values()
            .filter(|task| task.application_id() == application_id)
            .count())
    }

    fn read_state(&self) -> TrackerRepositoryResult<RwLockReadGuard<'_, TrackerState>> {
        self.state.read().map_err(|err| {
            TrackerRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })
    }

    fn write_state(&self) -> TrackerRepositoryResult<RwLockWriteGuard<'_, TrackerState>> {
        self.state.write().map_err(|err| {
            TrackerRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })
    }
}

/// Orders records newest first, breaking timestamp ties by identifier so the
/// result matches the `PostgreSQL` adapter.
fn newest_first(
    left: (chrono::DateTime<chrono::Utc>, uuid::Uuid),
    right: (chrono::DateTime<chrono::Utc>, uuid::Uuid),
) -> Ordering {
    right.cmp(&left)
}

#[async_trait]
impl ApplicationRepository for InMemoryTrackerStore {
    async fn store_application(&self, application: &Application) -> TrackerRepositoryResult<()> {
        let mut state = self.write_state()?;
        if state.applications.contains_key(&application.id()) {
            return Err(TrackerRepositoryError::DuplicateApplication(
                application.id(),
            ));
        }
        state
            .applications
            .insert(application.id(), application.clone());
        Ok(())
    }

    async fn find_application(
        &self,
        owner: UserId,
        id: ApplicationId,
    ) -> TrackerRepositoryResult<Option<Application>> {
        let state = self.read_state()?;
        Ok(state
            .applications
            .get(&id)
            .filter(|application| application.owner() == owner)
            .cloned())
    }

    async fn list_applications(&self, owner: UserId) -> TrackerRepositoryResult<Vec<Application>> {
        let state = self.read_state()?;
        let mut applications: Vec<Application> = state
            .applications
            .values()
            .filter(|application| application.owner() == owner)
            .cloned()
            .collect();
        applications.sort_by(|left, right| {
            newest_first(
                (left.created_at(), left.id().into_inner()),
                (right.created_at(), right.id().into_inner()),
            )
        });
        Ok(applications)
    }

    async fn update_stage(
        &self,
        owner: UserId,
        id: ApplicationId,
        stage: Stage,
    ) -> TrackerRepositoryResult<usize> {
        let mut state = self.write_state()?;
        let Some(application) = state
            .applications
            .get_mut(&id)
            .filter(|application| application.owner() == owner)
        else {
            return Ok(0);
        };
        application.move_to(stage);
        Ok(1)
    }

    async fn delete_application(
        &self,
        owner: UserId,
        id: ApplicationId,
    ) -> TrackerRepositoryResult<usize> {
        let mut state = self.write_state()?;
        if !state.owns(owner, id) {
            return Ok(0);
        }
        state.applications.remove(&id);
        state.tasks.retain(|_, task| task.application_id() != id);
        Ok(1)
    }
}

#[async_trait]
impl TaskRepository for InMemoryTrackerStore {
    async fn store_task(&self, task: &Task) -> TrackerRepositoryResult<()> {
        let mut state = self.write_state()?;
        if !state.applications.contains_key(&task.application_id()) {
            return Err(TrackerRepositoryError::ApplicationNotFound(
                task.application_id(),
            ));
        }
        if state.tasks.contains_key(&task.id()) {
            return Err(TrackerRepositoryError::DuplicateTask(task.id()));
        }
        state.tasks.insert(task.id(), task.clone());
        Ok(())
    }

    async fn find_task(&self, owner: UserId, id: TaskId) -> TrackerRepositoryResult<Option<Task>> {
        let state = self.read_state()?;
        Ok(state
            .tasks
            .get(&id)
            .filter(|task| state.owns(owner, task.application_id()))
            .cloned())
    }

    async fn list_tasks(&self, owner: UserId) -> TrackerRepositoryResult<Vec<Task>> {
        let state = self.read_state()?;
        let mut tasks: Vec<Task> = state
            .tasks
            .values()
            .filter(|task| state.owns(owner, task.application_id()))
            .cloned()
            .collect();
        tasks.sort_by(|left, right| {
            newest_first(
                (left.created_at(), left.id().into_inner()),
                (right.created_at(), right.id().into_inner()),
            )
        });
        Ok(tasks)
    }

    async fn set_task_completed(
        &self,
        owner: UserId,
        id: TaskId,
        completed: bool,
    ) -> TrackerRepositoryResult<usize> {
        let mut state = self.write_state()?;
        let Some(task) = state.owned_task_mut(owner, id) else {
            return Ok(0);
        };
        task.set_completed(completed);
        Ok(1)
    }

    async fn delete_task(&self, owner: UserId, id: TaskId) -> TrackerRepositoryResult<usize> {
        let mut state = self.write_state()?;
        if state.owned_task_mut(owner, id).is_none() {
            return Ok(0);
        }
        state.tasks.remove(&id);
        Ok(1)
    }
}
