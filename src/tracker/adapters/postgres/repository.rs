//! `PostgreSQL` repository implementation for applications and tasks.

use super::{
    models::{ApplicationRow, NewApplicationRow, NewTaskRow, TaskRow},
    schema::{applications, tasks},
};
use crate::identity::domain::UserId;
use crate::tracker::{
    domain::{
        Application, ApplicationDetails, ApplicationId, PersistedApplicationData,
        PersistedTaskData, Stage, Task, TaskId, TaskTitle,
    },
    ports::{
        ApplicationRepository, TaskRepository, TrackerRepositoryError, TrackerRepositoryResult,
    },
};
use async_trait::async_trait;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use diesel::result::{DatabaseErrorKind, Error as DieselError};
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use std::sync::Arc;
use tracing::debug;

/// `PostgreSQL` connection pool type used by tracker adapters.
pub type TrackerPgPool = Pool<ConnectionManager<PgConnection>>;

/// Schema migrations shipped with the crate.
pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// `PostgreSQL`-backed store implementing both tracker repository ports.
#[derive(Debug, Clone)]
pub struct PostgresTrackerRepository {
    pool: TrackerPgPool,
}

impl PostgresTrackerRepository {
    /// Creates a new repository from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: TrackerPgPool) -> Self {
        Self { pool }
    }

    /// Applies any pending schema migrations.
    ///
    /// # Errors
    ///
    /// Returns [`TrackerRepositoryError::Persistence`] when a connection
    /// cannot be obtained or a migration fails.
    pub async fn run_migrations(&self) -> TrackerRepositoryResult<()> {
        self.run_blocking(|connection| {
            let applied = connection
                .run_pending_migrations(MIGRATIONS)
                .map_err(|err| TrackerRepositoryError::Persistence(Arc::from(err)))?;
            debug!(count = applied.len(), "applied pending migrations");
            Ok(())
        })
        .await
    }

    async fn run_blocking<F, T>(&self, f: F) -> TrackerRepositoryResult<T>
    where
        F: FnOnce(&mut PgConnection) -> TrackerRepositoryResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut connection = pool.get().map_err(TrackerRepositoryError::persistence)?;
            f(&mut connection)
        })
        .await
        .map_err(TrackerRepositoryError::persistence)?
    }
}

#[async_trait]
impl ApplicationRepository for PostgresTrackerRepository {
    async fn store_application(&self, application: &Application) -> TrackerRepositoryResult<()> {
        let application_id = application.id();
        let new_row = to_new_application_row(application);

        self.run_blocking(move |connection| {
            diesel::insert_into(applications::table)
                .values(&new_row)
                .execute(connection)
                .map_err(|err| match err {
                    DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
                        TrackerRepositoryError::DuplicateApplication(application_id)
                    }
                    _ => TrackerRepositoryError::persistence(err),
                })?;
            Ok(())
        })
        .await
    }

    async fn find_application(
        &self,
        owner: UserId,
        id: ApplicationId,
    ) -> TrackerRepositoryResult<Option<Application>> {
        self.run_blocking(move |connection| {
            let row = applications::table
                .filter(applications::id.eq(id.into_inner()))
                .filter(applications::user_id.eq(owner.into_inner()))
                .select(ApplicationRow::as_select())
                .first::<ApplicationRow>(connection)
                .optional()
                .map_err(TrackerRepositoryError::persistence)?;
            row.map(row_to_application).transpose()
        })
        .await
    }

    async fn list_applications(&self, owner: UserId) -> TrackerRepositoryResult<Vec<Application>> {
        self.run_blocking(move |connection| {
            let rows = applications::table
                .filter(applications::user_id.eq(owner.into_inner()))
                .order((applications::created_at.desc(), applications::id.desc()))
                .select(ApplicationRow::as_select())
                .load::<ApplicationRow>(connection)
                .map_err(TrackerRepositoryError::persistence)?;
            rows.into_iter().map(row_to_application).collect()
        })
        .await
    }

    async fn update_stage(
        &self,
        owner: UserId,
        id: ApplicationId,
        stage: Stage,
    ) -> TrackerRepositoryResult<usize> {
        self.run_blocking(move |connection| {
            diesel::update(
                applications::table
                    .filter(applications::id.eq(id.into_inner()))
                    .filter(applications::user_id.eq(owner.into_inner())),
            )
            .set(applications::stage.eq(stage.as_str()))
            .execute(connection)
            .map_err(TrackerRepositoryError::persistence)
        })
        .await
    }

    async fn delete_application(
        &self,
        owner: UserId,
        id: ApplicationId,
    ) -> TrackerRepositoryResult<usize> {
        self.run_blocking(move |connection| {
            diesel::delete(
                applications::table
                    .filter(applications::id.eq(id.into_inner()))
                    .filter(applications::user_id.eq(owner.into_inner())),
            )
            .execute(connection)
            .map_err(TrackerRepositoryError::persistence)
        })
        .await
    }
}

#[async_trait]
impl TaskRepository for PostgresTrackerRepository {
    async fn store_task(&self, task: &Task) -> TrackerRepositoryResult<()> {
        let task_id = task.id();
        let application_id = task.application_id();
        let new_row = to_new_task_row(task);

        self.run_blocking(move |connection| {
            diesel::insert_into(tasks::table)
                .values(&new_row)
                .execute(connection)
                .map_err(|err| match err {
                    DieselError::DatabaseError(DatabaseErrorKind::ForeignKeyViolation, _) => {
                        TrackerRepositoryError::ApplicationNotFound(application_id)
                    }
                    DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
                        TrackerRepositoryError::DuplicateTask(task_id)
                    }
                    _ => TrackerRepositoryError::persistence(err),
                })?;
            Ok(())
        })
        .await
    }

    async fn find_task(&self, owner: UserId, id: TaskId) -> TrackerRepositoryResult<Option<Task>> {
        self.run_blocking(move |connection| {
            let row = tasks::table
                .inner_join(applications::table)
                .filter(tasks::id.eq(id.into_inner()))
                .filter(applications::user_id.eq(owner.into_inner()))
                .select(TaskRow::as_select())
                .first::<TaskRow>(connection)
                .optional()
                .map_err(TrackerRepositoryError::persistence)?;
            row.map(row_to_task).transpose()
        })
        .await
    }

    async fn list_tasks(&self, owner: UserId) -> TrackerRepositoryResult<Vec<Task>> {
        self.run_blocking(move |connection| {
            let rows = tasks::table
                .inner_join(applications::table)
                .filter(applications::user_id.eq(owner.into_inner()))
                .order((tasks::created_at.desc(), tasks::id.desc()))
                .select(TaskRow::as_select())
                .load::<TaskRow>(connection)
                .map_err(TrackerRepositoryError::persistence)?;
            rows.into_iter().map(row_to_task).collect()
        })
        .await
    }

    async fn set_task_completed(
        &self,
        owner: UserId,
        id: TaskId,
        completed: bool,
    ) -> TrackerRepositoryResult<usize> {
        self.run_blocking(move |connection| {
            let owned_applications = applications::table
                .filter(applications::user_id.eq(owner.into_inner()))
                .select(applications::id);
            diesel::update(
                tasks::table
                    .filter(tasks::id.eq(id.into_inner()))
                    .filter(tasks::application_id.eq_any(owned_applications)),
            )
            .set(tasks::completed.eq(completed))
            .execute(connection)
            .map_err(TrackerRepositoryError::persistence)
        })
        .await
    }

    async fn delete_task(&self, owner: UserId, id: TaskId) -> TrackerRepositoryResult<usize> {
        self.run_blocking(move |connection| {
            let owned_applications = applications::table
                .filter(applications::user_id.eq(owner.into_inner()))
                .select(applications::id);
            diesel::delete(
                tasks::table
                    .filter(tasks::id.eq(id.into_inner()))
                    .filter(tasks::application_id.eq_any(owned_applications)),
            )
            .execute(connection)
            .map_err(TrackerRepositoryError::persistence)
        })
        .await
    }
}

fn to_new_application_row(application: &Application) -> NewApplicationRow {
    let details = application.details();
    NewApplicationRow {
        id: application.id().into_inner(),
        user_id: application.owner().into_inner(),
        company: details.company().to_owned(),
        role: details.role().to_owned(),
        location: details.location().map(str::to_owned),
        url: details.url().map(str::to_owned),
        salary: details.salary().map(str::to_owned),
        notes: details.notes().map(str::to_owned),
        stage: application.stage().as_str().to_owned(),
        created_at: application.created_at(),
    }
}

fn to_new_task_row(task: &Task) -> NewTaskRow {
    NewTaskRow {
        id: task.id().into_inner(),
        application_id: task.application_id().into_inner(),
        title: task.title().as_str().to_owned(),
        completed: task.is_completed(),
        created_at: task.created_at(),
    }
}

fn row_to_application(row: ApplicationRow) -> TrackerRepositoryResult<Application> {
    let ApplicationRow {
        id,
        user_id,
        company,
        role,
        location,
        url,
        salary,
        notes,
        stage: persisted_stage,
        created_at,
    } = row;

    let mut details = ApplicationDetails::new(company, role)
        .map_err(TrackerRepositoryError::invalid_persisted_data)?;
    if let Some(value) = location {
        details = details.with_location(value);
    }
    if let Some(value) = url {
        details = details.with_url(value);
    }
    if let Some(value) = salary {
        details = details.with_salary(value);
    }
    if let Some(value) = notes {
        details = details.with_notes(value);
    }
    let stage = Stage::try_from(persisted_stage.as_str())
        .map_err(TrackerRepositoryError::invalid_persisted_data)?;

    Ok(Application::from_persisted(PersistedApplicationData {
        id: ApplicationId::from_uuid(id),
        owner: UserId::from_uuid(user_id),
        details,
        stage,
        created_at,
    }))
}

fn row_to_task(row: TaskRow) -> TrackerRepositoryResult<Task> {
    let title = TaskTitle::new(row.title).map_err(TrackerRepositoryError::invalid_persisted_data)?;
    Ok(Task::from_persisted(PersistedTaskData {
        id: TaskId::from_uuid(row.id),
        application_id: ApplicationId::from_uuid(row.application_id),
        title,
        completed: row.completed,
        created_at: row.created_at,
    }))
}
