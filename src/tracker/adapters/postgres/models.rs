//! Diesel row models for tracker persistence.

use super::schema::{applications, tasks};
use chrono::{DateTime, Utc};
use diesel::prelude::*;

/// Query result row for application records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = applications)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct ApplicationRow {
    /// Application identifier.
    pub id: uuid::Uuid,
    /// Owning user.
    pub user_id: uuid::Uuid,
    /// Company name.
    pub company: String,
    /// Role title.
    pub role: String,
    /// Optional location.
    pub location: Option<String>,
    /// Optional posting URL.
    pub url: Option<String>,
    /// Optional salary note.
    pub salary: Option<String>,
    /// Optional notes.
    pub notes: Option<String>,
    /// Pipeline stage.
    pub stage: String,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

/// Insert model for application records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = applications)]
pub struct NewApplicationRow {
    /// Application identifier.
    pub id: uuid::Uuid,
    /// Owning user.
    pub user_id: uuid::Uuid,
    /// Company name.
    pub company: String,
    /// Role title.
    pub role: String,
    /// Optional location.
    pub location: Option<String>,
    /// Optional posting URL.
    pub url: Option<String>,
    /// Optional salary note.
    pub salary: Option<String>,
    /// Optional notes.
    pub notes: Option<String>,
    /// Pipeline stage.
    pub stage: String,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

/// Query result row for task records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = tasks)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct TaskRow {
    /// Task identifier.
    pub id: uuid::Uuid,
    /// Parent application identifier.
    pub application_id: uuid::Uuid,
    /// Task title.
    pub title: String,
    /// Completion flag.
    pub completed: bool,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

/// Insert model for task records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = tasks)]
pub struct NewTaskRow {
    /// Task identifier.
    pub id: uuid::Uuid,
    /// Parent application identifier.
    pub application_id: uuid::Uuid,
    /// Task title.
    pub title: String,
    /// Completion flag.
    pub completed: bool,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}
