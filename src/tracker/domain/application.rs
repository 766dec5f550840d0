//! Application aggregate root and its owner-supplied details.

use super::{ApplicationId, Stage, Task, TrackerDomainError};
use crate::identity::domain::UserId;
use chrono::{DateTime, SubsecRound, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Company, role, and optional free-text fields entered by the owner.
///
/// Company and role are trimmed and must be non-empty. Optional fields are
/// trimmed and collapse to `None` when blank.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplicationDetails {
    company: String,
    role: String,
    location: Option<String>,
    url: Option<String>,
    salary: Option<String>,
    notes: Option<String>,
}

impl ApplicationDetails {
    /// Creates details with the required company and role.
    ///
    /// # Errors
    ///
    /// Returns [`TrackerDomainError::EmptyCompany`] or
    /// [`TrackerDomainError::EmptyRole`] when either is blank after trimming.
    pub fn new(
        company: impl Into<String>,
        role: impl Into<String>,
    ) -> Result<Self, TrackerDomainError> {
        let company = non_blank(company.into()).ok_or(TrackerDomainError::EmptyCompany)?;
        let role = non_blank(role.into()).ok_or(TrackerDomainError::EmptyRole)?;
        Ok(Self {
            company,
            role,
            location: None,
            url: None,
            salary: None,
            notes: None,
        })
    }

    /// Sets the location.
    #[must_use]
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = non_blank(location.into());
        self
    }

    /// Sets the posting URL.
    #[must_use]
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = non_blank(url.into());
        self
    }

    /// Sets the salary note.
    #[must_use]
    pub fn with_salary(mut self, salary: impl Into<String>) -> Self {
        self.salary = non_blank(salary.into());
        self
    }

    /// Sets free-form notes.
    #[must_use]
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = non_blank(notes.into());
        self
    }

    /// Returns the company name.
    #[must_use]
    pub fn company(&self) -> &str {
        &self.company
    }

    /// Returns the role.
    #[must_use]
    pub fn role(&self) -> &str {
        &self.role
    }

    /// Returns the location, if any.
    #[must_use]
    pub fn location(&self) -> Option<&str> {
        self.location.as_deref()
    }

    /// Returns the posting URL, if any.
    #[must_use]
    pub fn url(&self) -> Option<&str> {
        self.url.as_deref()
    }

    /// Returns the salary note, if any.
    #[must_use]
    pub fn salary(&self) -> Option<&str> {
        self.salary.as_deref()
    }

    /// Returns the notes, if any.
    #[must_use]
    pub fn notes(&self) -> Option<&str> {
        self.notes.as_deref()
    }
}

/// Trims a value and discards it when nothing remains.
pub(super) fn non_blank(value: String) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else if trimmed.len() == value.len() {
        Some(value)
    } else {
        Some(trimmed.to_owned())
    }
}

/// Application aggregate root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Application {
    id: ApplicationId,
    owner: UserId,
    details: ApplicationDetails,
    stage: Stage,
    created_at: DateTime<Utc>,
}

/// Parameter object for reconstructing a persisted application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedApplicationData {
    /// Persisted application identifier.
    pub id: ApplicationId,
    /// Persisted owner.
    pub owner: UserId,
    /// Persisted details.
    pub details: ApplicationDetails,
    /// Persisted stage.
    pub stage: Stage,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
}

impl Application {
    /// Creates a new application in the [`Stage::Saved`] stage.
    ///
    /// The creation timestamp is truncated to microseconds, the precision
    /// `PostgreSQL` stores.
    #[must_use]
    pub fn new(owner: UserId, details: ApplicationDetails, clock: &impl Clock) -> Self {
        Self {
            id: ApplicationId::new(),
            owner,
            details,
            stage: Stage::default(),
            created_at: clock.utc().trunc_subsecs(6),
        }
    }

    /// Reconstructs an application from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedApplicationData) -> Self {
        Self {
            id: data.id,
            owner: data.owner,
            details: data.details,
            stage: data.stage,
            created_at: data.created_at,
        }
    }

    /// Returns the application identifier.
    #[must_use]
    pub const fn id(&self) -> ApplicationId {
        self.id
    }

    /// Returns the owning user.
    #[must_use]
    pub const fn owner(&self) -> UserId {
        self.owner
    }

    /// Returns the owner-supplied details.
    #[must_use]
    pub const fn details(&self) -> &ApplicationDetails {
        &self.details
    }

    /// Returns the current stage.
    #[must_use]
    pub const fn stage(&self) -> Stage {
        self.stage
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Reassigns the stage. Every stage is reachable from every other.
    pub const fn move_to(&mut self, stage: Stage) {
        self.stage = stage;
    }
}

/// An application together with its tasks, newest task first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplicationWithTasks {
    /// The application.
    pub application: Application,
    /// Tasks attached to the application, newest first.
    pub tasks: Vec<Task>,
}
