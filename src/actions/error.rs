//! Error types for form handlers.

use crate::identity::ports::IdentityError;
use crate::presentation::RenderError;
use crate::tracker::services::TrackerServiceError;
use thiserror::Error;

/// Failures a form handler cannot turn into an outcome.
#[derive(Debug, Error)]
pub enum ActionError {
    /// Tracker storage failed.
    #[error(transparent)]
    Tracker(#[from] TrackerServiceError),
    /// The identity provider failed.
    #[error(transparent)]
    Identity(#[from] IdentityError),
    /// Page rendering failed.
    #[error(transparent)]
    Render(#[from] RenderError),
}

/// Result type for form handlers.
pub type ActionResult<T> = Result<T, ActionError>;
