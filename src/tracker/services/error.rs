//! Service-level error types shared by application and task services.

use crate::tracker::{domain::TrackerDomainError, ports::TrackerRepositoryError};
use thiserror::Error;

/// Service-level errors for tracker operations.
#[derive(Debug, Error)]
pub enum TrackerServiceError {
    /// Domain validation failed; nothing was persisted.
    #[error(transparent)]
    Domain(#[from] TrackerDomainError),
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] TrackerRepositoryError),
}

/// Result type for tracker service operations.
pub type TrackerServiceResult<T> = Result<T, TrackerServiceError>;
