//! Error types for tracker domain validation and parsing.

use thiserror::Error;

/// Errors returned while constructing tracker domain values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TrackerDomainError {
    /// The company name is empty after trimming.
    #[error("company must not be empty")]
    EmptyCompany,

    /// The role is empty after trimming.
    #[error("role must not be empty")]
    EmptyRole,

    /// The task title is empty after trimming.
    #[error("task title must not be empty")]
    EmptyTaskTitle,

    /// The submitted stage is not part of the pipeline.
    #[error(transparent)]
    UnknownStage(#[from] ParseStageError),
}

/// Error returned while parsing a stage from text.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown stage: {0}")]
pub struct ParseStageError(pub String);
