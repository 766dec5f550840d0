//! Port contracts for application and task persistence.
//!
//! Ports define infrastructure-agnostic interfaces used by tracker services.

pub mod repository;

pub use repository::{
    ApplicationRepository, TaskRepository, TrackerRepositoryError, TrackerRepositoryResult,
};
