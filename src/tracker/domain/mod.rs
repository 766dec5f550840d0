//! Domain model for applications, stages, and follow-up tasks.
//!
//! Owners are identified by [`UserId`](crate::identity::domain::UserId);
//! everything else in this module is free of infrastructure concerns.

mod application;
mod error;
mod ids;
mod stage;
mod task;

pub use application::{
    Application, ApplicationDetails, ApplicationWithTasks, PersistedApplicationData,
};
pub use error::{ParseStageError, TrackerDomainError};
pub use ids::{ApplicationId, TaskId};
pub use stage::Stage;
pub use task::{PersistedTaskData, Task, TaskTitle};
