//! Application services for owner-scoped tracking.

mod applications;
mod error;
mod tasks;

pub use applications::{ApplicationService, NewApplicationRequest};
pub use error::{TrackerServiceError, TrackerServiceResult};
pub use tasks::TaskService;
