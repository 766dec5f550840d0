//! Form handlers behind the listing and login views.
//!
//! Each handler resolves the signed-in user before touching any data and
//! reports navigation as an explicit [`ActionOutcome`] or [`PageOutcome`]
//! value. Unauthenticated callers are sent to [`Route::Login`]; validation
//! failures come back as [`ActionOutcome::ValidationError`]; records that do
//! not exist or belong to someone else are silently skipped.

mod error;
mod form;
mod handlers;
mod outcome;

pub use error::{ActionError, ActionResult};
pub use form::FormData;
pub use handlers::TrackerActions;
pub use outcome::{ActionOutcome, AuthOutcome, PageOutcome, Route};
