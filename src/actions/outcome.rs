//! Tagged outcomes returned to the presentation layer.

use crate::identity::ports::Session;
use crate::presentation::paths;

/// Navigation target after a handler completes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    /// The login view.
    Login,
    /// The application listing.
    Applications,
}

impl Route {
    /// Returns the URL path of the target.
    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            Self::Login => paths::LOGIN,
            Self::Applications => paths::APPLICATIONS,
        }
    }
}

/// Result of a mutating form submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionOutcome {
    /// Navigate to the route. Used after successful or silently skipped
    /// mutations and for unauthenticated callers.
    Redirect(Route),
    /// A required value was blank or malformed; nothing was persisted and the
    /// page should be shown again with its prior state.
    ValidationError(String),
}

/// Result of requesting a page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageOutcome {
    /// Navigate elsewhere instead of rendering.
    Redirect(Route),
    /// Rendered HTML.
    Render(String),
}

/// Result of a sign-in or sign-up submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthOutcome {
    /// The caller is signed in; store the session and navigate to
    /// [`Route::Applications`].
    SignedIn(Session),
    /// The credentials were refused; show the message on the login view.
    Rejected(String),
}
