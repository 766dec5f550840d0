//! Identity provider port: sign-up, sign-in, sign-out, and session lookup.

use crate::identity::domain::{Credentials, EmailAddress, SessionToken, UserId};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for identity provider operations.
pub type IdentityResult<T> = Result<T, IdentityError>;

/// Authenticated session returned by sign-up and sign-in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    /// Opaque token the caller presents on later requests.
    pub token: SessionToken,
    /// User the session belongs to.
    pub user_id: UserId,
}

/// Identity provider contract.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// Registers a new account and signs it in.
    ///
    /// # Errors
    ///
    /// Returns [`IdentityError::DuplicateAccount`] when the email address is
    /// already registered.
    async fn sign_up(&self, credentials: &Credentials) -> IdentityResult<Session>;

    /// Signs in an existing account.
    ///
    /// # Errors
    ///
    /// Returns [`IdentityError::InvalidCredentials`] when the account does
    /// not exist or the password does not match.
    async fn sign_in(&self, credentials: &Credentials) -> IdentityResult<Session>;

    /// Ends a session. Unknown tokens are ignored.
    async fn sign_out(&self, token: &SessionToken) -> IdentityResult<()>;

    /// Resolves the user for a session token.
    ///
    /// Returns `None` when the token is unknown or has been signed out.
    async fn current_user(&self, token: &SessionToken) -> IdentityResult<Option<UserId>>;
}

/// Errors returned by identity provider implementations.
#[derive(Debug, Clone, Error)]
pub enum IdentityError {
    /// The email and password do not match a registered account.
    #[error("invalid login credentials")]
    InvalidCredentials,

    /// An account already exists for the email address.
    #[error("an account already exists for {0}")]
    DuplicateAccount(EmailAddress),

    /// The provider could not be reached or failed internally.
    #[error("identity provider error: {0}")]
    Provider(Arc<dyn std::error::Error + Send + Sync>),
}

impl IdentityError {
    /// Wraps a provider failure.
    pub fn provider(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Provider(Arc::new(err))
    }
}
