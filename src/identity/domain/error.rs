//! Error types for identity domain validation.

use thiserror::Error;

/// Errors returned while constructing credential values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum IdentityDomainError {
    /// The email address is not of the form `local@domain`.
    #[error("invalid email address '{0}'")]
    InvalidEmail(String),

    /// The password is shorter than the provider minimum.
    #[error("password must be at least {minimum} characters")]
    WeakPassword {
        /// Minimum accepted length in characters.
        minimum: usize,
    },
}
