//! Validated sign-in credentials.

use super::IdentityDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Minimum password length accepted at sign-up.
pub const MIN_PASSWORD_LENGTH: usize = 6;

/// Normalized email address used as the account key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Creates a validated email address.
    ///
    /// The input is trimmed and lowercased.
    ///
    /// # Errors
    ///
    /// Returns [`IdentityDomainError::InvalidEmail`] unless the value holds
    /// exactly one `@` with non-empty text on both sides and no whitespace.
    pub fn new(value: impl Into<String>) -> Result<Self, IdentityDomainError> {
        let raw = value.into();
        let normalized = raw.trim().to_lowercase();
        let mut parts = normalized.split('@');
        let local = parts.next().unwrap_or_default();
        let domain = parts.next().unwrap_or_default();
        let is_valid = !local.is_empty()
            && !domain.is_empty()
            && parts.next().is_none()
            && !normalized.chars().any(char::is_whitespace);

        if !is_valid {
            return Err(IdentityDomainError::InvalidEmail(raw));
        }
        Ok(Self(normalized))
    }

    /// Returns the address as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Plain-text password held only for the duration of a sign-in call.
#[derive(Clone, PartialEq, Eq)]
pub struct Password(String);

impl Password {
    /// Creates a password after checking the minimum length.
    ///
    /// Passwords are not trimmed.
    ///
    /// # Errors
    ///
    /// Returns [`IdentityDomainError::WeakPassword`] when the value is shorter
    /// than [`MIN_PASSWORD_LENGTH`] characters.
    pub fn new(value: impl Into<String>) -> Result<Self, IdentityDomainError> {
        let raw = value.into();
        if raw.chars().count() < MIN_PASSWORD_LENGTH {
            return Err(IdentityDomainError::WeakPassword {
                minimum: MIN_PASSWORD_LENGTH,
            });
        }
        Ok(Self(raw))
    }

    /// Wraps a password submitted at sign-in without checking its length.
    #[must_use]
    pub fn submitted(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Returns the secret value.
    #[must_use]
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Password(***)")
    }
}

/// Email and password pair submitted by the login form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    email: EmailAddress,
    password: Password,
}

impl Credentials {
    /// Validates and pairs an email address with a new account password.
    ///
    /// # Errors
    ///
    /// Returns [`IdentityDomainError`] when either value fails validation.
    pub fn new(
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Result<Self, IdentityDomainError> {
        Ok(Self {
            email: EmailAddress::new(email)?,
            password: Password::new(password)?,
        })
    }

    /// Pairs an email address with a password submitted at sign-in.
    ///
    /// Only the email address is validated; whether the password matches is
    /// for the identity provider to decide.
    ///
    /// # Errors
    ///
    /// Returns [`IdentityDomainError::InvalidEmail`] when the email address is
    /// malformed.
    pub fn for_sign_in(
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Result<Self, IdentityDomainError> {
        Ok(Self {
            email: EmailAddress::new(email)?,
            password: Password::submitted(password),
        })
    }

    /// Returns the normalized email address.
    #[must_use]
    pub const fn email(&self) -> &EmailAddress {
        &self.email
    }

    /// Returns the password.
    #[must_use]
    pub const fn password(&self) -> &Password {
        &self.password
    }
}
