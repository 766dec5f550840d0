//! Domain model for user identity and credentials.

mod credentials;
mod error;
mod ids;

pub use credentials::{Credentials, EmailAddress, MIN_PASSWORD_LENGTH, Password};
pub use error::IdentityDomainError;
pub use ids::{SessionToken, UserId};
