//! Port contracts for identity resolution.

pub mod provider;

pub use provider::{IdentityError, IdentityProvider, IdentityResult, Session};

#[cfg(test)]
pub use provider::MockIdentityProvider;
