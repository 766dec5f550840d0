//! Identity boundary for Jobtrack.
//!
//! Every tracker operation starts by resolving the signed-in user from an
//! opaque session token. The identity provider itself is an external
//! collaborator; this module defines the contract the rest of the crate
//! consumes and ships an in-memory provider for development and tests:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]

pub mod adapters;
pub mod domain;
pub mod ports;
