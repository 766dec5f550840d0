//! Job-application tracking for Jobtrack.
//!
//! Users record applications, reassign their pipeline stage, and attach
//! follow-up tasks. Every repository call filters on the owning user, and
//! task ownership is derived from the parent application rather than stored
//! on the task. The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;
