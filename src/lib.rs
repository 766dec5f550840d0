//! Jobtrack: a personal job-application tracker.
//!
//! Authenticated users record the companies and roles they applied to, move
//! each application through a fixed pipeline of stages, and attach follow-up
//! tasks. Every read and write is scoped to the owning user.
//!
//! # Architecture
//!
//! Jobtrack follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (database, identity)
//!
//! # Modules
//!
//! - [`identity`]: Sign-in, sign-up, and session resolution
//! - [`tracker`]: Applications, stages, and follow-up tasks
//! - [`actions`]: Form handlers returning explicit navigation outcomes
//! - [`presentation`]: Server-side rendering of the listing and login views
//! - [`config`]: Layered runtime configuration
//! - [`telemetry`]: Structured logging setup

pub mod actions;
pub mod config;
pub mod identity;
pub mod presentation;
pub mod telemetry;
pub mod tracker;
