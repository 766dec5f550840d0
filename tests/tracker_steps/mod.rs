//! Step definitions for tracker behaviour scenarios.

mod given;
mod when;
