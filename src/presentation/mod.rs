//! Server-side rendering of the listing and login views.
//!
//! Templates are embedded at compile time and rendered with `minijinja`,
//! which escapes every interpolated value because the template names end in
//! `.html`.

mod badge;
pub mod paths;
mod renderer;
mod view;

pub use badge::badge_class;
pub use renderer::{PageRenderer, RenderError};
