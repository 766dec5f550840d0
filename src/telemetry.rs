//! Structured logging setup.

use crate::config::TrackerSettings;
use std::sync::Arc;
use thiserror::Error;
use tracing_subscriber::{EnvFilter, fmt};

/// Errors raised while installing the global subscriber.
#[derive(Debug, Error)]
pub enum TelemetryError {
    /// The configured filter directive is invalid.
    #[error("invalid log filter: {0}")]
    Filter(#[from] tracing_subscriber::filter::ParseError),
    /// A global subscriber is already installed.
    #[error("failed to install tracing subscriber: {0}")]
    Install(Arc<dyn std::error::Error + Send + Sync>),
}

/// Installs a `fmt` subscriber filtered by the configured directive.
///
/// # Errors
///
/// Returns [`TelemetryError`] when the filter does not parse or a global
/// subscriber has already been set.
pub fn init(settings: &TrackerSettings) -> Result<(), TelemetryError> {
    let filter = EnvFilter::try_new(settings.log_filter())?;
    let builder = fmt().with_env_filter(filter);
    let installed = if settings.log_json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };
    installed.map_err(|err| TelemetryError::Install(Arc::from(err)))
}
