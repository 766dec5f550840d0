//! Runtime configuration loaded via `OrthoConfig`.
//!
//! Values come from defaults, an optional configuration file, `JOBTRACK_*`
//! environment variables, and command-line flags, in increasing precedence.

use crate::tracker::adapters::postgres::TrackerPgPool;
use diesel::pg::PgConnection;
use diesel::r2d2::{ConnectionManager, Pool};
use ortho_config::OrthoConfig;
use serde::Deserialize;

const DEFAULT_POOL_MAX_SIZE: u32 = 8;
const DEFAULT_LOG_FILTER: &str = "info";

/// Configuration values for storage and logging.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "JOBTRACK")]
pub struct TrackerSettings {
    /// `PostgreSQL` connection URL. The in-memory store is used when unset.
    pub database_url: Option<String>,
    /// Maximum number of pooled database connections.
    pub pool_max_size: Option<u32>,
    /// `tracing` filter directive, for example `jobtrack=debug`.
    pub log_filter: Option<String>,
    /// Emit logs as JSON lines.
    #[ortho_config(default = false)]
    pub log_json: bool,
}

impl TrackerSettings {
    /// Returns the configured pool size, falling back to the default.
    #[must_use]
    pub fn pool_max_size(&self) -> u32 {
        self.pool_max_size.unwrap_or(DEFAULT_POOL_MAX_SIZE)
    }

    /// Returns the configured log filter, falling back to `info`.
    #[must_use]
    pub fn log_filter(&self) -> &str {
        self.log_filter.as_deref().unwrap_or(DEFAULT_LOG_FILTER)
    }

    /// Builds a connection pool when a database URL is configured.
    ///
    /// Returns `Ok(None)` when no URL is set.
    ///
    /// # Errors
    ///
    /// Returns the `r2d2` error when the pool cannot establish its initial
    /// connections.
    pub fn build_pool(&self) -> Result<Option<TrackerPgPool>, diesel::r2d2::PoolError> {
        let Some(url) = self.database_url.as_deref() else {
            return Ok(None);
        };
        let manager = ConnectionManager::<PgConnection>::new(url);
        Pool::builder()
            .max_size(self.pool_max_size())
            .build(manager)
            .map(Some)
    }
}
