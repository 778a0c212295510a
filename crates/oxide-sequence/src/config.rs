//! Connection configuration.
//!
//! ```rust
//! use oxide_sequence::config::PoolConfig;
//!
//! let config = PoolConfig::new("postgres://localhost/app").max_connections(1);
//! assert_eq!(config.max_connections, 1);
//! ```

use serde::Deserialize;
use sqlx::postgres::{PgPool, PgPoolOptions};
use thiserror::Error;
use tracing::debug;

use crate::connection::PgSession;

/// Environment variable holding the database URL.
pub const DATABASE_URL_ENV: &str = "DATABASE_URL";

/// Environment variable overriding the pool size.
pub const MAX_CONNECTIONS_ENV: &str = "OXIDE_SEQUENCE_MAX_CONNECTIONS";

const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// Errors raised while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A required environment variable is not set.
    #[error("Environment variable {0} is not set")]
    MissingVar(&'static str),

    /// An environment variable holds an invalid value.
    #[error("Invalid value {value:?} for {var}")]
    InvalidVar {
        /// Variable name.
        var: &'static str,
        /// Value found.
        value: String,
    },
}

/// Where and how to connect.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PoolConfig {
    /// PostgreSQL connection URL.
    pub database_url: String,
    /// Maximum number of pooled connections.
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
}

const fn default_max_connections() -> u32 {
    DEFAULT_MAX_CONNECTIONS
}

impl PoolConfig {
    /// Creates a configuration for `database_url` with the default pool size.
    pub fn new(database_url: impl Into<String>) -> Self {
        Self {
            database_url: database_url.into(),
            max_connections: DEFAULT_MAX_CONNECTIONS,
        }
    }

    /// Sets the maximum number of pooled connections.
    #[must_use]
    pub const fn max_connections(mut self, max: u32) -> Self {
        self.max_connections = max;
        self
    }

    /// Reads `DATABASE_URL` and, if set, `OXIDE_SEQUENCE_MAX_CONNECTIONS`.
    ///
    /// # Errors
    ///
    /// Fails if `DATABASE_URL` is unset or the pool size is not a positive
    /// integer.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let database_url =
            lookup(DATABASE_URL_ENV).ok_or(ConfigError::MissingVar(DATABASE_URL_ENV))?;
        let mut config = Self::new(database_url);

        if let Some(value) = lookup(MAX_CONNECTIONS_ENV) {
            let max = value
                .trim()
                .parse::<u32>()
                .ok()
                .filter(|max| *max > 0)
                .ok_or_else(|| ConfigError::InvalidVar {
                    var: MAX_CONNECTIONS_ENV,
                    value: value.clone(),
                })?;
            config.max_connections = max;
        }

        Ok(config)
    }

    /// Builds a connection pool.
    ///
    /// A pool is not a connector; check a session out of it with
    /// [`PgSession::from_pool`] before running sequence operations.
    ///
    /// # Errors
    ///
    /// Returns the driver error if the first connection cannot be opened.
    pub async fn connect(&self) -> Result<PgPool, sqlx::Error> {
        debug!(max_connections = self.max_connections, "Connecting pool");
        PgPoolOptions::new()
            .max_connections(self.max_connections)
            .connect(&self.database_url)
            .await
    }

    /// Opens a single dedicated session, ignoring the pool size.
    ///
    /// # Errors
    ///
    /// Returns the driver error if the connection cannot be opened.
    pub async fn connect_session(&self) -> Result<PgSession, sqlx::Error> {
        debug!("Connecting session");
        PgSession::connect(&self.database_url).await
    }
}
