use core_config::{env_parse_or, env_required, ConfigError, FromEnv};
use sea_orm::ConnectOptions;
use std::time::Duration;
use tracing::log::LevelFilter;

/// Connection pool settings for PostgreSQL
#[derive(Clone, Debug)]
pub struct PostgresConfig {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
    pub connect_timeout: Duration,
    /// Log every statement through sqlx at `info`
    pub sqlx_logging: bool,
}

impl PostgresConfig {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            max_connections: 10,
            min_connections: 1,
            connect_timeout: Duration::from_secs(8),
            sqlx_logging: false,
        }
    }

    pub fn into_connect_options(self) -> ConnectOptions {
        let mut opt = ConnectOptions::new(self.url);
        opt.max_connections(self.max_connections)
            .min_connections(self.min_connections)
            .connect_timeout(self.connect_timeout)
            .acquire_timeout(self.connect_timeout)
            .sqlx_logging(self.sqlx_logging)
            .sqlx_logging_level(LevelFilter::Info);
        opt
    }
}

impl FromEnv for PostgresConfig {
    /// `DATABASE_URL` is required; `DB_MAX_CONNECTIONS`, `DB_MIN_CONNECTIONS`,
    /// `DB_CONNECT_TIMEOUT_SECS` and `DB_SQLX_LOGGING` are optional.
    fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::new(env_required("DATABASE_URL")?);

        let min_connections = env_parse_or("DB_MIN_CONNECTIONS", defaults.min_connections)?;
        let max_connections = env_parse_or("DB_MAX_CONNECTIONS", defaults.max_connections)?;
        if min_connections > max_connections {
            return Err(ConfigError::ParseError {
                key: "DB_MIN_CONNECTIONS".to_string(),
                details: format!(
                    "must not exceed DB_MAX_CONNECTIONS ({min_connections} > {max_connections})"
                ),
            });
        }

        let connect_timeout_secs =
            env_parse_or("DB_CONNECT_TIMEOUT_SECS", defaults.connect_timeout.as_secs())?;
        let sqlx_logging = env_parse_or("DB_SQLX_LOGGING", defaults.sqlx_logging)?;

        Ok(Self {
            max_connections,
            min_connections,
            connect_timeout: Duration::from_secs(connect_timeout_secs),
            sqlx_logging,
            ..defaults
        })
    }
}
