//! PostgreSQL plumbing shared by the catalog services.
//!
//! - [`postgres`]: pool configuration, connecting (with retry), migrations, health checks
//! - [`common`]: error type and the retry/backoff helper
//!
//! ```ignore
//! use core_config::FromEnv;
//! use database::postgres::{self, PostgresConfig};
//!
//! let config = PostgresConfig::from_env()?;
//! let db = postgres::connect_from_config_with_retry(config, None).await?;
//! postgres::run_migrations::<migration::Migrator>(&db, "catalog_api").await?;
//! ```

pub mod common;
pub mod postgres;

pub use common::{DatabaseError, DatabaseResult};
