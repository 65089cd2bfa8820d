//! Bearer-token authentication and role-based authorization.
//!
//! Tokens are HS256 JWTs carrying the caller's roles. [`RoleGuard`] checks
//! them per route; mount it with `route_layer` so only the guarded
//! method runs the check.
//!
//! ```ignore
//! use axum::{middleware::from_fn_with_state, routing::delete};
//! use axum_helpers::auth::{AuthConfig, RoleGuard, require_any_role};
//! use core_config::FromEnv;
//!
//! let guard = RoleGuard::from_config(&AuthConfig::from_env()?);
//! let route = delete(handler).route_layer(from_fn_with_state(guard, require_any_role));
//! ```

pub mod config;
pub mod jwt;
pub mod middleware;

pub use config::AuthConfig;
pub use jwt::{ACCESS_TOKEN_TTL, JwtAuth, JwtClaims};
pub use middleware::{RoleGuard, require_any_role};
