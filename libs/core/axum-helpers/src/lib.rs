//! # Axum Helpers
//!
//! Shared HTTP plumbing for the catalog services.
//!
//! - **[`auth`]**: HS256 bearer tokens and the role guard middleware
//! - **[`server`]**: router assembly, health endpoint, graceful shutdown
//! - **[`middleware`]**: security headers
//! - **[`errors`]**: [`AppError`] and its JSON body

pub mod auth;
pub mod errors;
pub mod middleware;
pub mod server;

pub use auth::{ACCESS_TOKEN_TTL, AuthConfig, JwtAuth, JwtClaims, RoleGuard, require_any_role};
pub use errors::{AppError, ErrorCode, ErrorResponse};
pub use server::{
    HealthCheckFuture, HealthResponse, ShutdownCoordinator, create_production_app, create_router,
    health_router, run_health_checks, shutdown_signal,
};
