//! Readiness handler backed by a real database check.

use crate::state::AppState;
use axum::{
    extract::State,
    response::{IntoResponse, Response},
};
use axum_helpers::server::{HealthCheckFuture, run_health_checks};

/// 200 when storage answers, 503 otherwise. The in-memory store is always
/// ready.
pub async fn ready_handler(State(state): State<AppState>) -> Response {
    let storage: HealthCheckFuture<'_> = match &state.db {
        Some(db) => Box::pin(async move {
            database::postgres::check_health(db)
                .await
                .map_err(|e| format!("Database check failed: {}", e))
        }),
        None => Box::pin(async { Ok(()) }),
    };

    run_health_checks(vec![("database", storage)])
        .await
        .into_response()
}
