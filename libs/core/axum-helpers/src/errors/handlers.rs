use axum::response::{IntoResponse, Response};

use super::AppError;

/// Router fallback for unmatched paths
pub async fn not_found() -> Response {
    AppError::RouteNotFound.into_response()
}
