use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_helpers::AppError;
use thiserror::Error;

use crate::validation::FieldViolation;

#[derive(Debug, Error)]
pub enum ProductError {
    #[error("Validation failed: {}", format_violations(.0))]
    Validation(Vec<FieldViolation>),

    #[error("Product ({0}) not found.")]
    NotFound(String),

    #[error("{message}")]
    InvalidBody { status: StatusCode, message: String },

    #[error("Database error: {0}")]
    Database(String),
}

pub type ProductResult<T> = Result<T, ProductError>;

fn format_violations(violations: &[FieldViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

impl ProductError {
    /// Client-facing messages; the response body for 4xx errors.
    pub fn messages(&self) -> Vec<String> {
        match self {
            ProductError::Validation(violations) => {
                violations.iter().map(ToString::to_string).collect()
            }
            other => vec![other.to_string()],
        }
    }
}

/// Validation and not-found failures are both 400 with a JSON array of
/// message strings. Persistence failures reuse the shared 500 body.
impl IntoResponse for ProductError {
    fn into_response(self) -> Response {
        let status = match &self {
            ProductError::Validation(_) | ProductError::NotFound(_) => StatusCode::BAD_REQUEST,
            ProductError::InvalidBody { status, .. } => *status,
            ProductError::Database(msg) => {
                return AppError::InternalServerError(msg.clone()).into_response();
            }
        };

        tracing::debug!(status = %status, error = %self, "Rejecting product request");
        (status, Json(self.messages())).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[test]
    fn test_not_found_message() {
        assert_eq!(
            ProductError::NotFound("id1".into()).to_string(),
            "Product (id1) not found."
        );
    }

    #[tokio::test]
    async fn test_not_found_is_bad_request_with_single_message() {
        let response = ProductError::NotFound("id1".into()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            body_json(response).await,
            serde_json::json!(["Product (id1) not found."])
        );
    }

    #[tokio::test]
    async fn test_validation_lists_every_violation() {
        let err = ProductError::Validation(vec![
            FieldViolation {
                field: "description".into(),
                message: "must not be blank".into(),
            },
            FieldViolation {
                field: "name".into(),
                message: "must not be blank".into(),
            },
        ]);
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            body_json(response).await,
            serde_json::json!(["description: must not be blank", "name: must not be blank"])
        );
    }

    #[tokio::test]
    async fn test_invalid_body_keeps_extractor_status() {
        let err = ProductError::InvalidBody {
            status: StatusCode::UNSUPPORTED_MEDIA_TYPE,
            message: "Expected request with `Content-Type: application/json`".into(),
        };
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::UNSUPPORTED_MEDIA_TYPE);
        assert_eq!(body_json(response).await.as_array().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_database_error_is_internal() {
        let response = ProductError::Database("connection reset".into()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body_json(response).await["error"], "INTERNAL_ERROR");
    }
}
