use axum::{Router, routing::get};
use axum_helpers::auth::RoleGuard;

pub mod health;
pub mod products;

/// All API routes with their state applied.
pub fn routes(state: &crate::state::AppState, guard: RoleGuard) -> Router {
    Router::new().merge(products::router(state, guard))
}

/// `GET /ready`, merged next to the stateless app router.
pub fn ready_router(state: crate::state::AppState) -> Router {
    Router::new()
        .route("/ready", get(health::ready_handler))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Config, Environment};
    use crate::state::AppState;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use axum_helpers::auth::AuthConfig;
    use core_config::{app_info, server::ServerConfig};
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    fn memory_state() -> AppState {
        AppState {
            config: Config {
                app: app_info!(),
                server: ServerConfig::default(),
                auth: AuthConfig::new("0123456789abcdef0123456789abcdef").unwrap(),
                database: None,
                environment: Environment::Development,
            },
            db: None,
        }
    }

    #[tokio::test]
    async fn test_ready_without_database() {
        let response = ready_router(memory_state())
            .oneshot(Request::builder().uri("/ready").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["status"], "ready");
    }

    #[tokio::test]
    async fn test_products_routes_are_mounted() {
        let state = memory_state();
        let guard = RoleGuard::from_config(&state.config.auth);
        let response = routes(&state, guard)
            .oneshot(
                Request::builder()
                    .uri("/api/v1/products/")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }
}
