use super::config::AuthConfig;
use super::jwt::{JwtAuth, JwtClaims};
use crate::errors::AppError;
use axum::{
    extract::{Request, State},
    http::{HeaderMap, header},
    middleware::Next,
    response::Response,
};
use std::sync::Arc;

/// Token verifier plus the roles a guarded route accepts.
#[derive(Clone, Debug)]
pub struct RoleGuard {
    auth: JwtAuth,
    roles: Arc<[String]>,
}

impl RoleGuard {
    pub fn new<I, S>(auth: JwtAuth, roles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            auth,
            roles: roles.into_iter().map(Into::into).collect(),
        }
    }

    pub fn from_config(config: &AuthConfig) -> Self {
        Self::new(JwtAuth::new(config), config.privileged_roles.iter().cloned())
    }

    pub fn auth(&self) -> &JwtAuth {
        &self.auth
    }

    pub fn roles(&self) -> &[String] {
        &self.roles
    }
}

/// Bearer token from the Authorization header, falling back to an
/// `access_token` cookie.
fn extract_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .or_else(|| {
            headers
                .get(header::COOKIE)
                .and_then(|v| v.to_str().ok())
                .and_then(|cookies| {
                    cookies.split(';').find_map(|cookie| {
                        let (name, value) = cookie.trim().split_once('=')?;
                        (name == "access_token" && !value.is_empty()).then_some(value)
                    })
                })
        })
}

/// Rejects with 401 when no valid token is present and 403 when the token
/// holds none of the guard's roles. Verified [`JwtClaims`] are inserted
/// into request extensions.
pub async fn require_any_role(
    State(guard): State<RoleGuard>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let claims: JwtClaims = {
        let Some(token) = extract_token(request.headers()) else {
            tracing::debug!("No bearer token in Authorization header or cookie");
            return Err(AppError::Unauthorized("Authentication required".into()));
        };

        guard.auth.verify_token(token).map_err(|e| {
            tracing::debug!("JWT verification failed: {}", e);
            AppError::InvalidToken("Invalid or expired token".into())
        })?
    };

    if !claims.has_any_role(guard.roles()) {
        tracing::info!(
            subject = %claims.sub,
            roles = ?claims.roles,
            "Caller lacks a privileged role"
        );
        return Err(AppError::Forbidden("Missing required role".into()));
    }

    request.extensions_mut().insert(claims);
    Ok(next.run(request).await)
}
