use super::config::AuthConfig;
use chrono::{Duration, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

/// Default access token lifetime in seconds (15 minutes)
pub const ACCESS_TOKEN_TTL: i64 = 900;

/// Claims carried by every bearer token
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JwtClaims {
    pub sub: String,
    #[serde(default)]
    pub roles: Vec<String>,
    pub exp: i64,
    pub iat: i64,
    pub jti: String,
}

impl JwtClaims {
    /// Case-insensitive role check; a `ROLE_` prefix on either side is ignored.
    pub fn has_any_role<S: AsRef<str>>(&self, allowed: &[S]) -> bool {
        self.roles.iter().any(|held| {
            let held = normalize_role(held);
            allowed
                .iter()
                .any(|wanted| normalize_role(wanted.as_ref()) == held)
        })
    }
}

fn normalize_role(role: &str) -> String {
    let upper = role.trim().to_ascii_uppercase();
    match upper.strip_prefix("ROLE_") {
        Some(stripped) => stripped.to_string(),
        None => upper,
    }
}

/// Stateless HS256 token issuer and verifier.
///
/// Cloning is cheap; keys are shared.
#[derive(Clone)]
pub struct JwtAuth {
    encoding: Arc<EncodingKey>,
    decoding: Arc<DecodingKey>,
}

impl std::fmt::Debug for JwtAuth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtAuth").finish_non_exhaustive()
    }
}

impl JwtAuth {
    pub fn new(config: &AuthConfig) -> Self {
        let secret = config.secret.as_bytes();
        tracing::info!("JWT auth initialized");
        Self {
            encoding: Arc::new(EncodingKey::from_secret(secret)),
            decoding: Arc::new(DecodingKey::from_secret(secret)),
        }
    }

    /// Issue a token for `subject` valid for `ttl_seconds`
    pub fn issue_token(
        &self,
        subject: &str,
        roles: &[String],
        ttl_seconds: i64,
    ) -> Result<String, jsonwebtoken::errors::Error> {
        let now = Utc::now();
        let claims = JwtClaims {
            sub: subject.to_string(),
            roles: roles.to_vec(),
            exp: (now + Duration::seconds(ttl_seconds)).timestamp(),
            iat: now.timestamp(),
            jti: Uuid::new_v4().to_string(),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding)
    }

    /// Verify signature and expiry, returning the decoded claims
    pub fn verify_token(&self, token: &str) -> Result<JwtClaims, jsonwebtoken::errors::Error> {
        let validation = Validation::new(Algorithm::HS256);
        decode::<JwtClaims>(token, &self.decoding, &validation).map(|data| data.claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn auth() -> JwtAuth {
        JwtAuth::new(&AuthConfig::new("0123456789abcdef0123456789abcdef").unwrap())
    }

    fn claims_with(roles: &[&str]) -> JwtClaims {
        JwtClaims {
            sub: "user".into(),
            roles: roles.iter().map(|r| r.to_string()).collect(),
            exp: 0,
            iat: 0,
            jti: "jti".into(),
        }
    }

    #[test]
    fn test_issue_and_verify() {
        let auth = auth();
        let token = auth
            .issue_token("alice", &["ADMIN".to_string()], ACCESS_TOKEN_TTL)
            .unwrap();

        let claims = auth.verify_token(&token).unwrap();
        assert_eq!(claims.sub, "alice");
        assert_eq!(claims.roles, vec!["ADMIN"]);
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn test_expired_token_rejected() {
        let auth = auth();
        // Past the default 60s leeway
        let token = auth.issue_token("alice", &[], -120).unwrap();
        assert!(auth.verify_token(&token).is_err());
    }

    #[test]
    fn test_foreign_signature_rejected() {
        let other = JwtAuth::new(&AuthConfig::new("ffffffffffffffffffffffffffffffff").unwrap());
        let token = other.issue_token("mallory", &[], ACCESS_TOKEN_TTL).unwrap();
        assert!(auth().verify_token(&token).is_err());
    }

    #[test]
    fn test_garbage_token_rejected() {
        assert!(auth().verify_token("not-a-jwt").is_err());
    }

    #[test]
    fn test_role_matching() {
        let allowed = ["ADMIN", "MANAGER"];
        assert!(claims_with(&["admin"]).has_any_role(&allowed));
        assert!(claims_with(&["ROLE_MANAGER"]).has_any_role(&allowed));
        assert!(claims_with(&["USER", "manager"]).has_any_role(&allowed));
        assert!(!claims_with(&["USER"]).has_any_role(&allowed));
        assert!(!claims_with(&[]).has_any_role(&allowed));
    }
}
