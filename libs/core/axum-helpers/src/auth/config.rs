//! Authentication settings loaded through `core_config::FromEnv`.

use core_config::{ConfigError, FromEnv, env_or_default, env_required, split_list};

const MIN_SECRET_LEN: usize = 32;
const DEFAULT_PRIVILEGED_ROLES: &str = "ADMIN,MANAGER";

/// Token signing and authorization settings.
///
/// Environment variables:
/// - `JWT_SECRET` (required, at least 32 characters)
/// - `PRIVILEGED_ROLES` (comma separated, default `ADMIN,MANAGER`)
#[derive(Clone, Debug)]
pub struct AuthConfig {
    pub secret: String,
    /// Roles allowed through [`RoleGuard`](super::RoleGuard)
    pub privileged_roles: Vec<String>,
}

impl AuthConfig {
    pub fn new(secret: impl Into<String>) -> Result<Self, ConfigError> {
        let secret = secret.into();
        validate_secret(&secret)?;
        Ok(Self {
            secret,
            privileged_roles: split_list(DEFAULT_PRIVILEGED_ROLES),
        })
    }

    pub fn with_privileged_roles<I, S>(mut self, roles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.privileged_roles = roles.into_iter().map(Into::into).collect();
        self
    }
}

fn validate_secret(secret: &str) -> Result<(), ConfigError> {
    if secret.len() < MIN_SECRET_LEN {
        return Err(ConfigError::ParseError {
            key: "JWT_SECRET".to_string(),
            details: format!(
                "must be at least {} characters (got {}). Generate one with: openssl rand -base64 32",
                MIN_SECRET_LEN,
                secret.len()
            ),
        });
    }
    Ok(())
}

impl FromEnv for AuthConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let secret = env_required("JWT_SECRET")?;
        validate_secret(&secret)?;

        let privileged_roles = split_list(&env_or_default(
            "PRIVILEGED_ROLES",
            DEFAULT_PRIVILEGED_ROLES,
        ));
        if privileged_roles.is_empty() {
            return Err(ConfigError::ParseError {
                key: "PRIVILEGED_ROLES".to_string(),
                details: "at least one role is required".to_string(),
            });
        }

        Ok(Self {
            secret,
            privileged_roles,
        })
    }
}
