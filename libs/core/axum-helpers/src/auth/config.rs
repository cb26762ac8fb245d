//! JWT configuration, loaded the same way as the other `FromEnv` configs.

use core_config::{ConfigError, FromEnv, env_or_default, env_required};

/// Default token time-to-live: one hour.
const DEFAULT_TTL_SECONDS: i64 = 3600;

/// JWT authentication configuration.
///
/// Environment variables:
/// - `JWT_SECRET` (required) — at least 32 characters
/// - `JWT_TTL_SECONDS` (optional, default 3600) — token lifetime, also
///   reported to clients as `expires_in`
#[derive(Clone, Debug)]
pub struct JwtConfig {
    /// HS256 signing secret (minimum 32 characters)
    pub secret: String,
    /// Token lifetime in seconds
    pub ttl_seconds: i64,
}

impl JwtConfig {
    /// Manual construction, mainly for tests.
    ///
    /// # Panics
    /// Panics if the secret is shorter than 32 characters.
    pub fn new(secret: impl Into<String>) -> Self {
        let secret = secret.into();
        assert!(
            secret.len() >= 32,
            "JWT secret must be at least 32 characters"
        );
        Self {
            secret,
            ttl_seconds: DEFAULT_TTL_SECONDS,
        }
    }

    pub fn with_ttl(mut self, ttl_seconds: i64) -> Self {
        self.ttl_seconds = ttl_seconds;
        self
    }
}

impl FromEnv for JwtConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let secret = env_required("JWT_SECRET")?;

        if secret.len() < 32 {
            return Err(ConfigError::ParseError {
                key: "JWT_SECRET".to_string(),
                details: format!(
                    "must be at least 32 characters for security (got {}). Generate one with: openssl rand -base64 32",
                    secret.len()
                ),
            });
        }

        let ttl_seconds = env_or_default("JWT_TTL_SECONDS", &DEFAULT_TTL_SECONDS.to_string())
            .parse()
            .map_err(|e| ConfigError::ParseError {
                key: "JWT_TTL_SECONDS".to_string(),
                details: format!("{}", e),
            })?;

        Ok(Self {
            secret,
            ttl_seconds,
        })
    }
}
