use super::config::JwtConfig;
use super::store::TokenBlacklist;
use chrono::{Duration, Utc};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// JWT claims structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JwtClaims {
    /// Subject (user ID)
    pub sub: String,
    /// Issued at
    pub iat: i64,
    /// Expiration time
    pub exp: i64,
    /// JWT ID, the revocation-list key
    pub jti: String,
}

/// Stateless HS256 tokens combined with an in-memory revocation list.
///
/// `verify` checks signature and expiry only; `validate` additionally
/// consults the revocation list and is what the middleware uses.
#[derive(Clone)]
pub struct JwtAuth {
    secret: String,
    ttl_seconds: i64,
    blacklist: TokenBlacklist,
}

impl JwtAuth {
    pub fn new(config: &JwtConfig) -> Self {
        tracing::info!(ttl_seconds = config.ttl_seconds, "JWT auth initialized");
        Self {
            secret: config.secret.clone(),
            ttl_seconds: config.ttl_seconds,
            blacklist: TokenBlacklist::new(),
        }
    }

    /// Token lifetime, reported to clients as `expires_in`.
    pub fn ttl_seconds(&self) -> i64 {
        self.ttl_seconds
    }

    /// Mint a token for the given subject.
    pub fn issue(&self, subject: &str) -> eyre::Result<String> {
        let now = Utc::now();
        let claims = JwtClaims {
            sub: subject.to_string(),
            iat: now.timestamp(),
            exp: (now + Duration::seconds(self.ttl_seconds)).timestamp(),
            jti: Uuid::new_v4().to_string(),
        };

        let header = Header {
            alg: jsonwebtoken::Algorithm::HS256,
            ..Default::default()
        };

        let token = encode(
            &header,
            &claims,
            &EncodingKey::from_secret(self.secret.as_bytes()),
        )?;

        Ok(token)
    }

    /// Verify signature and expiry, decode claims. Does not consult the
    /// revocation list.
    pub fn verify(&self, token: &str) -> eyre::Result<JwtClaims> {
        let token_data = decode::<JwtClaims>(
            token,
            &DecodingKey::from_secret(self.secret.as_bytes()),
            &Validation::default(),
        )?;

        Ok(token_data.claims)
    }

    /// Full check: signature, expiry and revocation list.
    pub async fn validate(&self, token: &str) -> eyre::Result<JwtClaims> {
        let claims = self.verify(token)?;

        if self.blacklist.contains(&claims.jti).await {
            eyre::bail!("token has been revoked");
        }

        Ok(claims)
    }

    /// Put a token on the revocation list until its natural expiry.
    pub async fn revoke(&self, claims: &JwtClaims) {
        self.blacklist.insert(&claims.jti, claims.exp).await;
        tracing::debug!(jti = %claims.jti, "Token revoked");
    }

    /// Issue a replacement token for the same subject, then revoke the
    /// current one. Refusals (invalid, expired or already revoked input)
    /// happen before any state change.
    pub async fn refresh(&self, token: &str) -> eyre::Result<String> {
        let claims = self.validate(token).await?;
        let new_token = self.issue(&claims.sub)?;
        self.revoke(&claims).await;
        Ok(new_token)
    }
}
