//! JWT authentication.
//!
//! Token lifecycle: `issued → active → {revoked | expired}`. Only active
//! tokens pass [`jwt_auth_middleware`]; logout and refresh move a token to
//! the revoked state by placing its `jti` on the [`TokenBlacklist`].

pub mod config;
pub mod jwt;
pub mod middleware;
pub mod store;

pub use config::JwtConfig;
pub use jwt::{JwtAuth, JwtClaims};
pub use middleware::{extract_bearer_token, jwt_auth_middleware};
pub use store::TokenBlacklist;
