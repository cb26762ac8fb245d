//! # Axum Helpers
//!
//! Shared utilities, middleware and helpers for the API's Axum services.
//!
//! ## Modules
//!
//! - **[`auth`]**: JWT authentication with an in-memory revocation list
//! - **[`errors`]**: the `{success, message, data?}` response envelope
//! - **[`extractors`]**: validated-JSON request extraction
//! - **[`http`]**: CORS and security-header middleware
//! - **[`server`]**: router assembly, health endpoint, graceful shutdown

pub mod auth;
pub mod errors;
pub mod extractors;
pub mod http;
pub mod server;

// Re-export auth types
pub use auth::{
    JwtAuth, JwtClaims, JwtConfig, TokenBlacklist, extract_bearer_token, jwt_auth_middleware,
};

// Re-export error types
pub use errors::{ApiError, ErrorBody, MessageBody, validation_errors_map};

// Re-export extractors
pub use extractors::ValidatedJson;

// Re-export HTTP middleware
pub use http::{create_cors_layer, create_permissive_cors_layer, security_headers};

// Re-export server helpers
pub use server::{HealthResponse, create_app, create_router, health_router, shutdown_signal};
