//! Users Domain
//!
//! Registration, login and the token lifecycle around them.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← HTTP endpoints (register/login/logout/refresh/me)
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Service   │  ← Password hashing, credential verification
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │ Repository  │  ← Data access (trait + in-memory implementation)
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use axum_helpers::{JwtAuth, JwtConfig};
//! use domain_users::{AuthService, InMemoryUserRepository, handlers};
//!
//! let service = AuthService::new(InMemoryUserRepository::new());
//! let jwt_auth = JwtAuth::new(&JwtConfig::new("a-secret-of-at-least-32-characters!!"));
//! let router = handlers::router(handlers::AuthState { service, jwt_auth });
//! ```

pub mod error;
pub mod handlers;
pub mod models;
pub mod repository;
pub mod service;

// Re-export commonly used types
pub use error::{AuthError, AuthResult};
pub use handlers::AuthState;
pub use models::{LoginRequest, NewUser, RegisterRequest, User, UserResponse};
pub use repository::{InMemoryUserRepository, UserRepository};
pub use service::AuthService;
