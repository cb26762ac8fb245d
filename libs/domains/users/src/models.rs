use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// User entity
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct User {
    /// Unique identifier, assigned by the store
    pub id: i64,
    /// Display name
    pub name: String,
    /// E-mail address (unique, case-insensitive)
    pub email: String,
    /// Argon2 password hash (never exposed in API responses)
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Fields for persisting a new user; the store assigns id and timestamps
#[derive(Debug, Clone)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password_hash: String,
}

/// User representation returned by the API
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UserResponse {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

/// DTO for user registration
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct RegisterRequest {
    #[validate(length(
        min = 2,
        max = 100,
        message = "O nome deve ter entre 2 e 100 caracteres."
    ))]
    pub name: String,
    #[validate(
        email(message = "O e-mail informado não é válido."),
        length(max = 100, message = "O e-mail não pode exceder 100 caracteres.")
    )]
    pub email: String,
    #[validate(length(min = 6, message = "A senha deve ter no mínimo 6 caracteres."))]
    pub password: String,
    #[validate(must_match(
        other = password,
        message = "A confirmação de senha não confere."
    ))]
    pub password_confirmation: String,
}

/// DTO for user login. Only the shape is validated here; the credentials
/// themselves are checked by the service.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct LoginRequest {
    #[validate(email(message = "O e-mail informado não é válido."))]
    pub email: String,
    #[validate(length(min = 6, message = "A senha deve ter no mínimo 6 caracteres."))]
    pub password: String,
}

/// Body returned whenever a token is issued (login, refresh)
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TokenResponse {
    pub success: bool,
    pub access_token: String,
    pub token_type: String,
    /// Token lifetime in seconds
    pub expires_in: i64,
}

impl TokenResponse {
    pub fn bearer(access_token: String, expires_in: i64) -> Self {
        Self {
            success: true,
            access_token,
            token_type: "bearer".to_string(),
            expires_in,
        }
    }
}

/// Body returned by a successful registration
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct RegisterResponse {
    pub success: bool,
    pub message: String,
    pub user: UserResponse,
    pub access_token: String,
    pub token_type: String,
    pub expires_in: i64,
}

/// Body returned by `/auth/me`
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ProfileResponse {
    pub success: bool,
    pub data: UserResponse,
}
