use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum_helpers::ApiError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("User with email '{0}' already exists")]
    DuplicateEmail(String),

    #[error("Unauthorized")]
    Unauthorized,

    #[error("Token issuance failed: {0}")]
    Token(String),

    #[error("Registration failed: {0}")]
    Registration(String),

    #[error("Logout failed: {0}")]
    Logout(String),

    #[error("Token refresh failed: {0}")]
    Refresh(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type AuthResult<T> = Result<T, AuthError>;

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::InvalidCredentials => {
                ApiError::Unauthorized("Credenciais inválidas.".to_string())
            }
            // A taken e-mail surfaces as a field validation failure on the
            // register endpoint (400)
            AuthError::DuplicateEmail(email) => {
                tracing::warn!(email = %email, "Registration rejected: e-mail already taken");
                ApiError::Validation {
                    status: StatusCode::BAD_REQUEST,
                    errors: serde_json::json!({
                        "email": ["O e-mail informado já está em uso."]
                    }),
                }
            }
            AuthError::Unauthorized => {
                ApiError::Unauthorized("Usuário não autenticado ou token inválido.".to_string())
            }
            AuthError::Token(msg) => {
                tracing::error!("Login error: could not create token: {}", msg);
                ApiError::Internal("Não foi possível gerar o token de acesso.".to_string())
            }
            AuthError::Registration(msg) => {
                tracing::error!("User registration failed: {}", msg);
                ApiError::Internal("Falha ao registrar usuário.".to_string())
            }
            AuthError::Logout(msg) => {
                tracing::error!("Logout failed: {}", msg);
                ApiError::Internal("Falha ao fazer logout, por favor tente novamente.".to_string())
            }
            AuthError::Refresh(msg) => {
                tracing::warn!("Failed to refresh token: {}", msg);
                ApiError::Unauthorized(
                    "Não foi possível atualizar o token, por favor faça login novamente."
                        .to_string(),
                )
            }
            AuthError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                ApiError::Internal("Erro interno no servidor.".to_string())
            }
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let api_error: ApiError = self.into();
        api_error.into_response()
    }
}
