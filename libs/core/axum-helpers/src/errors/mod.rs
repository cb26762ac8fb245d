pub mod handlers;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;
use utoipa::ToSchema;
use validator::ValidationErrors;

/// Envelope returned by every failing endpoint.
///
/// `data` carries the field → ordered-messages map for validation failures
/// and is omitted otherwise.
///
/// # JSON Example
///
/// ```json
/// {
///   "success": false,
///   "message": "Validation errors",
///   "data": { "price": ["O preço deve ser maior que zero."] }
/// }
/// ```
#[derive(Serialize, ToSchema)]
pub struct ErrorBody {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
}

/// Envelope for endpoints that answer with a confirmation message only
/// (logout, product delete).
#[derive(Serialize, ToSchema)]
pub struct MessageBody {
    pub success: bool,
    pub message: String,
}

impl MessageBody {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }
}

/// Application error type rendered as the API's error envelope.
///
/// Domain error enums convert into this at the HTTP boundary; the status
/// code of a `Validation` error is carried explicitly because the endpoints
/// disagree on it (422 on login and the product endpoints, 400 on register).
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Bad Request: {0}")]
    BadRequest(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Not Found: {0}")]
    NotFound(String),

    #[error("Request validation failed")]
    Validation {
        status: StatusCode,
        errors: serde_json::Value,
    },

    #[error("Internal Server Error: {0}")]
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message, data) = match self {
            ApiError::BadRequest(msg) => {
                tracing::info!("Bad request: {}", msg);
                (StatusCode::BAD_REQUEST, msg, None)
            }
            ApiError::Unauthorized(msg) => {
                tracing::info!("Unauthorized: {}", msg);
                (StatusCode::UNAUTHORIZED, msg, None)
            }
            ApiError::NotFound(msg) => {
                tracing::info!("Not found: {}", msg);
                (StatusCode::NOT_FOUND, msg, None)
            }
            ApiError::Validation { status, errors } => {
                tracing::info!(errors = %errors, "Request validation failed");
                (status, "Validation errors".to_string(), Some(errors))
            }
            ApiError::Internal(msg) => {
                tracing::error!("Internal server error: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, msg, None)
            }
        };

        let body = Json(ErrorBody {
            success: false,
            message,
            data,
        });

        (status, body).into_response()
    }
}

/// Flatten `validator` output into the field → ordered-messages map the API
/// contract exposes. Falls back to the constraint code when a rule carries
/// no message.
pub fn validation_errors_map(errors: &ValidationErrors) -> serde_json::Value {
    let fields = errors
        .field_errors()
        .iter()
        .map(|(field, errors)| {
            let messages: Vec<serde_json::Value> = errors
                .iter()
                .map(|err| match &err.message {
                    Some(message) => serde_json::json!(message),
                    None => serde_json::json!(err.code),
                })
                .collect();
            (field.to_string(), serde_json::json!(messages))
        })
        .collect::<serde_json::Map<_, _>>();

    serde_json::Value::Object(fields)
}
