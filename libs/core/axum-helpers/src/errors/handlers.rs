use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use super::ErrorBody;

/// Fallback handler for routes that match nothing.
pub async fn not_found() -> Response {
    let body = Json(ErrorBody {
        success: false,
        message: "Recurso não encontrado.".to_string(),
        data: None,
    });

    (StatusCode::NOT_FOUND, body).into_response()
}
