use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum_helpers::ApiError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProductError {
    /// The service-level business rule, checked before any persistence call
    #[error("Product price must be positive.")]
    PriceNotPositive,

    /// `category_id` references no existing category
    #[error("Category not found: {0}")]
    CategoryNotFound(i64),

    #[error("Storage error: {0}")]
    Storage(String),
}

pub type ProductResult<T> = Result<T, ProductError>;

impl ProductError {
    /// Map to the envelope, using `fallback` as the client-facing message
    /// for infrastructure failures (each endpoint has its own).
    pub fn into_api(self, fallback: &str) -> ApiError {
        match self {
            ProductError::Storage(msg) => {
                tracing::error!("Storage error: {}", msg);
                ApiError::Internal(fallback.to_string())
            }
            other => other.into(),
        }
    }
}

impl From<ProductError> for ApiError {
    fn from(err: ProductError) -> Self {
        match err {
            ProductError::PriceNotPositive => {
                ApiError::BadRequest("Product price must be positive.".to_string())
            }
            // Surfaced in the same field-error shape the request validation
            // produces
            ProductError::CategoryNotFound(id) => {
                tracing::warn!(category_id = id, "Category referenced by request does not exist");
                ApiError::Validation {
                    status: StatusCode::UNPROCESSABLE_ENTITY,
                    errors: serde_json::json!({
                        "category_id": ["A categoria selecionada não existe."]
                    }),
                }
            }
            ProductError::Storage(msg) => {
                tracing::error!("Storage error: {}", msg);
                ApiError::Internal("Erro interno no servidor.".to_string())
            }
        }
    }
}

impl IntoResponse for ProductError {
    fn into_response(self) -> Response {
        let api_error: ApiError = self.into();
        api_error.into_response()
    }
}
