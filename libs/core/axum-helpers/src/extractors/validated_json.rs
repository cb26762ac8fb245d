//! JSON extractor with automatic validation using the validator crate.

use crate::errors::{ApiError, validation_errors_map};
use axum::{
    extract::{FromRequest, Json, Request},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::de::DeserializeOwned;
use validator::Validate;

/// JSON extractor with eager validation.
///
/// Deserializes the body, runs every `Validate` rule on it and rejects with
/// a 422 envelope carrying the field → messages map. Endpoints that answer
/// validation failures with 400 instead (register) validate in the handler.
///
/// # Example
/// ```ignore
/// use axum_helpers::ValidatedJson;
/// use serde::Deserialize;
/// use validator::Validate;
///
/// #[derive(Deserialize, Validate)]
/// struct LoginRequest {
///     #[validate(email)]
///     email: String,
///     #[validate(length(min = 6))]
///     password: String,
/// }
///
/// async fn login(ValidatedJson(input): ValidatedJson<LoginRequest>) { /* ... */ }
/// ```
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(data) = Json::<T>::from_request(req, state).await.map_err(|e| {
            // Malformed JSON and missing required fields surface from serde;
            // keep the envelope shape with the deserializer's message.
            ApiError::Validation {
                status: StatusCode::UNPROCESSABLE_ENTITY,
                errors: serde_json::json!({ "body": [e.body_text()] }),
            }
            .into_response()
        })?;

        data.validate().map_err(|e| {
            ApiError::Validation {
                status: StatusCode::UNPROCESSABLE_ENTITY,
                errors: validation_errors_map(&e),
            }
            .into_response()
        })?;

        Ok(ValidatedJson(data))
    }
}
