use super::jwt::JwtAuth;
use crate::errors::ApiError;
use axum::{
    extract::{Request, State},
    http::HeaderMap,
    middleware::Next,
    response::Response,
};

/// Extract the token from an `Authorization: Bearer <token>` header.
pub fn extract_bearer_token(headers: &HeaderMap) -> Option<String> {
    headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .and_then(|auth| auth.strip_prefix("Bearer ").map(|s| s.to_string()))
}

/// JWT authentication middleware.
///
/// Validates the bearer token (signature, expiry, revocation list) and
/// inserts [`super::JwtClaims`] into the request extensions on success.
/// Any failure answers 401 with the same envelope regardless of cause.
///
/// # Example
///
/// ```ignore
/// use axum_helpers::{JwtAuth, jwt_auth_middleware};
///
/// let protected = Router::new()
///     .route("/products", get(list_products))
///     .route_layer(axum::middleware::from_fn_with_state(
///         jwt_auth.clone(),
///         jwt_auth_middleware,
///     ));
/// ```
pub async fn jwt_auth_middleware(
    State(auth): State<JwtAuth>,
    headers: HeaderMap,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let Some(token) = extract_bearer_token(&headers) else {
        tracing::debug!("No bearer token in Authorization header");
        return Err(unauthorized());
    };

    let claims = match auth.validate(&token).await {
        Ok(claims) => claims,
        Err(e) => {
            tracing::debug!("JWT validation failed: {}", e);
            return Err(unauthorized());
        }
    };

    request.extensions_mut().insert(claims);
    Ok(next.run(request).await)
}

fn unauthorized() -> ApiError {
    ApiError::Unauthorized("Usuário não autenticado ou token inválido.".to_string())
}
