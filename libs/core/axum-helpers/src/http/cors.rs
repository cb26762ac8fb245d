use axum::http::Method;
use std::time::Duration;
use tower_http::cors::CorsLayer;

/// CORS layer with common settings for API services.
///
/// Allows the given origin, the HTTP methods the API uses, the
/// Content-Type/Authorization/Accept headers and a 1 hour max age.
pub fn create_cors_layer(allowed_origin: axum::http::HeaderValue) -> CorsLayer {
    CorsLayer::new()
        .allow_origin(allowed_origin)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::PATCH,
            Method::OPTIONS,
        ])
        .allow_headers([
            axum::http::header::CONTENT_TYPE,
            axum::http::header::AUTHORIZATION,
            axum::http::header::ACCEPT,
        ])
        .max_age(Duration::from_secs(3600))
}

/// Permissive CORS for development. Do not use in production.
pub fn create_permissive_cors_layer() -> CorsLayer {
    CorsLayer::permissive()
}
