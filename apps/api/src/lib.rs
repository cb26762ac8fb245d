//! Catalog API application wiring, exposed as a library so integration
//! tests can build the full router.

pub mod api;
pub mod config;
pub mod openapi;
pub mod state;

use axum::Router;
use axum_helpers::health_router;

/// Build the complete application: documented API routes under `/api` plus
/// the health endpoint. Development gets permissive CORS; in production the
/// API is expected to sit behind a gateway that owns the policy.
pub async fn build_app(state: &state::AppState) -> std::io::Result<Router> {
    let api_routes = api::routes(state);
    let router = axum_helpers::create_router::<openapi::ApiDoc>(api_routes).await?;
    let router = router.merge(health_router(state.config.app.clone()));

    if state.config.environment.is_development() {
        Ok(router.layer(axum_helpers::create_permissive_cors_layer()))
    } else {
        Ok(router)
    }
}
