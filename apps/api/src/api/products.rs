use axum::{Router, middleware};
use axum_helpers::jwt_auth_middleware;
use domain_products::handlers;

/// Product routes at /api/products, all behind bearer authentication
pub fn router(state: &crate::state::AppState) -> Router {
    handlers::router(state.product_service.clone()).route_layer(middleware::from_fn_with_state(
        state.jwt_auth.clone(),
        jwt_auth_middleware,
    ))
}
