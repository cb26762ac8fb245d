use axum::Router;

pub mod auth;
pub mod products;

/// Creates the API routes without the `/api` prefix.
/// The prefix is added by the `create_router` helper.
pub fn routes(state: &crate::state::AppState) -> Router {
    Router::new()
        .nest("/auth", auth::router(state))
        .nest("/products", products::router(state))
}
