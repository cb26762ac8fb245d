use axum::Router;
use domain_users::handlers::{self, AuthState};

/// Auth routes at /api/auth
pub fn router(state: &crate::state::AppState) -> Router {
    handlers::router(AuthState {
        service: state.auth_service.clone(),
        jwt_auth: state.jwt_auth.clone(),
    })
}
