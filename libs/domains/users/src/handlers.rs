//! HTTP handlers for the auth endpoints.

use axum::{
    Extension, Json, Router,
    extract::State,
    http::{HeaderMap, StatusCode},
    middleware,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use axum_helpers::{
    ApiError, ErrorBody, JwtAuth, JwtClaims, MessageBody, ValidatedJson, extract_bearer_token,
    jwt_auth_middleware, validation_errors_map,
};
use utoipa::OpenApi;
use validator::Validate;

use crate::error::AuthError;
use crate::models::{
    LoginRequest, ProfileResponse, RegisterRequest, RegisterResponse, TokenResponse, UserResponse,
};
use crate::repository::UserRepository;
use crate::service::AuthService;

/// Application state for the auth endpoints
pub struct AuthState<R: UserRepository> {
    pub service: AuthService<R>,
    pub jwt_auth: JwtAuth,
}

impl<R: UserRepository> Clone for AuthState<R> {
    fn clone(&self) -> Self {
        Self {
            service: self.service.clone(),
            jwt_auth: self.jwt_auth.clone(),
        }
    }
}

/// OpenAPI documentation for the auth endpoints
#[derive(OpenApi)]
#[openapi(
    paths(register, login, logout, refresh, me),
    components(schemas(
        LoginRequest,
        RegisterRequest,
        TokenResponse,
        RegisterResponse,
        ProfileResponse,
        UserResponse,
        ErrorBody,
        MessageBody
    )),
    tags(
        (name = "Autenticação", description = "Registro, login e ciclo de vida do token")
    )
)]
pub struct ApiDoc;

/// Auth router. `login` and `register` are public; `logout`, `refresh` and
/// `me` require an active bearer token.
pub fn router<R: UserRepository + 'static>(state: AuthState<R>) -> Router {
    let protected = Router::new()
        .route("/logout", post(logout::<R>))
        .route("/refresh", post(refresh::<R>))
        .route("/me", get(me::<R>))
        .route_layer(middleware::from_fn_with_state(
            state.jwt_auth.clone(),
            jwt_auth_middleware,
        ));

    Router::new()
        .route("/login", post(login::<R>))
        .route("/register", post(register::<R>))
        .merge(protected)
        .with_state(state)
}

/// Register a new user and log them in
#[utoipa::path(
    post,
    path = "/register",
    tag = "Autenticação",
    request_body = RegisterRequest,
    responses(
        (status = 201, description = "Usuário registrado com sucesso", body = RegisterResponse),
        (status = 400, description = "Erro de validação", body = ErrorBody),
        (status = 500, description = "Falha ao registrar usuário", body = ErrorBody)
    )
)]
async fn register<R: UserRepository>(
    State(state): State<AuthState<R>>,
    Json(input): Json<RegisterRequest>,
) -> Result<Response, AuthError> {
    // This endpoint answers validation failures with 400 where the rest of
    // the API uses 422; the divergence is part of the published contract
    if let Err(errors) = input.validate() {
        return Ok(ApiError::Validation {
            status: StatusCode::BAD_REQUEST,
            errors: validation_errors_map(&errors),
        }
        .into_response());
    }

    let user = state.service.register(input).await?;

    // The user row already exists if token issuance fails here; the client
    // gets a 500 and the record remains
    let access_token = state
        .jwt_auth
        .issue(&user.id.to_string())
        .map_err(|e| AuthError::Registration(e.to_string()))?;

    let response = RegisterResponse {
        success: true,
        message: "Usuário registrado com sucesso!".to_string(),
        user: user.into(),
        access_token,
        token_type: "bearer".to_string(),
        expires_in: state.jwt_auth.ttl_seconds(),
    };

    Ok((StatusCode::CREATED, Json(response)).into_response())
}

/// Authenticate and issue a bearer token
#[utoipa::path(
    post,
    path = "/login",
    tag = "Autenticação",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login bem-sucedido", body = TokenResponse),
        (status = 401, description = "Credenciais inválidas", body = ErrorBody),
        (status = 422, description = "Erro de validação", body = ErrorBody),
        (status = 500, description = "Erro ao gerar o token", body = ErrorBody)
    )
)]
async fn login<R: UserRepository>(
    State(state): State<AuthState<R>>,
    ValidatedJson(input): ValidatedJson<LoginRequest>,
) -> Result<Json<TokenResponse>, AuthError> {
    let user = state
        .service
        .verify_credentials(&input.email, &input.password)
        .await?;

    let access_token = state
        .jwt_auth
        .issue(&user.id.to_string())
        .map_err(|e| AuthError::Token(e.to_string()))?;

    tracing::info!(user_id = user.id, email = %user.email, "User logged in successfully");
    Ok(Json(TokenResponse::bearer(
        access_token,
        state.jwt_auth.ttl_seconds(),
    )))
}

/// Invalidate the current token
#[utoipa::path(
    post,
    path = "/logout",
    tag = "Autenticação",
    security(("bearerAuth" = [])),
    responses(
        (status = 200, description = "Logout bem-sucedido", body = MessageBody),
        (status = 401, description = "Não autorizado", body = ErrorBody),
        (status = 500, description = "Erro ao invalidar o token", body = ErrorBody)
    )
)]
async fn logout<R: UserRepository>(
    State(state): State<AuthState<R>>,
    headers: HeaderMap,
) -> Result<Json<MessageBody>, AuthError> {
    // Authentication already happened in the middleware; a token that
    // cannot be re-read here means the invalidation step itself failed
    let token = extract_bearer_token(&headers)
        .ok_or_else(|| AuthError::Logout("missing bearer token".to_string()))?;
    let claims = state
        .jwt_auth
        .verify(&token)
        .map_err(|e| AuthError::Logout(e.to_string()))?;

    state.jwt_auth.revoke(&claims).await;

    tracing::info!(user_id = %claims.sub, "User logged out successfully");
    Ok(Json(MessageBody::new("Logout realizado com sucesso.")))
}

/// Rotate the current token: a fresh token is issued for the same subject
/// and the presented one joins the revocation list
#[utoipa::path(
    post,
    path = "/refresh",
    tag = "Autenticação",
    security(("bearerAuth" = [])),
    responses(
        (status = 200, description = "Token atualizado com sucesso", body = TokenResponse),
        (status = 401, description = "Token inválido, expirado ou revogado", body = ErrorBody)
    )
)]
async fn refresh<R: UserRepository>(
    State(state): State<AuthState<R>>,
    headers: HeaderMap,
) -> Result<Json<TokenResponse>, AuthError> {
    // The middleware validated the token; rotation still needs the raw string
    let token = extract_bearer_token(&headers)
        .ok_or_else(|| AuthError::Refresh("missing bearer token".to_string()))?;

    let access_token = state
        .jwt_auth
        .refresh(&token)
        .await
        .map_err(|e| AuthError::Refresh(e.to_string()))?;

    tracing::info!("Token refreshed successfully");
    Ok(Json(TokenResponse::bearer(
        access_token,
        state.jwt_auth.ttl_seconds(),
    )))
}

/// Return the authenticated user's profile
#[utoipa::path(
    get,
    path = "/me",
    tag = "Autenticação",
    security(("bearerAuth" = [])),
    responses(
        (status = 200, description = "Perfil do usuário autenticado", body = ProfileResponse),
        (status = 401, description = "Não autorizado", body = ErrorBody)
    )
)]
async fn me<R: UserRepository>(
    State(state): State<AuthState<R>>,
    Extension(claims): Extension<JwtClaims>,
) -> Result<Json<ProfileResponse>, AuthError> {
    let user_id: i64 = claims.sub.parse().map_err(|_| AuthError::Unauthorized)?;

    let user = state
        .service
        .get_user(user_id)
        .await?
        .ok_or(AuthError::Unauthorized)?;

    tracing::debug!(user_id = user.id, "Fetched authenticated user profile");
    Ok(Json(ProfileResponse {
        success: true,
        data: user.into(),
    }))
}
