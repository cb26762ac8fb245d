//! End-to-end tests against the fully assembled application router:
//! `/api` prefix, auth middleware on the product routes, the health
//! endpoint and the JSON 404 fallback.

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum_helpers::JwtConfig;
use catalog_api::config::{Config, Environment};
use catalog_api::state::AppState;
use core_config::{app_info, server::ServerConfig};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt; // for oneshot()

async fn app() -> Router {
    let config = Config {
        app: app_info!(),
        server: ServerConfig::default(),
        jwt: JwtConfig::new("end-to-end-test-secret-of-32-chars!!"),
        environment: Environment::Development,
    };

    let state = AppState::new(config);
    state.seed_categories().await;
    catalog_api::build_app(&state).await.unwrap()
}

async fn json_body(body: Body) -> Value {
    let bytes = body.collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_string(&body).unwrap()))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

fn authed(mut request: Request<Body>, token: &str) -> Request<Body> {
    request.headers_mut().insert(
        "authorization",
        format!("Bearer {}", token).parse().unwrap(),
    );
    request
}

async fn register(app: &Router, email: &str) -> String {
    let response = app
        .clone()
        .oneshot(post_json(
            "/api/auth/register",
            json!({
                "name": "Test User",
                "email": email,
                "password": "password123",
                "password_confirmation": "password123"
            }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let body = json_body(response.into_body()).await;
    body["access_token"].as_str().unwrap().to_string()
}

// Scenario A: successful registration
#[tokio::test]
async fn register_returns_201_with_user_and_bearer_token() {
    let app = app().await;

    let response = app
        .oneshot(post_json(
            "/api/auth/register",
            json!({
                "name": "Test User",
                "email": "register@example.com",
                "password": "password123",
                "password_confirmation": "password123"
            }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);

    let body = json_body(response.into_body()).await;
    assert_eq!(body["success"], json!(true));
    assert_eq!(body["user"]["email"], "register@example.com");
    assert_eq!(body["token_type"], "bearer");
    assert!(body["user"].get("password").is_none());
}

// Scenario B: login with the wrong password
#[tokio::test]
async fn login_with_wrong_password_is_401_with_the_fixed_message() {
    let app = app().await;
    register(&app, "scenario-b@example.com").await;

    let response = app
        .oneshot(post_json(
            "/api/auth/login",
            json!({"email": "scenario-b@example.com", "password": "wrongpassword"}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let body = json_body(response.into_body()).await;
    assert_eq!(body["success"], json!(false));
    assert_eq!(body["message"], "Credenciais inválidas.");
}

// Scenario C: create a product, then read it back by id
#[tokio::test]
async fn create_product_then_get_by_id_round_trips() {
    let app = app().await;
    let token = register(&app, "scenario-c@example.com").await;

    let response = app
        .clone()
        .oneshot(authed(
            post_json(
                "/api/products",
                json!({"name": "Test", "price": 10, "category_id": 1}),
            ),
            &token,
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let created = json_body(response.into_body()).await;
    let id = created["data"]["id"].as_i64().unwrap();

    let response = app
        .oneshot(authed(get(&format!("/api/products/{}", id)), &token))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = json_body(response.into_body()).await;
    assert_eq!(body["data"]["name"], "Test");
    assert_eq!(body["data"]["price"].as_f64(), Some(10.0));
    assert_eq!(body["data"]["category_id"], json!(1));
}

// Scenario D: search without the name parameter
#[tokio::test]
async fn search_without_name_parameter_is_400_with_the_fixed_message() {
    let app = app().await;
    let token = register(&app, "scenario-d@example.com").await;

    let response = app
        .oneshot(authed(get("/api/products/search"), &token))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = json_body(response.into_body()).await;
    assert_eq!(body["success"], json!(false));
    assert_eq!(body["message"], "Parâmetro 'name' é obrigatório.");
}

// Scenario E: refresh issues a different token
#[tokio::test]
async fn refresh_issues_a_token_different_from_the_original() {
    let app = app().await;
    let token = register(&app, "scenario-e@example.com").await;

    let response = app
        .oneshot(authed(
            Request::builder()
                .method("POST")
                .uri("/api/auth/refresh")
                .body(Body::empty())
                .unwrap(),
            &token,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = json_body(response.into_body()).await;
    assert_eq!(body["success"], json!(true));
    let new_token = body["access_token"].as_str().unwrap();
    assert_ne!(new_token, token);
}

#[tokio::test]
async fn product_routes_reject_requests_without_a_token() {
    let app = app().await;

    let response = app.oneshot(get("/api/products")).await.unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let body = json_body(response.into_body()).await;
    assert_eq!(body["success"], json!(false));
    assert_eq!(body["message"], "Usuário não autenticado ou token inválido.");
}

#[tokio::test]
async fn a_logged_out_token_no_longer_opens_product_routes() {
    let app = app().await;
    let token = register(&app, "logout-e2e@example.com").await;

    let response = app
        .clone()
        .oneshot(authed(
            Request::builder()
                .method("POST")
                .uri("/api/auth/logout")
                .body(Body::empty())
                .unwrap(),
            &token,
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app
        .oneshot(authed(get("/api/products"), &token))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn full_product_lifecycle_under_authentication() {
    let app = app().await;
    let token = register(&app, "lifecycle@example.com").await;

    // Create
    let response = app
        .clone()
        .oneshot(authed(
            post_json(
                "/api/products",
                json!({
                    "name": "Smartphone XYZ",
                    "description": "Tela OLED",
                    "price": 2999.90,
                    "category_id": 1
                }),
            ),
            &token,
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let created = json_body(response.into_body()).await;
    let id = created["data"]["id"].as_i64().unwrap();

    // Search by name, case-insensitively
    let response = app
        .clone()
        .oneshot(authed(get("/api/products/search?name=smartphone%20xyz"), &token))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    // Partial update
    let response = app
        .clone()
        .oneshot(authed(
            Request::builder()
                .method("PUT")
                .uri(format!("/api/products/{}", id))
                .header("content-type", "application/json")
                .body(Body::from(
                    serde_json::to_string(&json!({"price": 2499.00})).unwrap(),
                ))
                .unwrap(),
            &token,
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let updated = json_body(response.into_body()).await;
    assert_eq!(updated["data"]["name"], "Smartphone XYZ");
    assert_eq!(updated["data"]["price"].as_f64(), Some(2499.0));

    // Delete, then the id is gone
    let response = app
        .clone()
        .oneshot(authed(
            Request::builder()
                .method("DELETE")
                .uri(format!("/api/products/{}", id))
                .body(Body::empty())
                .unwrap(),
            &token,
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app
        .oneshot(authed(get(&format!("/api/products/{}", id)), &token))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn health_endpoint_reports_name_and_version() {
    let app = app().await;

    let response = app.oneshot(get("/health")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = json_body(response.into_body()).await;
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["name"], "catalog-api");
}

#[tokio::test]
async fn unknown_routes_fall_back_to_a_json_404() {
    let app = app().await;

    let response = app.oneshot(get("/nope")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body = json_body(response.into_body()).await;
    assert_eq!(body["success"], json!(false));
}
