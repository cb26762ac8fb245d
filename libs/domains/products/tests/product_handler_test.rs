//! Handler tests for the products endpoints.
//!
//! These exercise the products router directly (no auth middleware):
//! request validation, the response envelope, not-found handling and the
//! price business rule.

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use domain_products::repository::InMemoryProductRepository;
use domain_products::{handlers, ProductService};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt; // for oneshot()

async fn app() -> Router {
    let repo = InMemoryProductRepository::new();
    repo.seed_category("Eletrônicos").await;
    handlers::router(ProductService::new(repo))
}

async fn json_body(body: Body) -> Value {
    let bytes = body.collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn request_json(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
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

async fn create_product(app: &Router, body: Value) -> Value {
    let response = app
        .clone()
        .oneshot(request_json("POST", "/", body))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    json_body(response.into_body()).await
}

#[tokio::test]
async fn create_then_get_round_trips() {
    let app = app().await;

    let created = create_product(
        &app,
        json!({"name": "Test", "price": 10, "category_id": 1}),
    )
    .await;
    assert_eq!(created["success"], json!(true));
    assert_eq!(created["message"], "Produto criado com sucesso.");

    let id = created["data"]["id"].as_i64().unwrap();

    let response = app.oneshot(get(&format!("/{}", id))).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = json_body(response.into_body()).await;
    assert_eq!(body["data"]["name"], "Test");
    assert_eq!(body["data"]["price"].as_f64(), Some(10.0));
    assert_eq!(body["data"]["category_id"], json!(1));
    assert_eq!(body["data"]["category"]["name"], "Eletrônicos");
}

#[tokio::test]
async fn list_returns_all_products_in_order() {
    let app = app().await;
    create_product(&app, json!({"name": "A", "price": 1, "category_id": 1})).await;
    create_product(&app, json!({"name": "B", "price": 2, "category_id": 1})).await;

    let response = app.oneshot(get("/")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = json_body(response.into_body()).await;
    assert_eq!(body["success"], json!(true));
    let names: Vec<&str> = body["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["A", "B"]);
}

#[tokio::test]
async fn get_of_unknown_id_is_404() {
    let app = app().await;

    let response = app.oneshot(get("/42")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body = json_body(response.into_body()).await;
    assert_eq!(body["success"], json!(false));
    assert_eq!(body["message"], "Produto não encontrado.");
}

#[tokio::test]
async fn create_with_non_positive_price_is_rejected_by_validation() {
    let app = app().await;

    for price in [json!(0), json!(-5.00)] {
        let response = app
            .clone()
            .oneshot(request_json(
                "POST",
                "/",
                json!({"name": "Test", "price": price, "category_id": 1}),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

        let body = json_body(response.into_body()).await;
        assert_eq!(body["message"], "Validation errors");
        assert_eq!(body["data"]["price"][0], "O preço deve ser maior que zero.");
    }

    // Nothing was stored by the rejected calls
    let response = app.oneshot(get("/")).await.unwrap();
    let body = json_body(response.into_body()).await;
    assert_eq!(body["data"].as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn create_with_unknown_category_reports_the_field() {
    let app = app().await;

    let response = app
        .oneshot(request_json(
            "POST",
            "/",
            json!({"name": "Test", "price": 10, "category_id": 99}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let body = json_body(response.into_body()).await;
    assert_eq!(
        body["data"]["category_id"][0],
        "A categoria selecionada não existe."
    );
}

#[tokio::test]
async fn search_finds_by_name_case_insensitively() {
    let app = app().await;
    create_product(
        &app,
        json!({"name": "Smartphone XYZ", "price": 2999.90, "category_id": 1}),
    )
    .await;

    let response = app
        .oneshot(get("/search?name=smartphone%20xyz"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = json_body(response.into_body()).await;
    assert_eq!(body["data"]["name"], "Smartphone XYZ");
}

#[tokio::test]
async fn search_without_name_parameter_is_400() {
    let app = app().await;

    let response = app.oneshot(get("/search")).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = json_body(response.into_body()).await;
    assert_eq!(body["success"], json!(false));
    assert_eq!(body["message"], "Parâmetro 'name' é obrigatório.");
}

#[tokio::test]
async fn search_with_unknown_name_is_404() {
    let app = app().await;

    let response = app.oneshot(get("/search?name=nothing")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn update_changes_only_the_supplied_fields() {
    let app = app().await;
    let created = create_product(
        &app,
        json!({
            "name": "Original",
            "description": "Descrição original",
            "price": 10,
            "category_id": 1
        }),
    )
    .await;
    let id = created["data"]["id"].as_i64().unwrap();

    let response = app
        .clone()
        .oneshot(request_json(
            "PUT",
            &format!("/{}", id),
            json!({"price": 25.50}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = json_body(response.into_body()).await;
    assert_eq!(body["message"], "Produto atualizado com sucesso.");
    assert_eq!(body["data"]["price"].as_f64(), Some(25.5));
    assert_eq!(body["data"]["name"], "Original");
    assert_eq!(body["data"]["description"], "Descrição original");
}

#[tokio::test]
async fn patch_works_like_put() {
    let app = app().await;
    let created =
        create_product(&app, json!({"name": "Patchable", "price": 10, "category_id": 1})).await;
    let id = created["data"]["id"].as_i64().unwrap();

    let response = app
        .oneshot(request_json(
            "PATCH",
            &format!("/{}", id),
            json!({"name": "Patched"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = json_body(response.into_body()).await;
    assert_eq!(body["data"]["name"], "Patched");
}

#[tokio::test]
async fn update_with_empty_payload_is_400() {
    let app = app().await;
    let created =
        create_product(&app, json!({"name": "Test", "price": 10, "category_id": 1})).await;
    let id = created["data"]["id"].as_i64().unwrap();

    let response = app
        .oneshot(request_json("PUT", &format!("/{}", id), json!({})))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = json_body(response.into_body()).await;
    assert_eq!(body["message"], "Nenhum dado fornecido para atualização.");
}

#[tokio::test]
async fn update_of_unknown_id_is_404() {
    let app = app().await;

    let response = app
        .oneshot(request_json("PUT", "/42", json!({"name": "Ghost"})))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body = json_body(response.into_body()).await;
    assert_eq!(body["message"], "Produto não encontrado para atualização.");
}

#[tokio::test]
async fn update_with_non_positive_price_leaves_the_row_unchanged() {
    let app = app().await;
    let created =
        create_product(&app, json!({"name": "Test", "price": 10, "category_id": 1})).await;
    let id = created["data"]["id"].as_i64().unwrap();

    let response = app
        .clone()
        .oneshot(request_json(
            "PUT",
            &format!("/{}", id),
            json!({"price": -5.00}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let current = app.oneshot(get(&format!("/{}", id))).await.unwrap();
    let body = json_body(current.into_body()).await;
    assert_eq!(body["data"]["price"].as_f64(), Some(10.0));
}

#[tokio::test]
async fn delete_removes_the_product() {
    let app = app().await;
    let created =
        create_product(&app, json!({"name": "Doomed", "price": 10, "category_id": 1})).await;
    let id = created["data"]["id"].as_i64().unwrap();

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri(format!("/{}", id))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = json_body(response.into_body()).await;
    assert_eq!(body["message"], "Produto excluído com sucesso.");

    let gone = app.oneshot(get(&format!("/{}", id))).await.unwrap();
    assert_eq!(gone.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn delete_of_unknown_id_is_404_and_leaves_other_rows() {
    let app = app().await;
    let created =
        create_product(&app, json!({"name": "Kept", "price": 10, "category_id": 1})).await;
    let id = created["data"]["id"].as_i64().unwrap();

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri("/999")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body = json_body(response.into_body()).await;
    assert_eq!(
        body["message"],
        "Produto não encontrado ou não pôde ser excluído."
    );

    let kept = app.oneshot(get(&format!("/{}", id))).await.unwrap();
    assert_eq!(kept.status(), StatusCode::OK);
}
