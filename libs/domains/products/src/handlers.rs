//! HTTP handlers for the products API.

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use axum_helpers::{ApiError, ErrorBody, MessageBody, ValidatedJson};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::ProductError;
use crate::models::{
    Category, CreateProduct, Product, ProductEnvelope, ProductsEnvelope, SearchQuery,
    UpdateProduct,
};
use crate::repository::ProductRepository;
use crate::service::ProductService;

/// OpenAPI documentation for the products endpoints
#[derive(OpenApi)]
#[openapi(
    paths(
        list_products,
        create_product,
        search_products,
        get_product,
        update_product,
        delete_product,
    ),
    components(
        schemas(
            Product,
            Category,
            CreateProduct,
            UpdateProduct,
            ProductEnvelope,
            ProductsEnvelope,
            ErrorBody,
            MessageBody
        )
    ),
    tags(
        (name = "Produtos", description = "Gerenciamento de produtos")
    )
)]
pub struct ApiDoc;

/// Products router. Authentication is layered on by the application.
pub fn router<R: ProductRepository + 'static>(service: ProductService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/", get(list_products::<R>).post(create_product::<R>))
        .route("/search", get(search_products::<R>))
        .route(
            "/{id}",
            get(get_product::<R>)
                .put(update_product::<R>)
                .patch(update_product::<R>)
                .delete(delete_product::<R>),
        )
        .with_state(shared_service)
}

/// List all products
#[utoipa::path(
    get,
    path = "",
    tag = "Produtos",
    security(("bearerAuth" = [])),
    responses(
        (status = 200, description = "Lista de produtos", body = ProductsEnvelope),
        (status = 401, description = "Não autorizado", body = ErrorBody),
        (status = 500, description = "Erro ao buscar produtos", body = ErrorBody)
    )
)]
async fn list_products<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
) -> Result<Json<ProductsEnvelope>, ApiError> {
    let products = service
        .list()
        .await
        .map_err(|e| e.into_api("Erro ao buscar produtos."))?;

    Ok(Json(ProductsEnvelope {
        success: true,
        data: products,
    }))
}

/// Create a new product
#[utoipa::path(
    post,
    path = "",
    tag = "Produtos",
    security(("bearerAuth" = [])),
    request_body = CreateProduct,
    responses(
        (status = 201, description = "Produto criado com sucesso", body = ProductEnvelope),
        (status = 400, description = "Violação de regra de negócio", body = ErrorBody),
        (status = 401, description = "Não autorizado", body = ErrorBody),
        (status = 422, description = "Erro de validação", body = ErrorBody)
    )
)]
async fn create_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    ValidatedJson(input): ValidatedJson<CreateProduct>,
) -> Result<impl IntoResponse, ApiError> {
    let product = service.create(input).await.map_err(|e| match e {
        // The create endpoint reports infrastructure failures as 400, as
        // the published contract does
        ProductError::Storage(msg) => {
            tracing::error!("Error creating product: {}", msg);
            ApiError::BadRequest("Erro ao criar produto.".to_string())
        }
        other => other.into(),
    })?;

    Ok((
        StatusCode::CREATED,
        Json(ProductEnvelope::with_message(
            "Produto criado com sucesso.",
            product,
        )),
    ))
}

/// Find a product by exact name (case-insensitive)
#[utoipa::path(
    get,
    path = "/search",
    tag = "Produtos",
    security(("bearerAuth" = [])),
    params(SearchQuery),
    responses(
        (status = 200, description = "Produto encontrado", body = ProductEnvelope),
        (status = 400, description = "Parâmetro 'name' ausente", body = ErrorBody),
        (status = 401, description = "Não autorizado", body = ErrorBody),
        (status = 404, description = "Produto não encontrado", body = ErrorBody),
        (status = 500, description = "Erro ao buscar produto", body = ErrorBody)
    )
)]
async fn search_products<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    Query(query): Query<SearchQuery>,
) -> Result<Json<ProductEnvelope>, ApiError> {
    let Some(name) = query.name.filter(|name| !name.is_empty()) else {
        return Err(ApiError::BadRequest(
            "Parâmetro 'name' é obrigatório.".to_string(),
        ));
    };

    let product = service
        .get_by_name(&name)
        .await
        .map_err(|e| e.into_api("Erro ao buscar produto pelo nome."))?
        .ok_or_else(|| ApiError::NotFound("Produto não encontrado.".to_string()))?;

    Ok(Json(ProductEnvelope::data(product)))
}

/// Get a product by ID
#[utoipa::path(
    get,
    path = "/{id}",
    tag = "Produtos",
    security(("bearerAuth" = [])),
    params(
        ("id" = i64, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Produto encontrado", body = ProductEnvelope),
        (status = 401, description = "Não autorizado", body = ErrorBody),
        (status = 404, description = "Produto não encontrado", body = ErrorBody),
        (status = 500, description = "Erro ao buscar produto", body = ErrorBody)
    )
)]
async fn get_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    Path(id): Path<i64>,
) -> Result<Json<ProductEnvelope>, ApiError> {
    let product = service
        .get_by_id(id)
        .await
        .map_err(|e| e.into_api("Erro ao buscar produto."))?
        .ok_or_else(|| ApiError::NotFound("Produto não encontrado.".to_string()))?;

    Ok(Json(ProductEnvelope::data(product)))
}

/// Partially update a product
#[utoipa::path(
    put,
    path = "/{id}",
    tag = "Produtos",
    security(("bearerAuth" = [])),
    params(
        ("id" = i64, Path, description = "Product ID")
    ),
    request_body = UpdateProduct,
    responses(
        (status = 200, description = "Produto atualizado com sucesso", body = ProductEnvelope),
        (status = 400, description = "Payload vazio ou violação de regra de negócio", body = ErrorBody),
        (status = 401, description = "Não autorizado", body = ErrorBody),
        (status = 404, description = "Produto não encontrado", body = ErrorBody),
        (status = 422, description = "Erro de validação", body = ErrorBody)
    )
)]
async fn update_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    Path(id): Path<i64>,
    ValidatedJson(input): ValidatedJson<UpdateProduct>,
) -> Result<Json<ProductEnvelope>, ApiError> {
    if input.is_empty() {
        return Err(ApiError::BadRequest(
            "Nenhum dado fornecido para atualização.".to_string(),
        ));
    }

    let updated = service.update(id, input).await.map_err(|e| match e {
        ProductError::Storage(msg) => {
            tracing::error!("Error updating product: {}", msg);
            ApiError::BadRequest("Erro ao atualizar produto.".to_string())
        }
        other => other.into(),
    })?;

    let product = updated.ok_or_else(|| {
        ApiError::NotFound("Produto não encontrado para atualização.".to_string())
    })?;

    Ok(Json(ProductEnvelope::with_message(
        "Produto atualizado com sucesso.",
        product,
    )))
}

/// Delete a product
#[utoipa::path(
    delete,
    path = "/{id}",
    tag = "Produtos",
    security(("bearerAuth" = [])),
    params(
        ("id" = i64, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Produto excluído com sucesso", body = MessageBody),
        (status = 401, description = "Não autorizado", body = ErrorBody),
        (status = 404, description = "Produto não encontrado", body = ErrorBody),
        (status = 500, description = "Erro ao excluir produto", body = ErrorBody)
    )
)]
async fn delete_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    Path(id): Path<i64>,
) -> Result<Json<MessageBody>, ApiError> {
    let deleted = service
        .delete(id)
        .await
        .map_err(|e| e.into_api("Erro ao excluir produto."))?;

    if !deleted {
        return Err(ApiError::NotFound(
            "Produto não encontrado ou não pôde ser excluído.".to_string(),
        ));
    }

    Ok(Json(MessageBody::new("Produto excluído com sucesso.")))
}
