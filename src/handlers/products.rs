// src/handlers/products.rs

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use validator::Validate;

use crate::{
    common::{error::AppError, validation::validate_batch},
    config::AppState,
    models::product::{CreateProductPayload, Product},
};

// POST /products/
#[utoipa::path(
    post,
    path = "/products/",
    tag = "Products",
    request_body = CreateProductPayload,
    responses(
        (status = 201, description = "Produto criado", body = Product),
        (status = 400, description = "Fornecedor inexistente"),
        (status = 422, description = "Dados inválidos"),
        (status = 500, description = "Erro de banco de dados")
    )
)]
pub async fn create_product(
    State(app_state): State<AppState>,
    Json(payload): Json<CreateProductPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    // supplier_id inexistente volta como 400 (SupplierNotFound)
    let product = app_state
        .product_service
        .create_product(&app_state.db_pool, &payload)
        .await?;

    Ok((StatusCode::CREATED, Json(product)))
}

// GET /products/
#[utoipa::path(
    get,
    path = "/products/",
    tag = "Products",
    responses(
        (status = 200, description = "Lista de produtos", body = Vec<Product>)
    )
)]
pub async fn list_products(
    State(app_state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let products = app_state.product_service.list_products(&app_state.db_pool).await?;

    Ok((StatusCode::OK, Json(products)))
}

// POST /products/bulk/
#[utoipa::path(
    post,
    path = "/products/bulk/",
    tag = "Products",
    request_body = Vec<CreateProductPayload>,
    responses(
        (status = 201, description = "Produtos criados (tudo ou nada)", body = Vec<Product>),
        (status = 400, description = "Fornecedor inexistente"),
        (status = 422, description = "Algum item do lote é inválido")
    )
)]
pub async fn create_products_bulk(
    State(app_state): State<AppState>,
    Json(payloads): Json<Vec<CreateProductPayload>>,
) -> Result<impl IntoResponse, AppError> {
    validate_batch(&payloads)?;

    let products = app_state
        .product_service
        .create_products_bulk(&app_state.db_pool, &payloads)
        .await?;

    Ok((StatusCode::CREATED, Json(products)))
}
