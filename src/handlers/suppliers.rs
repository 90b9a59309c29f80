// src/handlers/suppliers.rs

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use validator::Validate;

use crate::{
    common::{error::AppError, validation::validate_batch},
    config::AppState,
    models::supplier::{CreateSupplierPayload, Supplier},
};

// POST /suppliers/
#[utoipa::path(
    post,
    path = "/suppliers/",
    tag = "Suppliers",
    request_body = CreateSupplierPayload,
    responses(
        (status = 201, description = "Fornecedor criado", body = Supplier),
        (status = 422, description = "Dados inválidos"),
        (status = 500, description = "Erro de banco de dados")
    )
)]
pub async fn create_supplier(
    State(app_state): State<AppState>,
    Json(payload): Json<CreateSupplierPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let supplier = app_state
        .supplier_service
        .create_supplier(&app_state.db_pool, &payload)
        .await?;

    Ok((StatusCode::CREATED, Json(supplier)))
}

// GET /suppliers/
#[utoipa::path(
    get,
    path = "/suppliers/",
    tag = "Suppliers",
    responses(
        (status = 200, description = "Lista de fornecedores", body = Vec<Supplier>)
    )
)]
pub async fn list_suppliers(
    State(app_state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let suppliers = app_state.supplier_service.list_suppliers(&app_state.db_pool).await?;

    Ok((StatusCode::OK, Json(suppliers)))
}

// POST /suppliers/bulk/
#[utoipa::path(
    post,
    path = "/suppliers/bulk/",
    tag = "Suppliers",
    request_body = Vec<CreateSupplierPayload>,
    responses(
        (status = 201, description = "Fornecedores criados (tudo ou nada)", body = Vec<Supplier>),
        (status = 422, description = "Algum item do lote é inválido")
    )
)]
pub async fn create_suppliers_bulk(
    State(app_state): State<AppState>,
    Json(payloads): Json<Vec<CreateSupplierPayload>>,
) -> Result<impl IntoResponse, AppError> {
    validate_batch(&payloads)?;

    let suppliers = app_state
        .supplier_service
        .create_suppliers_bulk(&app_state.db_pool, &payloads)
        .await?;

    Ok((StatusCode::CREATED, Json(suppliers)))
}
