// src/handlers/discounts.rs

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use validator::Validate;

use crate::{
    common::{error::AppError, validation::validate_batch},
    config::AppState,
    models::discount::{CreateDiscountPayload, Discount},
};

// POST /discounts/
#[utoipa::path(
    post,
    path = "/discounts/",
    tag = "Discounts",
    request_body = CreateDiscountPayload,
    responses(
        (status = 201, description = "Desconto criado", body = Discount),
        (status = 422, description = "Dados inválidos"),
        (status = 500, description = "Erro de banco de dados")
    )
)]
pub async fn create_discount(
    State(app_state): State<AppState>,
    Json(payload): Json<CreateDiscountPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let discount = app_state
        .discount_service
        .create_discount(&app_state.db_pool, &payload)
        .await?;

    Ok((StatusCode::CREATED, Json(discount)))
}

// GET /discounts/
#[utoipa::path(
    get,
    path = "/discounts/",
    tag = "Discounts",
    responses(
        (status = 200, description = "Lista de descontos", body = Vec<Discount>)
    )
)]
pub async fn list_discounts(
    State(app_state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let discounts = app_state.discount_service.list_discounts(&app_state.db_pool).await?;

    Ok((StatusCode::OK, Json(discounts)))
}

// POST /discounts/bulk/
#[utoipa::path(
    post,
    path = "/discounts/bulk/",
    tag = "Discounts",
    request_body = Vec<CreateDiscountPayload>,
    responses(
        (status = 201, description = "Descontos criados (tudo ou nada)", body = Vec<Discount>),
        (status = 422, description = "Algum item do lote é inválido")
    )
)]
pub async fn create_discounts_bulk(
    State(app_state): State<AppState>,
    Json(payloads): Json<Vec<CreateDiscountPayload>>,
) -> Result<impl IntoResponse, AppError> {
    validate_batch(&payloads)?;

    let discounts = app_state
        .discount_service
        .create_discounts_bulk(&app_state.db_pool, &payloads)
        .await?;

    Ok((StatusCode::CREATED, Json(discounts)))
}
