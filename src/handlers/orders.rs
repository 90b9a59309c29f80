// src/handlers/orders.rs

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use validator::Validate;

use crate::{
    common::{error::AppError, validation::validate_batch},
    config::AppState,
    models::order::{CreateOrderPayload, Order},
};

// POST /orders/
#[utoipa::path(
    post,
    path = "/orders/",
    tag = "Orders",
    request_body = CreateOrderPayload,
    responses(
        (status = 201, description = "Pedido criado", body = Order),
        (status = 422, description = "Dados inválidos"),
        (status = 500, description = "Erro de banco de dados")
    )
)]
pub async fn create_order(
    State(app_state): State<AppState>,
    Json(payload): Json<CreateOrderPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let order = app_state
        .order_service
        .create_order(&app_state.db_pool, &payload)
        .await?;

    Ok((StatusCode::CREATED, Json(order)))
}

// GET /orders/
#[utoipa::path(
    get,
    path = "/orders/",
    tag = "Orders",
    responses(
        (status = 200, description = "Lista de pedidos", body = Vec<Order>)
    )
)]
pub async fn list_orders(
    State(app_state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let orders = app_state.order_service.list_orders(&app_state.db_pool).await?;

    Ok((StatusCode::OK, Json(orders)))
}

// POST /orders/bulk/
#[utoipa::path(
    post,
    path = "/orders/bulk/",
    tag = "Orders",
    request_body = Vec<CreateOrderPayload>,
    responses(
        (status = 201, description = "Pedidos criados (tudo ou nada)", body = Vec<Order>),
        (status = 422, description = "Algum item do lote é inválido")
    )
)]
pub async fn create_orders_bulk(
    State(app_state): State<AppState>,
    Json(payloads): Json<Vec<CreateOrderPayload>>,
) -> Result<impl IntoResponse, AppError> {
    validate_batch(&payloads)?;

    let orders = app_state
        .order_service
        .create_orders_bulk(&app_state.db_pool, &payloads)
        .await?;

    Ok((StatusCode::CREATED, Json(orders)))
}
