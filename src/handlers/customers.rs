// src/handlers/customers.rs

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use validator::Validate;

use crate::{
    common::{error::AppError, validation::validate_batch},
    config::AppState,
    models::customer::{CreateCustomerPayload, Customer},
};

// POST /customers/
#[utoipa::path(
    post,
    path = "/customers/",
    tag = "Customers",
    request_body = CreateCustomerPayload,
    responses(
        (status = 201, description = "Cliente criado", body = Customer),
        (status = 422, description = "Dados inválidos"),
        (status = 500, description = "Erro de banco de dados")
    )
)]
pub async fn create_customer(
    State(app_state): State<AppState>,
    Json(payload): Json<CreateCustomerPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let customer = app_state
        .customer_service
        .create_customer(&app_state.db_pool, &payload)
        .await?;

    Ok((StatusCode::CREATED, Json(customer)))
}

// GET /customers/
#[utoipa::path(
    get,
    path = "/customers/",
    tag = "Customers",
    responses(
        (status = 200, description = "Lista de clientes", body = Vec<Customer>)
    )
)]
pub async fn list_customers(
    State(app_state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let customers = app_state.customer_service.list_customers(&app_state.db_pool).await?;

    Ok((StatusCode::OK, Json(customers)))
}

// POST /customers/bulk/
#[utoipa::path(
    post,
    path = "/customers/bulk/",
    tag = "Customers",
    request_body = Vec<CreateCustomerPayload>,
    responses(
        (status = 201, description = "Clientes criados (tudo ou nada)", body = Vec<Customer>),
        (status = 422, description = "Algum item do lote é inválido")
    )
)]
pub async fn create_customers_bulk(
    State(app_state): State<AppState>,
    Json(payloads): Json<Vec<CreateCustomerPayload>>,
) -> Result<impl IntoResponse, AppError> {
    validate_batch(&payloads)?;

    let customers = app_state
        .customer_service
        .create_customers_bulk(&app_state.db_pool, &payloads)
        .await?;

    Ok((StatusCode::CREATED, Json(customers)))
}
