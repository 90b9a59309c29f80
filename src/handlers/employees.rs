// src/handlers/employees.rs

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use validator::Validate;

use crate::{
    common::{error::AppError, validation::validate_batch},
    config::AppState,
    models::employee::{CreateEmployeePayload, Employee},
};

// POST /employees/
#[utoipa::path(
    post,
    path = "/employees/",
    tag = "Employees",
    request_body = CreateEmployeePayload,
    responses(
        (status = 201, description = "Funcionário criado", body = Employee),
        (status = 422, description = "Dados inválidos"),
        (status = 500, description = "Erro de banco de dados")
    )
)]
pub async fn create_employee(
    State(app_state): State<AppState>,
    Json(payload): Json<CreateEmployeePayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let employee = app_state
        .employee_service
        .create_employee(&app_state.db_pool, &payload)
        .await?;

    Ok((StatusCode::CREATED, Json(employee)))
}

// GET /employees/
#[utoipa::path(
    get,
    path = "/employees/",
    tag = "Employees",
    responses(
        (status = 200, description = "Lista de funcionários", body = Vec<Employee>)
    )
)]
pub async fn list_employees(
    State(app_state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let employees = app_state.employee_service.list_employees(&app_state.db_pool).await?;

    Ok((StatusCode::OK, Json(employees)))
}

// POST /employees/bulk/
#[utoipa::path(
    post,
    path = "/employees/bulk/",
    tag = "Employees",
    request_body = Vec<CreateEmployeePayload>,
    responses(
        (status = 201, description = "Funcionários criados (tudo ou nada)", body = Vec<Employee>),
        (status = 422, description = "Algum item do lote é inválido")
    )
)]
pub async fn create_employees_bulk(
    State(app_state): State<AppState>,
    Json(payloads): Json<Vec<CreateEmployeePayload>>,
) -> Result<impl IntoResponse, AppError> {
    validate_batch(&payloads)?;

    let employees = app_state
        .employee_service
        .create_employees_bulk(&app_state.db_pool, &payloads)
        .await?;

    Ok((StatusCode::CREATED, Json(employees)))
}
