// src/handlers/reports.rs
//
// Relatórios fixos (Query1..Query15). Só leitura; "não encontrado" não é erro,
// volta lista vazia ou valor nulo.

use axum::{
    extract::{Path, Query, State},
    response::IntoResponse,
    Json,
};

use crate::{
    common::error::AppError,
    config::AppState,
    models::{
        customer::Customer,
        employee::Employee,
        order::Order,
        product::Product,
        reports::{
            AvgDiscount, CategoryQuery, CustomerIdQuery, CustomerOrder, CustomerOrderCount,
            DateRangeQuery, EmployeeAverageOrder, EmployeeSales, MaxDiscount, MinDiscount,
            OrderDetail, ProductDiscount, SupplierProductCount,
        },
    },
};

#[utoipa::path(
    get,
    path = "/Query1",
    tag = "Reports",
    params(CustomerIdQuery),
    responses((status = 200, description = "Cliente pelo ID (0 ou 1 elemento)", body = Vec<Customer>))
)]
pub async fn customer_by_id(
    State(app_state): State<AppState>,
    Query(params): Query<CustomerIdQuery>,
) -> Result<impl IntoResponse, AppError> {
    let rows = app_state
        .report_service
        .customer_by_id(&app_state.db_pool, params.customer_id)
        .await?;
    Ok(Json(rows))
}

#[utoipa::path(
    get,
    path = "/Query2",
    tag = "Reports",
    responses((status = 200, description = "Clientes sem pedidos", body = Vec<Customer>))
)]
pub async fn customers_without_orders(
    State(app_state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let rows = app_state
        .report_service
        .customers_without_orders(&app_state.db_pool)
        .await?;
    Ok(Json(rows))
}

#[utoipa::path(
    get,
    path = "/Query3",
    tag = "Reports",
    responses((status = 200, description = "Funcionários sem pedidos", body = Vec<Employee>))
)]
pub async fn employees_without_orders(
    State(app_state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let rows = app_state
        .report_service
        .employees_without_orders(&app_state.db_pool)
        .await?;
    Ok(Json(rows))
}

#[utoipa::path(
    get,
    path = "/Query4",
    tag = "Reports",
    responses((status = 200, description = "Maior desconto", body = MaxDiscount))
)]
pub async fn max_discount(State(app_state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let row = app_state.report_service.max_discount(&app_state.db_pool).await?;
    Ok(Json(row))
}

#[utoipa::path(
    get,
    path = "/Query5",
    tag = "Reports",
    responses((status = 200, description = "Menor desconto", body = MinDiscount))
)]
pub async fn min_discount(State(app_state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let row = app_state.report_service.min_discount(&app_state.db_pool).await?;
    Ok(Json(row))
}

#[utoipa::path(
    get,
    path = "/Query6",
    tag = "Reports",
    responses((status = 200, description = "Desconto médio", body = AvgDiscount))
)]
pub async fn avg_discount(State(app_state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let row = app_state.report_service.avg_discount(&app_state.db_pool).await?;
    Ok(Json(row))
}

#[utoipa::path(
    get,
    path = "/Query7",
    tag = "Reports",
    params(CategoryQuery),
    responses((status = 200, description = "Produtos de uma categoria", body = Vec<Product>))
)]
pub async fn products_by_category(
    State(app_state): State<AppState>,
    Query(params): Query<CategoryQuery>,
) -> Result<impl IntoResponse, AppError> {
    let rows = app_state
        .report_service
        .products_by_category(&app_state.db_pool, &params.category)
        .await?;
    Ok(Json(rows))
}

#[utoipa::path(
    get,
    path = "/Query8",
    tag = "Reports",
    params(CustomerIdQuery),
    responses((status = 200, description = "Pedidos de um cliente", body = Vec<CustomerOrder>))
)]
pub async fn orders_by_customer(
    State(app_state): State<AppState>,
    Query(params): Query<CustomerIdQuery>,
) -> Result<impl IntoResponse, AppError> {
    let rows = app_state
        .report_service
        .orders_by_customer(&app_state.db_pool, params.customer_id)
        .await?;
    Ok(Json(rows))
}

#[utoipa::path(
    get,
    path = "/Query9",
    tag = "Reports",
    params(DateRangeQuery),
    responses((status = 200, description = "Pedidos no intervalo (inclusivo)", body = Vec<Order>))
)]
pub async fn orders_between(
    State(app_state): State<AppState>,
    Query(params): Query<DateRangeQuery>,
) -> Result<impl IntoResponse, AppError> {
    let rows = app_state
        .report_service
        .orders_between(&app_state.db_pool, params.start_date, params.end_date)
        .await?;
    Ok(Json(rows))
}

#[utoipa::path(
    get,
    path = "/Query10",
    tag = "Reports",
    responses((status = 200, description = "Total de pedidos por cliente", body = Vec<CustomerOrderCount>))
)]
pub async fn total_orders_per_customer(
    State(app_state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let rows = app_state
        .report_service
        .total_orders_per_customer(&app_state.db_pool)
        .await?;
    Ok(Json(rows))
}

#[utoipa::path(
    get,
    path = "/Query11",
    tag = "Reports",
    responses((status = 200, description = "Total de vendas por funcionário", body = Vec<EmployeeSales>))
)]
pub async fn total_sales_per_employee(
    State(app_state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let rows = app_state
        .report_service
        .total_sales_per_employee(&app_state.db_pool)
        .await?;
    Ok(Json(rows))
}

#[utoipa::path(
    get,
    path = "/Query12",
    tag = "Reports",
    responses((status = 200, description = "Valor médio do pedido por funcionário", body = Vec<EmployeeAverageOrder>))
)]
pub async fn average_order_per_employee(
    State(app_state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let rows = app_state
        .report_service
        .average_order_per_employee(&app_state.db_pool)
        .await?;
    Ok(Json(rows))
}

#[utoipa::path(
    get,
    path = "/Query13",
    tag = "Reports",
    responses((status = 200, description = "Produtos com descontos", body = Vec<ProductDiscount>))
)]
pub async fn products_with_discounts(
    State(app_state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let rows = app_state
        .report_service
        .products_with_discounts(&app_state.db_pool)
        .await?;
    Ok(Json(rows))
}

#[utoipa::path(
    get,
    path = "/Query14",
    tag = "Reports",
    responses((status = 200, description = "Detalhe de todos os pedidos", body = Vec<OrderDetail>))
)]
pub async fn order_details(State(app_state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let rows = app_state.report_service.order_details(&app_state.db_pool).await?;
    Ok(Json(rows))
}

#[utoipa::path(
    get,
    path = "/Query14/{id}",
    tag = "Reports",
    params(("id" = i64, Path, description = "ID do pedido")),
    responses((status = 200, description = "Detalhe de um pedido (0 ou 1 elemento)", body = Vec<OrderDetail>))
)]
pub async fn order_detail_by_id(
    State(app_state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let rows = app_state
        .report_service
        .order_detail_by_id(&app_state.db_pool, id)
        .await?;
    Ok(Json(rows))
}

#[utoipa::path(
    get,
    path = "/Query15",
    tag = "Reports",
    responses((status = 200, description = "Total de produtos por fornecedor", body = Vec<SupplierProductCount>))
)]
pub async fn total_products_per_supplier(
    State(app_state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let rows = app_state
        .report_service
        .total_products_per_supplier(&app_state.db_pool)
        .await?;
    Ok(Json(rows))
}
