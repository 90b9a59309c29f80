// src/models/reports.rs

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::{IntoParams, ToSchema};

// ---
// Parâmetros (query string)
// ---

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct CustomerIdQuery {
    /// ID do cliente
    pub customer_id: i64,
}

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct CategoryQuery {
    /// Categoria exata do produto (ex: "Pizza")
    pub category: String,
}

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct DateRangeQuery {
    /// Data inicial (inclusiva)
    pub start_date: NaiveDate,
    /// Data final (inclusiva)
    pub end_date: NaiveDate,
}

// ---
// Agregados escalares (uma linha, valor nulo se não houver descontos)
// ---

#[derive(Debug, Serialize, FromRow, ToSchema)]
pub struct MaxDiscount {
    #[schema(value_type = Option<f64>)]
    pub max_discount: Option<Decimal>,
}

#[derive(Debug, Serialize, FromRow, ToSchema)]
pub struct MinDiscount {
    #[schema(value_type = Option<f64>)]
    pub min_discount: Option<Decimal>,
}

#[derive(Debug, Serialize, FromRow, ToSchema)]
pub struct AvgDiscount {
    #[schema(value_type = Option<f64>)]
    pub avg_discount: Option<Decimal>,
}

// ---
// Joins
// ---

#[derive(Debug, Serialize, FromRow, ToSchema)]
pub struct CustomerOrder {
    pub order_id: i64,
    pub order_date: NaiveDate,
    #[schema(value_type = f64)]
    pub total_amount: Decimal,
    pub customer_id: i64,
    pub full_name: String,
}

#[derive(Debug, Serialize, FromRow, ToSchema)]
pub struct ProductDiscount {
    pub product_id: i64,
    pub product_name: String,
    // Nulos quando o produto não tem desconto
    pub discount_id: Option<i64>,
    pub discount_name: Option<String>,
    #[schema(value_type = Option<f64>)]
    pub discount_percent: Option<Decimal>,
}

#[derive(Debug, Serialize, FromRow, ToSchema)]
pub struct OrderDetail {
    pub order_id: i64,
    pub order_date: NaiveDate,
    #[schema(value_type = f64)]
    pub total_amount: Decimal,
    pub customer_id: i64,
    pub customer_name: String,
    pub employee_id: i64,
    pub employee_name: String,
}

// ---
// Agregados por grupo (LEFT JOIN: pais sem filhos também aparecem)
// ---

#[derive(Debug, Serialize, FromRow, ToSchema)]
pub struct CustomerOrderCount {
    pub customer_id: i64,
    pub full_name: String,
    pub total_orders: i64,
}

#[derive(Debug, Serialize, FromRow, ToSchema)]
pub struct EmployeeSales {
    pub employee_id: i64,
    pub full_name: String,
    #[schema(value_type = Option<f64>)]
    pub total_sales: Option<Decimal>,
}

#[derive(Debug, Serialize, FromRow, ToSchema)]
pub struct EmployeeAverageOrder {
    pub employee_id: i64,
    pub full_name: String,
    #[schema(value_type = Option<f64>)]
    pub average_order_amount: Option<Decimal>,
}

#[derive(Debug, Serialize, FromRow, ToSchema)]
pub struct SupplierProductCount {
    pub supplier_id: i64,
    pub supplier_name: String,
    pub total_products: i64,
}
