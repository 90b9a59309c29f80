// src/models/employee.rs

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

use crate::common::validation::validate_not_negative;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Employee {
    #[schema(example = 1)]
    pub employee_id: i64,
    #[schema(example = "Luis Pérez")]
    pub full_name: String,
    #[schema(example = "Repartidor")]
    pub position: String,
    pub hire_date: NaiveDate,
    #[schema(value_type = f64, example = 1350.0)]
    pub salary: Decimal,
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateEmployeePayload {
    #[validate(length(min = 1, message = "The full name is required."))]
    #[schema(example = "Luis Pérez")]
    pub full_name: String,

    #[validate(length(min = 1, message = "The position is required."))]
    #[schema(example = "Repartidor")]
    pub position: String,

    #[schema(example = "2024-03-01")]
    pub hire_date: NaiveDate,

    #[validate(custom(function = "validate_not_negative"))]
    #[schema(value_type = f64, example = 1350.0)]
    pub salary: Decimal,
}
