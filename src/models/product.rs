// src/models/product.rs

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

use crate::common::validation::validate_not_negative;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Product {
    #[schema(example = 1)]
    pub product_id: i64,
    #[schema(example = "Barbacoa")]
    pub product_name: String,
    #[schema(example = "Pizza")]
    pub category: String,
    #[schema(value_type = f64, example = 12.95)]
    pub price: Decimal,
    #[schema(example = "Mediana")]
    pub size: String,
    pub supplier_id: Option<i64>,
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateProductPayload {
    #[validate(length(min = 1, message = "The product name is required."))]
    #[schema(example = "Barbacoa")]
    pub product_name: String,

    #[validate(length(min = 1, message = "The category is required."))]
    #[schema(example = "Pizza")]
    pub category: String,

    #[validate(custom(function = "validate_not_negative"))]
    #[schema(value_type = f64, example = 12.95)]
    pub price: Decimal,

    #[validate(length(min = 1, message = "The size is required."))]
    #[schema(example = "Mediana")]
    pub size: String,

    // Opcional: o fornecedor precisa existir se for informado
    #[schema(example = 1)]
    pub supplier_id: Option<i64>,
}
