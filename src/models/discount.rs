// src/models/discount.rs

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

use crate::common::validation::validate_percentage;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Discount {
    #[schema(example = 1)]
    pub discount_id: i64,
    #[schema(example = "Martes 2x1")]
    pub discount_name: String,
    #[schema(value_type = f64, example = 50.0)]
    pub discount_percent: Decimal,
    pub product_id: Option<i64>,
    pub order_id: Option<i64>,
}

// Produto e pedido são opcionais (um, outro, ambos ou nenhum)
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateDiscountPayload {
    #[validate(length(min = 1, message = "The discount name is required."))]
    #[schema(example = "Martes 2x1")]
    pub discount_name: String,

    #[validate(custom(function = "validate_percentage"))]
    #[schema(value_type = f64, example = 50.0)]
    pub discount_percent: Decimal,

    pub product_id: Option<i64>,
    pub order_id: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn percent_above_one_hundred_is_rejected() {
        let payload: CreateDiscountPayload = serde_json::from_value(json!({
            "discount_name": "Demasiado",
            "discount_percent": 120
        }))
        .unwrap();

        let errors = payload.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("discount_percent"));
    }

    #[test]
    fn links_are_optional() {
        let payload: CreateDiscountPayload = serde_json::from_value(json!({
            "discount_name": "Bienvenida",
            "discount_percent": 10
        }))
        .unwrap();

        assert!(payload.product_id.is_none() && payload.order_id.is_none());
        assert!(payload.validate().is_ok());
    }
}
