// src/models/order.rs

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

use crate::common::validation::validate_not_negative;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Order {
    #[schema(example = 1)]
    pub order_id: i64,
    #[schema(example = 1)]
    pub customer_id: i64,
    pub order_date: NaiveDate,
    #[schema(value_type = f64, example = 25.9)]
    pub total_amount: Decimal,
    #[schema(example = 1)]
    pub employee_id: i64,
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateOrderPayload {
    #[schema(example = 1)]
    pub customer_id: i64,

    #[schema(example = "2024-01-15")]
    pub order_date: NaiveDate,

    #[validate(custom(function = "validate_not_negative"))]
    #[schema(value_type = f64, example = 25.9)]
    pub total_amount: Decimal,

    #[schema(example = 1)]
    pub employee_id: i64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn order_date_must_be_iso() {
        let result = serde_json::from_value::<CreateOrderPayload>(json!({
            "customer_id": 1,
            "order_date": "15/01/2024",
            "total_amount": 10,
            "employee_id": 1
        }));
        assert!(result.is_err());
    }

    #[test]
    fn negative_total_is_rejected() {
        let payload = CreateOrderPayload {
            customer_id: 1,
            order_date: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
            total_amount: Decimal::NEGATIVE_ONE,
            employee_id: 1,
        };
        assert!(payload.validate().is_err());
    }
}
