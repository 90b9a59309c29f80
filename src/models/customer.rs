// src/models/customer.rs

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Customer {
    #[schema(example = 1)]
    pub customer_id: i64,
    #[schema(example = "María García")]
    pub full_name: String,
    #[schema(example = "maria@example.com")]
    pub email: String,
    pub phone: Option<String>,
    #[schema(example = "Calle Mayor 1, Madrid")]
    pub address: String,
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateCustomerPayload {
    #[validate(length(min = 1, message = "The full name is required."))]
    #[schema(example = "María García")]
    pub full_name: String,

    #[validate(email(message = "The email is not valid."))]
    #[schema(example = "maria@example.com")]
    pub email: String,

    #[schema(example = "+34 600 000 000")]
    pub phone: Option<String>,

    #[validate(length(min = 1, message = "The address is required."))]
    #[schema(example = "Calle Mayor 1, Madrid")]
    pub address: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn phone_is_optional() {
        let payload: CreateCustomerPayload = serde_json::from_value(json!({
            "full_name": "Ana",
            "email": "ana@example.com",
            "address": "Gran Vía 2"
        }))
        .unwrap();

        assert!(payload.phone.is_none());
        assert!(payload.validate().is_ok());
    }

    #[test]
    fn malformed_email_is_rejected() {
        let payload = CreateCustomerPayload {
            full_name: "Ana".into(),
            email: "not-an-email".into(),
            phone: None,
            address: "Gran Vía 2".into(),
        };

        let errors = payload.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("email"));
    }

    #[test]
    fn missing_address_fails_deserialization() {
        let result = serde_json::from_value::<CreateCustomerPayload>(json!({
            "full_name": "Ana",
            "email": "ana@example.com"
        }));
        assert!(result.is_err());
    }
}
