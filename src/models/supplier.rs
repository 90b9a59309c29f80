// src/models/supplier.rs

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Supplier {
    #[schema(example = 1)]
    pub supplier_id: i64,
    #[schema(example = "Harinas del Sur")]
    pub supplier_name: String,
    pub contact_email: Option<String>,
    pub contact_phone: Option<String>,
    pub address: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateSupplierPayload {
    #[validate(length(min = 1, message = "The supplier name is required."))]
    #[schema(example = "Harinas del Sur")]
    pub supplier_name: String,

    #[validate(email(message = "The contact email is not valid."))]
    #[schema(example = "ventas@harinas.es")]
    pub contact_email: Option<String>,

    pub contact_phone: Option<String>,
    pub address: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn only_the_name_is_required() {
        let payload: CreateSupplierPayload =
            serde_json::from_value(json!({ "supplier_name": "Quesos Norte" })).unwrap();
        assert!(payload.validate().is_ok());
    }

    #[test]
    fn contact_email_is_checked_when_present() {
        let payload: CreateSupplierPayload = serde_json::from_value(json!({
            "supplier_name": "Quesos Norte",
            "contact_email": "quesos"
        }))
        .unwrap();
        assert!(payload.validate().is_err());
    }
}
