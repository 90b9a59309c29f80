// src/common/error.rs

use std::collections::HashMap;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::{json, Value};
use thiserror::Error;
use validator::ValidationErrors;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("One or more fields are invalid.")]
    ValidationError(#[from] ValidationErrors),

    // Item inválido dentro de um lote (bulk)
    #[error("Item {index} of the batch is invalid.")]
    InvalidBulkItem {
        index: usize,
        #[source]
        source: ValidationErrors,
    },

    #[error("Supplier with id {0} does not exist")]
    SupplierNotFound(i64),

    // Qualquer falha do banco: conexão, constraint, SQL
    #[error("{0}")]
    DatabaseError(#[from] sqlx::Error),

    #[error("{0}")]
    InternalServerError(#[from] anyhow::Error),
}

/// Achata os erros do `validator` em `{ campo: [mensagens] }`.
fn field_details(errors: &ValidationErrors) -> HashMap<String, Vec<String>> {
    errors
        .field_errors()
        .into_iter()
        .map(|(field, field_errors)| {
            let messages = field_errors
                .iter()
                .map(|e| {
                    e.message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| e.code.to_string())
                })
                .collect();
            (field.to_string(), messages)
        })
        .collect()
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let message = self.to_string();

        let (status, body): (StatusCode, Value) = match &self {
            AppError::ValidationError(errors) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                json!({ "error": message, "details": field_details(errors) }),
            ),
            AppError::InvalidBulkItem { index, source } => (
                StatusCode::UNPROCESSABLE_ENTITY,
                json!({ "error": message, "index": index, "details": field_details(source) }),
            ),
            AppError::SupplierNotFound(_) => {
                (StatusCode::BAD_REQUEST, json!({ "error": message }))
            }
            // O resto vira 500, com a mensagem original do erro
            AppError::DatabaseError(_) | AppError::InternalServerError(_) => {
                tracing::error!("Erro Interno do Servidor: {}", message);
                (StatusCode::INTERNAL_SERVER_ERROR, json!({ "error": message }))
            }
        };

        (status, Json(body)).into_response()
    }
}
