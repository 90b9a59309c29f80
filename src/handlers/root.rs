// src/handlers/root.rs

use axum::Json;
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Serialize, ToSchema)]
pub struct WelcomeMessage {
    pub message: String,
}

#[utoipa::path(
    get,
    path = "/",
    tag = "Root",
    responses((status = 200, description = "Mensagem de boas-vindas", body = WelcomeMessage))
)]
pub async fn welcome() -> Json<WelcomeMessage> {
    Json(WelcomeMessage {
        message: "Welcome to the Telepizza API".to_string(),
    })
}
