//src/main.rs

use axum::{
    routing::{get, post},
    Router,
};
use tokio::{net::TcpListener, signal};
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

mod common;
mod config;
mod db;
mod docs;
mod handlers;
mod models;
mod services;

#[cfg(test)]
mod test_support;

use crate::config::{AppState, Settings};
use crate::docs::ApiDoc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .compact()
        .init();

    // Se a configuração falhar, a aplicação não deve iniciar.
    let settings = Settings::from_env()?;
    let app_state = AppState::new(&settings).await?;

    db::MIGRATOR.run(&app_state.db_pool).await?;
    tracing::info!("✅ Migrações do banco de dados executadas com sucesso!");

    let app = build_router(app_state);

    let listener = TcpListener::bind(settings.server_addr).await?;
    tracing::info!("🚀 Servidor escutando em {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Servidor encerrado");
    Ok(())
}

fn build_router(app_state: AppState) -> Router {
    let entity_routes = Router::new()
        .route("/customers/"
               ,post(handlers::customers::create_customer)
               .get(handlers::customers::list_customers)
        )
        .route("/customers/bulk/", post(handlers::customers::create_customers_bulk))
        .route("/employees/"
               ,post(handlers::employees::create_employee)
               .get(handlers::employees::list_employees)
        )
        .route("/employees/bulk/", post(handlers::employees::create_employees_bulk))
        .route("/suppliers/"
               ,post(handlers::suppliers::create_supplier)
               .get(handlers::suppliers::list_suppliers)
        )
        .route("/suppliers/bulk/", post(handlers::suppliers::create_suppliers_bulk))
        .route("/products/"
               ,post(handlers::products::create_product)
               .get(handlers::products::list_products)
        )
        .route("/products/bulk/", post(handlers::products::create_products_bulk))
        .route("/orders/"
               ,post(handlers::orders::create_order)
               .get(handlers::orders::list_orders)
        )
        .route("/orders/bulk/", post(handlers::orders::create_orders_bulk))
        .route("/discounts/"
               ,post(handlers::discounts::create_discount)
               .get(handlers::discounts::list_discounts)
        )
        .route("/discounts/bulk/", post(handlers::discounts::create_discounts_bulk));

    let report_routes = Router::new()
        .route("/Query1", get(handlers::reports::customer_by_id))
        .route("/Query2", get(handlers::reports::customers_without_orders))
        .route("/Query3", get(handlers::reports::employees_without_orders))
        .route("/Query4", get(handlers::reports::max_discount))
        .route("/Query5", get(handlers::reports::min_discount))
        .route("/Query6", get(handlers::reports::avg_discount))
        .route("/Query7", get(handlers::reports::products_by_category))
        .route("/Query8", get(handlers::reports::orders_by_customer))
        .route("/Query9", get(handlers::reports::orders_between))
        .route("/Query10", get(handlers::reports::total_orders_per_customer))
        .route("/Query11", get(handlers::reports::total_sales_per_employee))
        .route("/Query12", get(handlers::reports::average_order_per_employee))
        .route("/Query13", get(handlers::reports::products_with_discounts))
        .route("/Query14", get(handlers::reports::order_details))
        .route("/Query14/{id}", get(handlers::reports::order_detail_by_id))
        .route("/Query15", get(handlers::reports::total_products_per_supplier));

    // Combina tudo no router principal
    Router::new()
        .route("/", get(handlers::root::welcome))
        .route("/api/health", get(|| async { "OK" }))
        .merge(entity_routes)
        .merge(report_routes)
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Falha ao escutar Ctrl+C: {}", e);
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!("Falha ao registrar o handler de SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => tracing::warn!("Ctrl+C recebido, encerrando..."),
        _ = terminate => tracing::warn!("SIGTERM recebido, encerrando..."),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use serde_json::{json, Value};
    use sqlx::postgres::PgPoolOptions;
    use tower::ServiceExt;

    // Pool preguiçoso: nunca conecta, então só serve para rotas que
    // falham (ou respondem) antes de tocar no banco.
    fn offline_app() -> Router {
        let pool = PgPoolOptions::new()
            .connect_lazy("postgres://telepizza@localhost/unused")
            .unwrap();
        build_router(AppState::with_pool(pool))
    }

    fn post_json(uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn body_json(response: axum::response::Response) -> Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn root_says_welcome() {
        let response = offline_app()
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            body_json(response).await,
            json!({ "message": "Welcome to the Telepizza API" })
        );
    }

    #[tokio::test]
    async fn health_endpoint() {
        let response = offline_app()
            .oneshot(Request::builder().uri("/api/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn invalid_email_is_rejected_before_the_database() {
        let response = offline_app()
            .oneshot(post_json(
                "/customers/",
                json!({ "full_name": "Ana", "email": "ana-at-example", "address": "Gran Vía 2" }),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let body = body_json(response).await;
        assert!(body["details"]["email"].is_array());
    }

    #[tokio::test]
    async fn missing_required_field_is_rejected() {
        let response = offline_app()
            .oneshot(post_json(
                "/employees/",
                json!({ "full_name": "Luis", "position": "Cocinero", "salary": 1000 }),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn bulk_rejects_the_whole_batch_on_one_bad_item() {
        let response = offline_app()
            .oneshot(post_json(
                "/products/bulk/",
                json!([
                    { "product_name": "Margarita", "category": "Pizza", "price": 9.5, "size": "M" },
                    { "product_name": "Barbacoa", "category": "Pizza", "price": -1, "size": "M" }
                ]),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let body = body_json(response).await;
        assert_eq!(body["index"], 1);
        assert!(body["details"]["price"].is_array());
    }

    #[tokio::test]
    async fn date_range_report_requires_both_dates() {
        let response = offline_app()
            .oneshot(
                Request::builder()
                    .uri("/Query9?start_date=2024-01-10")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn order_detail_id_must_be_numeric() {
        let response = offline_app()
            .oneshot(Request::builder().uri("/Query14/abc").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn openapi_document_is_served() {
        let response = offline_app()
            .oneshot(
                Request::builder()
                    .uri("/api-docs/openapi.json")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["info"]["title"], "API Telepizza");
    }

    // --- Fluxo completo contra um PostgreSQL real ---

    #[sqlx::test(migrator = "crate::db::MIGRATOR")]
    #[ignore = "requires a PostgreSQL DATABASE_URL"]
    async fn create_then_list_over_http(pool: sqlx::PgPool) {
        let app = build_router(AppState::with_pool(pool));

        let response = app
            .clone()
            .oneshot(post_json(
                "/suppliers/",
                json!({ "supplier_name": "Harinas del Sur" }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
        let supplier = body_json(response).await;

        let response = app
            .clone()
            .oneshot(post_json(
                "/products/",
                json!({
                    "product_name": "Barbacoa",
                    "category": "Pizza",
                    "price": 12.95,
                    "size": "Mediana",
                    "supplier_id": supplier["supplier_id"]
                }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);

        let response = app
            .clone()
            .oneshot(post_json(
                "/products/",
                json!({
                    "product_name": "Fantasma",
                    "category": "Pizza",
                    "price": 1,
                    "size": "Mediana",
                    "supplier_id": 9999
                }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let response = app
            .clone()
            .oneshot(Request::builder().uri("/Query15").body(Body::empty()).unwrap())
            .await
            .unwrap();
        let body = body_json(response).await;
        assert_eq!(body[0]["total_products"], 1);

        let response = app
            .oneshot(Request::builder().uri("/Query4").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(body_json(response).await, json!({ "max_discount": null }));
    }
}
