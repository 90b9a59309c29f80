// src/config.rs

use std::{env, net::SocketAddr, time::Duration};

use anyhow::Context;
use sqlx::{postgres::PgPoolOptions, PgPool};

use crate::{
    db::{
        CustomerRepository, DiscountRepository, EmployeeRepository, OrderRepository,
        ProductRepository, ReportRepository, SupplierRepository,
    },
    services::{
        customer_service::CustomerService, discount_service::DiscountService,
        employee_service::EmployeeService, order_service::OrderService,
        product_service::ProductService, report_service::ReportService,
        supplier_service::SupplierService,
    },
};

/// Configuração lida do ambiente (e do `.env`, se existir).
#[derive(Debug, Clone)]
pub struct Settings {
    pub database_url: String,
    pub server_addr: SocketAddr,
    pub max_connections: u32,
    pub acquire_timeout: Duration,
}

impl Settings {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    // Separado de `from_env` para os testes não mexerem no ambiente do processo
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL").context("DATABASE_URL must be set")?;

        let server_addr = lookup("SERVER_ADDR")
            .unwrap_or_else(|| "0.0.0.0:3000".to_string())
            .parse::<SocketAddr>()
            .context("SERVER_ADDR must be a socket address, e.g. 0.0.0.0:3000")?;

        let max_connections = match lookup("DATABASE_MAX_CONNECTIONS") {
            Some(raw) => raw
                .parse::<u32>()
                .context("DATABASE_MAX_CONNECTIONS must be a positive integer")?,
            None => 5,
        };

        let acquire_timeout = match lookup("DATABASE_ACQUIRE_TIMEOUT_SECS") {
            Some(raw) => Duration::from_secs(
                raw.parse::<u64>()
                    .context("DATABASE_ACQUIRE_TIMEOUT_SECS must be a number of seconds")?,
            ),
            None => Duration::from_secs(3),
        };

        Ok(Self {
            database_url,
            server_addr,
            max_connections,
            acquire_timeout,
        })
    }
}

#[derive(Clone)]
pub struct AppState {
    pub db_pool: PgPool,
    pub customer_service: CustomerService,
    pub employee_service: EmployeeService,
    pub supplier_service: SupplierService,
    pub product_service: ProductService,
    pub order_service: OrderService,
    pub discount_service: DiscountService,
    pub report_service: ReportService,
}

impl AppState {
    pub async fn new(settings: &Settings) -> anyhow::Result<Self> {
        let db_pool = PgPoolOptions::new()
            .max_connections(settings.max_connections)
            .acquire_timeout(settings.acquire_timeout)
            .connect(&settings.database_url)
            .await
            .context("failed to connect to the database")?;

        tracing::info!("✅ Conexão com o banco de dados estabelecida com sucesso!");

        Ok(Self::with_pool(db_pool))
    }

    // --- Monta o gráfico de dependências ---
    pub fn with_pool(db_pool: PgPool) -> Self {
        Self {
            customer_service: CustomerService::new(CustomerRepository::new()),
            employee_service: EmployeeService::new(EmployeeRepository::new()),
            supplier_service: SupplierService::new(SupplierRepository::new()),
            product_service: ProductService::new(ProductRepository::new(), SupplierRepository::new()),
            order_service: OrderService::new(OrderRepository::new()),
            discount_service: DiscountService::new(DiscountRepository::new()),
            report_service: ReportService::new(ReportRepository::new()),
            db_pool,
        }
    }
}
