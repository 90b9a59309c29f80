// src/services/order_service.rs

use sqlx::{Acquire, Executor, Postgres};

use crate::{
    common::error::AppError,
    db::OrderRepository,
    models::order::{CreateOrderPayload, Order},
};

#[derive(Clone)]
pub struct OrderService {
    repo: OrderRepository,
}

impl OrderService {
    pub fn new(repo: OrderRepository) -> Self {
        Self { repo }
    }

    // Cliente/funcionário inexistente cai na FK e vira erro de banco (500)
    pub async fn create_order<'a, A>(
        &self,
        conn: A,
        payload: &CreateOrderPayload,
    ) -> Result<Order, AppError>
    where
        A: Acquire<'a, Database = Postgres>,
    {
        let mut tx = conn.begin().await?;
        let order = self.repo.create(&mut *tx, payload).await?;
        tx.commit().await?;

        Ok(order)
    }

    pub async fn list_orders<'e, E>(&self, executor: E) -> Result<Vec<Order>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        self.repo.list(executor).await
    }

    pub async fn create_orders_bulk<'a, A>(
        &self,
        conn: A,
        payloads: &[CreateOrderPayload],
    ) -> Result<Vec<Order>, AppError>
    where
        A: Acquire<'a, Database = Postgres>,
    {
        let mut tx = conn.begin().await?;

        let mut orders = Vec::with_capacity(payloads.len());
        for payload in payloads {
            orders.push(self.repo.create(&mut *tx, payload).await?);
        }

        tx.commit().await?;

        tracing::info!(count = orders.len(), "lote de pedidos criado");
        Ok(orders)
    }
}
