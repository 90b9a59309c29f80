// src/db/order_repo.rs

use sqlx::{Executor, Postgres};

use crate::{
    common::error::AppError,
    models::order::{CreateOrderPayload, Order},
};

#[derive(Clone, Default)]
pub struct OrderRepository;

impl OrderRepository {
    pub fn new() -> Self {
        Self
    }

    pub async fn create<'e, E>(
        &self,
        executor: E,
        payload: &CreateOrderPayload,
    ) -> Result<Order, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let order = sqlx::query_as!(
            Order,
            r#"
            INSERT INTO orders (customer_id, order_date, total_amount, employee_id)
            VALUES ($1, $2, $3, $4)
            RETURNING order_id, customer_id, order_date, total_amount, employee_id
            "#,
            payload.customer_id,
            payload.order_date,
            payload.total_amount,
            payload.employee_id,
        )
        .fetch_one(executor)
        .await?;

        Ok(order)
    }

    pub async fn list<'e, E>(&self, executor: E) -> Result<Vec<Order>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let orders = sqlx::query_as!(
            Order,
            r#"
            SELECT order_id, customer_id, order_date, total_amount, employee_id
            FROM orders
            ORDER BY order_id ASC
            "#
        )
        .fetch_all(executor)
        .await?;

        Ok(orders)
    }
}
