// src/db/discount_repo.rs

use sqlx::{Executor, Postgres};

use crate::{
    common::error::AppError,
    models::discount::{CreateDiscountPayload, Discount},
};

#[derive(Clone, Default)]
pub struct DiscountRepository;

impl DiscountRepository {
    pub fn new() -> Self {
        Self
    }

    pub async fn create<'e, E>(
        &self,
        executor: E,
        payload: &CreateDiscountPayload,
    ) -> Result<Discount, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let discount = sqlx::query_as!(
            Discount,
            r#"
            INSERT INTO discounts (discount_name, discount_percent, product_id, order_id)
            VALUES ($1, $2, $3, $4)
            RETURNING discount_id, discount_name, discount_percent, product_id, order_id
            "#,
            payload.discount_name,
            payload.discount_percent,
            payload.product_id,
            payload.order_id,
        )
        .fetch_one(executor)
        .await?;

        Ok(discount)
    }

    pub async fn list<'e, E>(&self, executor: E) -> Result<Vec<Discount>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let discounts = sqlx::query_as!(
            Discount,
            r#"
            SELECT discount_id, discount_name, discount_percent, product_id, order_id
            FROM discounts
            ORDER BY discount_id ASC
            "#
        )
        .fetch_all(executor)
        .await?;

        Ok(discounts)
    }
}
