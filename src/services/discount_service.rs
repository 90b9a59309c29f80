// src/services/discount_service.rs

use sqlx::{Acquire, Executor, Postgres};

use crate::{
    common::error::AppError,
    db::DiscountRepository,
    models::discount::{CreateDiscountPayload, Discount},
};

#[derive(Clone)]
pub struct DiscountService {
    repo: DiscountRepository,
}

impl DiscountService {
    pub fn new(repo: DiscountRepository) -> Self {
        Self { repo }
    }

    pub async fn create_discount<'a, A>(
        &self,
        conn: A,
        payload: &CreateDiscountPayload,
    ) -> Result<Discount, AppError>
    where
        A: Acquire<'a, Database = Postgres>,
    {
        let mut tx = conn.begin().await?;
        let discount = self.repo.create(&mut *tx, payload).await?;
        tx.commit().await?;

        Ok(discount)
    }

    pub async fn list_discounts<'e, E>(&self, executor: E) -> Result<Vec<Discount>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        self.repo.list(executor).await
    }

    pub async fn create_discounts_bulk<'a, A>(
        &self,
        conn: A,
        payloads: &[CreateDiscountPayload],
    ) -> Result<Vec<Discount>, AppError>
    where
        A: Acquire<'a, Database = Postgres>,
    {
        let mut tx = conn.begin().await?;

        let mut discounts = Vec::with_capacity(payloads.len());
        for payload in payloads {
            discounts.push(self.repo.create(&mut *tx, payload).await?);
        }

        tx.commit().await?;

        tracing::info!(count = discounts.len(), "lote de descontos criado");
        Ok(discounts)
    }
}
