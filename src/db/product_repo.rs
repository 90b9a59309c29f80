// src/db/product_repo.rs

use sqlx::{Executor, Postgres};

use crate::{
    common::error::AppError,
    models::product::{CreateProductPayload, Product},
};

#[derive(Clone, Default)]
pub struct ProductRepository;

impl ProductRepository {
    pub fn new() -> Self {
        Self
    }

    pub async fn create<'e, E>(
        &self,
        executor: E,
        payload: &CreateProductPayload,
    ) -> Result<Product, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let product = sqlx::query_as!(
            Product,
            r#"
            INSERT INTO products (product_name, category, price, size, supplier_id)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING product_id, product_name, category, price, size, supplier_id
            "#,
            payload.product_name,
            payload.category,
            payload.price,
            payload.size,
            payload.supplier_id,
        )
        .fetch_one(executor)
        .await?;

        Ok(product)
    }

    pub async fn list<'e, E>(&self, executor: E) -> Result<Vec<Product>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let products = sqlx::query_as!(
            Product,
            r#"
            SELECT product_id, product_name, category, price, size, supplier_id
            FROM products
            ORDER BY product_id ASC
            "#
        )
        .fetch_all(executor)
        .await?;

        Ok(products)
    }
}
