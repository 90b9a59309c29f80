// src/db/customer_repo.rs

use sqlx::{Executor, Postgres};

use crate::{
    common::error::AppError,
    models::customer::{CreateCustomerPayload, Customer},
};

#[derive(Clone, Default)]
pub struct CustomerRepository;

impl CustomerRepository {
    pub fn new() -> Self {
        Self
    }

    pub async fn create<'e, E>(
        &self,
        executor: E,
        payload: &CreateCustomerPayload,
    ) -> Result<Customer, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let customer = sqlx::query_as!(
            Customer,
            r#"
            INSERT INTO customers (full_name, email, phone, address)
            VALUES ($1, $2, $3, $4)
            RETURNING customer_id, full_name, email, phone, address
            "#,
            payload.full_name,
            payload.email,
            payload.phone,
            payload.address,
        )
        .fetch_one(executor)
        .await?;

        Ok(customer)
    }

    pub async fn list<'e, E>(&self, executor: E) -> Result<Vec<Customer>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let customers = sqlx::query_as!(
            Customer,
            r#"
            SELECT customer_id, full_name, email, phone, address
            FROM customers
            ORDER BY customer_id ASC
            "#
        )
        .fetch_all(executor)
        .await?;

        Ok(customers)
    }
}
