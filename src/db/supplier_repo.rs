// src/db/supplier_repo.rs

use sqlx::{Executor, Postgres};

use crate::{
    common::error::AppError,
    models::supplier::{CreateSupplierPayload, Supplier},
};

#[derive(Clone, Default)]
pub struct SupplierRepository;

impl SupplierRepository {
    pub fn new() -> Self {
        Self
    }

    pub async fn create<'e, E>(
        &self,
        executor: E,
        payload: &CreateSupplierPayload,
    ) -> Result<Supplier, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let supplier = sqlx::query_as!(
            Supplier,
            r#"
            INSERT INTO suppliers (supplier_name, contact_email, contact_phone, address)
            VALUES ($1, $2, $3, $4)
            RETURNING supplier_id, supplier_name, contact_email, contact_phone, address
            "#,
            payload.supplier_name,
            payload.contact_email,
            payload.contact_phone,
            payload.address,
        )
        .fetch_one(executor)
        .await?;

        Ok(supplier)
    }

    pub async fn list<'e, E>(&self, executor: E) -> Result<Vec<Supplier>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let suppliers = sqlx::query_as!(
            Supplier,
            r#"
            SELECT supplier_id, supplier_name, contact_email, contact_phone, address
            FROM suppliers
            ORDER BY supplier_id ASC
            "#
        )
        .fetch_all(executor)
        .await?;

        Ok(suppliers)
    }

    /// Usado como pré-checagem antes de inserir produtos
    pub async fn exists<'e, E>(&self, executor: E, supplier_id: i64) -> Result<bool, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let exists = sqlx::query_scalar!(
            r#"SELECT EXISTS (SELECT 1 FROM suppliers WHERE supplier_id = $1) AS "exists!""#,
            supplier_id
        )
        .fetch_one(executor)
        .await?;

        Ok(exists)
    }
}
