// src/services/product_service.rs

use sqlx::{Acquire, Executor, PgConnection, Postgres};

use crate::{
    common::error::AppError,
    db::{ProductRepository, SupplierRepository},
    models::product::{CreateProductPayload, Product},
};

#[derive(Clone)]
pub struct ProductService {
    product_repo: ProductRepository,
    supplier_repo: SupplierRepository,
}

impl ProductService {
    pub fn new(product_repo: ProductRepository, supplier_repo: SupplierRepository) -> Self {
        Self { product_repo, supplier_repo }
    }

    // Pré-checagem do fornecedor; roda na mesma transação do INSERT.
    async fn ensure_supplier_exists(
        &self,
        conn: &mut PgConnection,
        supplier_id: Option<i64>,
    ) -> Result<(), AppError> {
        if let Some(id) = supplier_id {
            if !self.supplier_repo.exists(&mut *conn, id).await? {
                tracing::warn!(supplier_id = id, "produto rejeitado: fornecedor inexistente");
                return Err(AppError::SupplierNotFound(id));
            }
        }
        Ok(())
    }

    pub async fn create_product<'a, A>(
        &self,
        conn: A,
        payload: &CreateProductPayload,
    ) -> Result<Product, AppError>
    where
        A: Acquire<'a, Database = Postgres>,
    {
        let mut tx = conn.begin().await?;

        self.ensure_supplier_exists(&mut tx, payload.supplier_id).await?;
        let product = self.product_repo.create(&mut *tx, payload).await?;

        tx.commit().await?;
        Ok(product)
    }

    pub async fn list_products<'e, E>(&self, executor: E) -> Result<Vec<Product>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        self.product_repo.list(executor).await
    }

    pub async fn create_products_bulk<'a, A>(
        &self,
        conn: A,
        payloads: &[CreateProductPayload],
    ) -> Result<Vec<Product>, AppError>
    where
        A: Acquire<'a, Database = Postgres>,
    {
        let mut tx = conn.begin().await?;

        let mut products = Vec::with_capacity(payloads.len());
        for payload in payloads {
            self.ensure_supplier_exists(&mut tx, payload.supplier_id).await?;
            products.push(self.product_repo.create(&mut *tx, payload).await?);
        }

        tx.commit().await?;

        tracing::info!(count = products.len(), "lote de produtos criado");
        Ok(products)
    }
}
