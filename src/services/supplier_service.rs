// src/services/supplier_service.rs

use sqlx::{Acquire, Executor, Postgres};

use crate::{
    common::error::AppError,
    db::SupplierRepository,
    models::supplier::{CreateSupplierPayload, Supplier},
};

#[derive(Clone)]
pub struct SupplierService {
    repo: SupplierRepository,
}

impl SupplierService {
    pub fn new(repo: SupplierRepository) -> Self {
        Self { repo }
    }

    pub async fn create_supplier<'a, A>(
        &self,
        conn: A,
        payload: &CreateSupplierPayload,
    ) -> Result<Supplier, AppError>
    where
        A: Acquire<'a, Database = Postgres>,
    {
        let mut tx = conn.begin().await?;
        let supplier = self.repo.create(&mut *tx, payload).await?;
        tx.commit().await?;

        Ok(supplier)
    }

    pub async fn list_suppliers<'e, E>(&self, executor: E) -> Result<Vec<Supplier>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        self.repo.list(executor).await
    }

    pub async fn create_suppliers_bulk<'a, A>(
        &self,
        conn: A,
        payloads: &[CreateSupplierPayload],
    ) -> Result<Vec<Supplier>, AppError>
    where
        A: Acquire<'a, Database = Postgres>,
    {
        let mut tx = conn.begin().await?;

        let mut suppliers = Vec::with_capacity(payloads.len());
        for payload in payloads {
            suppliers.push(self.repo.create(&mut *tx, payload).await?);
        }

        tx.commit().await?;

        tracing::info!(count = suppliers.len(), "lote de fornecedores criado");
        Ok(suppliers)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::supplier_payload;
    use sqlx::PgPool;

    fn service() -> SupplierService {
        SupplierService::new(SupplierRepository::new())
    }

    #[sqlx::test(migrator = "crate::db::MIGRATOR")]
    #[ignore = "requires a PostgreSQL DATABASE_URL"]
    async fn created_supplier_is_listed(pool: PgPool) {
        let service = service();
        let mut payload = supplier_payload("Harinas del Sur");
        payload.contact_email = Some("ventas@harinas.es".to_string());

        let created = service.create_supplier(&pool, &payload).await.unwrap();

        let listed = service.list_suppliers(&pool).await.unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].supplier_id, created.supplier_id);
        assert_eq!(listed[0].contact_email.as_deref(), Some("ventas@harinas.es"));
        assert_eq!(listed[0].address, None);
    }

    #[sqlx::test(migrator = "crate::db::MIGRATOR")]
    #[ignore = "requires a PostgreSQL DATABASE_URL"]
    async fn bulk_suppliers_get_ascending_ids(pool: PgPool) {
        let payloads: Vec<_> = ["Harinas", "Quesos", "Tomates"]
            .into_iter()
            .map(supplier_payload)
            .collect();

        let created = service().create_suppliers_bulk(&pool, &payloads).await.unwrap();
        assert_eq!(created.len(), 3);

        for pair in created.windows(2) {
            assert_eq!(pair[1].supplier_id, pair[0].supplier_id + 1);
        }
        for (record, payload) in created.iter().zip(&payloads) {
            assert_eq!(record.supplier_name, payload.supplier_name);
        }
    }
}
