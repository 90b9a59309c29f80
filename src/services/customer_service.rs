// src/services/customer_service.rs

use sqlx::{Acquire, Executor, Postgres};

use crate::{
    common::error::AppError,
    db::CustomerRepository,
    models::customer::{CreateCustomerPayload, Customer},
};

#[derive(Clone)]
pub struct CustomerService {
    repo: CustomerRepository,
}

impl CustomerService {
    pub fn new(repo: CustomerRepository) -> Self {
        Self { repo }
    }

    pub async fn create_customer<'a, A>(
        &self,
        conn: A,
        payload: &CreateCustomerPayload,
    ) -> Result<Customer, AppError>
    where
        A: Acquire<'a, Database = Postgres>,
    {
        let mut tx = conn.begin().await?;
        let customer = self.repo.create(&mut *tx, payload).await?;
        tx.commit().await?;

        tracing::debug!(customer_id = customer.customer_id, "cliente criado");
        Ok(customer)
    }

    pub async fn list_customers<'e, E>(&self, executor: E) -> Result<Vec<Customer>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        self.repo.list(executor).await
    }

    // Um INSERT ... RETURNING por linha, tudo na mesma transação:
    // cada item recebe o id que o banco realmente gravou.
    pub async fn create_customers_bulk<'a, A>(
        &self,
        conn: A,
        payloads: &[CreateCustomerPayload],
    ) -> Result<Vec<Customer>, AppError>
    where
        A: Acquire<'a, Database = Postgres>,
    {
        let mut tx = conn.begin().await?;

        let mut customers = Vec::with_capacity(payloads.len());
        for payload in payloads {
            customers.push(self.repo.create(&mut *tx, payload).await?);
        }

        tx.commit().await?;

        tracing::info!(count = customers.len(), "lote de clientes criado");
        Ok(customers)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::customer_payload;
    use sqlx::PgPool;

    fn service() -> CustomerService {
        CustomerService::new(CustomerRepository::new())
    }

    #[sqlx::test(migrator = "crate::db::MIGRATOR")]
    #[ignore = "requires a PostgreSQL DATABASE_URL"]
    async fn created_customer_is_listed(pool: PgPool) {
        let service = service();
        let created = service
            .create_customer(&pool, &customer_payload("Ana"))
            .await
            .unwrap();

        let listed = service.list_customers(&pool).await.unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].customer_id, created.customer_id);
        assert_eq!(listed[0].email, "ana@example.com");
    }

    #[sqlx::test(migrator = "crate::db::MIGRATOR")]
    #[ignore = "requires a PostgreSQL DATABASE_URL"]
    async fn bulk_ids_are_distinct_and_ascending(pool: PgPool) {
        let payloads: Vec<_> = ["Ana", "Bea", "Carla", "Dani"]
            .into_iter()
            .map(customer_payload)
            .collect();

        let created = service().create_customers_bulk(&pool, &payloads).await.unwrap();
        assert_eq!(created.len(), 4);

        for pair in created.windows(2) {
            assert_eq!(pair[1].customer_id, pair[0].customer_id + 1);
        }
        for (record, payload) in created.iter().zip(&payloads) {
            assert_eq!(record.full_name, payload.full_name);
        }
    }

    #[sqlx::test(migrator = "crate::db::MIGRATOR")]
    #[ignore = "requires a PostgreSQL DATABASE_URL"]
    async fn concurrent_bulk_writers_get_their_own_ids(pool: PgPool) {
        let service = service();
        let first: Vec<_> = (0..20).map(|i| customer_payload(&format!("A{i}"))).collect();
        let second: Vec<_> = (0..20).map(|i| customer_payload(&format!("B{i}"))).collect();

        let (a, b) = tokio::join!(
            service.create_customers_bulk(&pool, &first),
            service.create_customers_bulk(&pool, &second),
        );
        let (a, b) = (a.unwrap(), b.unwrap());

        let stored = service.list_customers(&pool).await.unwrap();
        assert_eq!(stored.len(), 40);

        // Cada registro devolvido tem que bater com a linha gravada sob o mesmo id
        for record in a.iter().chain(b.iter()) {
            let row = stored
                .iter()
                .find(|c| c.customer_id == record.customer_id)
                .unwrap();
            assert_eq!(row.full_name, record.full_name);
        }
    }

    #[sqlx::test(migrator = "crate::db::MIGRATOR")]
    #[ignore = "requires a PostgreSQL DATABASE_URL"]
    async fn empty_batch_creates_nothing(pool: PgPool) {
        let created = service().create_customers_bulk(&pool, &[]).await.unwrap();
        assert!(created.is_empty());
    }
}
