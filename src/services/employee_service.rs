// src/services/employee_service.rs

use sqlx::{Acquire, Executor, Postgres};

use crate::{
    common::error::AppError,
    db::EmployeeRepository,
    models::employee::{CreateEmployeePayload, Employee},
};

#[derive(Clone)]
pub struct EmployeeService {
    repo: EmployeeRepository,
}

impl EmployeeService {
    pub fn new(repo: EmployeeRepository) -> Self {
        Self { repo }
    }

    pub async fn create_employee<'a, A>(
        &self,
        conn: A,
        payload: &CreateEmployeePayload,
    ) -> Result<Employee, AppError>
    where
        A: Acquire<'a, Database = Postgres>,
    {
        let mut tx = conn.begin().await?;
        let employee = self.repo.create(&mut *tx, payload).await?;
        tx.commit().await?;

        Ok(employee)
    }

    pub async fn list_employees<'e, E>(&self, executor: E) -> Result<Vec<Employee>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        self.repo.list(executor).await
    }

    pub async fn create_employees_bulk<'a, A>(
        &self,
        conn: A,
        payloads: &[CreateEmployeePayload],
    ) -> Result<Vec<Employee>, AppError>
    where
        A: Acquire<'a, Database = Postgres>,
    {
        let mut tx = conn.begin().await?;

        let mut employees = Vec::with_capacity(payloads.len());
        for payload in payloads {
            employees.push(self.repo.create(&mut *tx, payload).await?);
        }

        tx.commit().await?;

        tracing::info!(count = employees.len(), "lote de funcionários criado");
        Ok(employees)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::employee_payload;
    use rust_decimal::Decimal;
    use sqlx::PgPool;

    #[sqlx::test(migrator = "crate::db::MIGRATOR")]
    #[ignore = "requires a PostgreSQL DATABASE_URL"]
    async fn salary_round_trips_through_numeric(pool: PgPool) {
        let service = EmployeeService::new(EmployeeRepository::new());
        let mut payload = employee_payload("Luis");
        payload.salary = Decimal::new(145075, 2);

        let created = service.create_employee(&pool, &payload).await.unwrap();
        assert_eq!(created.salary, Decimal::new(145075, 2));
        assert_eq!(created.hire_date, payload.hire_date);
    }

    #[sqlx::test(migrator = "crate::db::MIGRATOR")]
    #[ignore = "requires a PostgreSQL DATABASE_URL"]
    async fn negative_salary_violates_the_check_constraint(pool: PgPool) {
        let service = EmployeeService::new(EmployeeRepository::new());
        let mut payload = employee_payload("Luis");
        payload.salary = Decimal::NEGATIVE_ONE;

        let err = service.create_employee(&pool, &payload).await.unwrap_err();
        assert!(matches!(err, AppError::DatabaseError(_)));
        assert!(service.list_employees(&pool).await.unwrap().is_empty());
    }
}
