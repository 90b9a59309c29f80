// src/db/employee_repo.rs

use sqlx::{Executor, Postgres};

use crate::{
    common::error::AppError,
    models::employee::{CreateEmployeePayload, Employee},
};

#[derive(Clone, Default)]
pub struct EmployeeRepository;

impl EmployeeRepository {
    pub fn new() -> Self {
        Self
    }

    pub async fn create<'e, E>(
        &self,
        executor: E,
        payload: &CreateEmployeePayload,
    ) -> Result<Employee, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let employee = sqlx::query_as!(
            Employee,
            r#"
            INSERT INTO employees (full_name, position, hire_date, salary)
            VALUES ($1, $2, $3, $4)
            RETURNING employee_id, full_name, position, hire_date, salary
            "#,
            payload.full_name,
            payload.position,
            payload.hire_date,
            payload.salary,
        )
        .fetch_one(executor)
        .await?;

        Ok(employee)
    }

    pub async fn list<'e, E>(&self, executor: E) -> Result<Vec<Employee>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let employees = sqlx::query_as!(
            Employee,
            r#"
            SELECT employee_id, full_name, position, hire_date, salary
            FROM employees
            ORDER BY employee_id ASC
            "#
        )
        .fetch_all(executor)
        .await?;

        Ok(employees)
    }
}
