// src/db/report_repo.rs

use chrono::NaiveDate;
use sqlx::{Executor, Postgres};

use crate::{
    common::error::AppError,
    models::{
        customer::Customer,
        employee::Employee,
        order::Order,
        product::Product,
        reports::{
            AvgDiscount, CustomerOrder, CustomerOrderCount, EmployeeAverageOrder,
            EmployeeSales, MaxDiscount, MinDiscount, OrderDetail, ProductDiscount,
            SupplierProductCount,
        },
    },
};

// Consultas fixas de relatório (Query1..Query15)
#[derive(Clone, Default)]
pub struct ReportRepository;

impl ReportRepository {
    pub fn new() -> Self {
        Self
    }

    // Query1: cliente por id (lista com 0 ou 1 elemento)
    pub async fn customer_by_id<'e, E>(
        &self,
        executor: E,
        customer_id: i64,
    ) -> Result<Vec<Customer>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let rows = sqlx::query_as!(
            Customer,
            r#"
            SELECT customer_id, full_name, email, phone, address
            FROM customers
            WHERE customer_id = $1
            "#,
            customer_id,
        )
        .fetch_all(executor)
        .await?;

        Ok(rows)
    }

    // Query2: clientes sem pedidos
    pub async fn customers_without_orders<'e, E>(
        &self,
        executor: E,
    ) -> Result<Vec<Customer>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let rows = sqlx::query_as!(
            Customer,
            r#"
            SELECT c.customer_id, c.full_name, c.email, c.phone, c.address
            FROM customers c
            LEFT JOIN orders o ON o.customer_id = c.customer_id
            WHERE o.order_id IS NULL
            ORDER BY c.customer_id ASC
            "#
        )
        .fetch_all(executor)
        .await?;

        Ok(rows)
    }

    // Query3: funcionários sem pedidos
    pub async fn employees_without_orders<'e, E>(
        &self,
        executor: E,
    ) -> Result<Vec<Employee>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let rows = sqlx::query_as!(
            Employee,
            r#"
            SELECT e.employee_id, e.full_name, e.position, e.hire_date, e.salary
            FROM orders o
            RIGHT JOIN employees e ON e.employee_id = o.employee_id
            WHERE o.order_id IS NULL
            ORDER BY e.employee_id ASC
            "#
        )
        .fetch_all(executor)
        .await?;

        Ok(rows)
    }

    // Query4
    pub async fn max_discount<'e, E>(&self, executor: E) -> Result<MaxDiscount, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let row = sqlx::query_as!(
            MaxDiscount,
            "SELECT MAX(discount_percent) AS max_discount FROM discounts"
        )
        .fetch_one(executor)
        .await?;

        Ok(row)
    }

    // Query5
    pub async fn min_discount<'e, E>(&self, executor: E) -> Result<MinDiscount, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let row = sqlx::query_as!(
            MinDiscount,
            "SELECT MIN(discount_percent) AS min_discount FROM discounts"
        )
        .fetch_one(executor)
        .await?;

        Ok(row)
    }

    // Query6
    pub async fn avg_discount<'e, E>(&self, executor: E) -> Result<AvgDiscount, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let row = sqlx::query_as!(
            AvgDiscount,
            "SELECT AVG(discount_percent) AS avg_discount FROM discounts"
        )
        .fetch_one(executor)
        .await?;

        Ok(row)
    }

    // Query7: produtos de uma categoria
    pub async fn products_by_category<'e, E>(
        &self,
        executor: E,
        category: &str,
    ) -> Result<Vec<Product>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let rows = sqlx::query_as!(
            Product,
            r#"
            SELECT product_id, product_name, category, price, size, supplier_id
            FROM products
            WHERE category = $1
            ORDER BY product_id ASC
            "#,
            category,
        )
        .fetch_all(executor)
        .await?;

        Ok(rows)
    }

    // Query8: pedidos de um cliente, com o nome dele
    pub async fn orders_by_customer<'e, E>(
        &self,
        executor: E,
        customer_id: i64,
    ) -> Result<Vec<CustomerOrder>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let rows = sqlx::query_as!(
            CustomerOrder,
            r#"
            SELECT o.order_id, o.order_date, o.total_amount, c.customer_id, c.full_name
            FROM orders o
            INNER JOIN customers c ON c.customer_id = o.customer_id
            WHERE o.customer_id = $1
            ORDER BY o.order_id ASC
            "#,
            customer_id,
        )
        .fetch_all(executor)
        .await?;

        Ok(rows)
    }

    // Query9: pedidos entre duas datas (limites inclusivos)
    pub async fn orders_between<'e, E>(
        &self,
        executor: E,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Result<Vec<Order>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let rows = sqlx::query_as!(
            Order,
            r#"
            SELECT order_id, customer_id, order_date, total_amount, employee_id
            FROM orders
            WHERE order_date BETWEEN $1 AND $2
            ORDER BY order_date ASC, order_id ASC
            "#,
            start_date,
            end_date,
        )
        .fetch_all(executor)
        .await?;

        Ok(rows)
    }

    // Query10
    pub async fn total_orders_per_customer<'e, E>(
        &self,
        executor: E,
    ) -> Result<Vec<CustomerOrderCount>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let rows = sqlx::query_as!(
            CustomerOrderCount,
            r#"
            SELECT c.customer_id, c.full_name, COUNT(o.order_id) AS "total_orders!"
            FROM customers c
            LEFT JOIN orders o ON o.customer_id = c.customer_id
            GROUP BY c.customer_id, c.full_name
            ORDER BY c.customer_id ASC
            "#
        )
        .fetch_all(executor)
        .await?;

        Ok(rows)
    }

    // Query11
    pub async fn total_sales_per_employee<'e, E>(
        &self,
        executor: E,
    ) -> Result<Vec<EmployeeSales>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let rows = sqlx::query_as!(
            EmployeeSales,
            r#"
            SELECT e.employee_id, e.full_name, SUM(o.total_amount) AS total_sales
            FROM employees e
            LEFT JOIN orders o ON o.employee_id = e.employee_id
            GROUP BY e.employee_id, e.full_name
            ORDER BY e.employee_id ASC
            "#
        )
        .fetch_all(executor)
        .await?;

        Ok(rows)
    }

    // Query12
    pub async fn average_order_per_employee<'e, E>(
        &self,
        executor: E,
    ) -> Result<Vec<EmployeeAverageOrder>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let rows = sqlx::query_as!(
            EmployeeAverageOrder,
            r#"
            SELECT e.employee_id, e.full_name, AVG(o.total_amount) AS average_order_amount
            FROM employees e
            LEFT JOIN orders o ON o.employee_id = e.employee_id
            GROUP BY e.employee_id, e.full_name
            ORDER BY e.employee_id ASC
            "#
        )
        .fetch_all(executor)
        .await?;

        Ok(rows)
    }

    // Query13: produtos com seus descontos (sem desconto => campos nulos)
    pub async fn products_with_discounts<'e, E>(
        &self,
        executor: E,
    ) -> Result<Vec<ProductDiscount>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let rows = sqlx::query_as!(
            ProductDiscount,
            r#"
            SELECT
                p.product_id, p.product_name,
                d.discount_id AS "discount_id?",
                d.discount_name AS "discount_name?",
                d.discount_percent AS "discount_percent?"
            FROM products p
            LEFT JOIN discounts d ON d.product_id = p.product_id
            ORDER BY p.product_id ASC, d.discount_id ASC
            "#
        )
        .fetch_all(executor)
        .await?;

        Ok(rows)
    }

    // Query14: detalhe dos pedidos (todos)
    pub async fn order_details<'e, E>(&self, executor: E) -> Result<Vec<OrderDetail>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let rows = sqlx::query_as!(
            OrderDetail,
            r#"
            SELECT
                o.order_id, o.order_date, o.total_amount,
                c.customer_id, c.full_name AS customer_name,
                e.employee_id, e.full_name AS employee_name
            FROM orders o
            INNER JOIN customers c ON c.customer_id = o.customer_id
            INNER JOIN employees e ON e.employee_id = o.employee_id
            ORDER BY o.order_id ASC
            "#
        )
        .fetch_all(executor)
        .await?;

        Ok(rows)
    }

    // Query14/{id}
    pub async fn order_detail_by_id<'e, E>(
        &self,
        executor: E,
        order_id: i64,
    ) -> Result<Vec<OrderDetail>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let rows = sqlx::query_as!(
            OrderDetail,
            r#"
            SELECT
                o.order_id, o.order_date, o.total_amount,
                c.customer_id, c.full_name AS customer_name,
                e.employee_id, e.full_name AS employee_name
            FROM orders o
            INNER JOIN customers c ON c.customer_id = o.customer_id
            INNER JOIN employees e ON e.employee_id = o.employee_id
            WHERE o.order_id = $1
            "#,
            order_id,
        )
        .fetch_all(executor)
        .await?;

        Ok(rows)
    }

    // Query15
    pub async fn total_products_per_supplier<'e, E>(
        &self,
        executor: E,
    ) -> Result<Vec<SupplierProductCount>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let rows = sqlx::query_as!(
            SupplierProductCount,
            r#"
            SELECT s.supplier_id, s.supplier_name, COUNT(p.product_id) AS "total_products!"
            FROM suppliers s
            LEFT JOIN products p ON p.supplier_id = s.supplier_id
            GROUP BY s.supplier_id, s.supplier_name
            ORDER BY s.supplier_id ASC
            "#
        )
        .fetch_all(executor)
        .await?;

        Ok(rows)
    }
}
