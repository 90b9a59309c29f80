// src/services/report_service.rs

use chrono::NaiveDate;
use sqlx::{Executor, Postgres};

use crate::{
    common::error::AppError,
    db::ReportRepository,
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

#[derive(Clone)]
pub struct ReportService {
    repo: ReportRepository,
}

impl ReportService {
    pub fn new(repo: ReportRepository) -> Self {
        Self { repo }
    }

    pub async fn customer_by_id<'e, E>(&self, executor: E, customer_id: i64) -> Result<Vec<Customer>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        self.repo.customer_by_id(executor, customer_id).await
    }

    pub async fn customers_without_orders<'e, E>(&self, executor: E) -> Result<Vec<Customer>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        self.repo.customers_without_orders(executor).await
    }

    pub async fn employees_without_orders<'e, E>(&self, executor: E) -> Result<Vec<Employee>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        self.repo.employees_without_orders(executor).await
    }

    pub async fn max_discount<'e, E>(&self, executor: E) -> Result<MaxDiscount, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        self.repo.max_discount(executor).await
    }

    pub async fn min_discount<'e, E>(&self, executor: E) -> Result<MinDiscount, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        self.repo.min_discount(executor).await
    }

    pub async fn avg_discount<'e, E>(&self, executor: E) -> Result<AvgDiscount, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        self.repo.avg_discount(executor).await
    }

    pub async fn products_by_category<'e, E>(&self, executor: E, category: &str) -> Result<Vec<Product>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        self.repo.products_by_category(executor, category).await
    }

    pub async fn orders_by_customer<'e, E>(&self, executor: E, customer_id: i64) -> Result<Vec<CustomerOrder>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        self.repo.orders_by_customer(executor, customer_id).await
    }

    // Intervalo invertido (start > end) simplesmente não retorna nada
    pub async fn orders_between<'e, E>(
        &self,
        executor: E,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Result<Vec<Order>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        self.repo.orders_between(executor, start_date, end_date).await
    }

    pub async fn total_orders_per_customer<'e, E>(&self, executor: E) -> Result<Vec<CustomerOrderCount>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        self.repo.total_orders_per_customer(executor).await
    }

    pub async fn total_sales_per_employee<'e, E>(&self, executor: E) -> Result<Vec<EmployeeSales>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        self.repo.total_sales_per_employee(executor).await
    }

    pub async fn average_order_per_employee<'e, E>(&self, executor: E) -> Result<Vec<EmployeeAverageOrder>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        self.repo.average_order_per_employee(executor).await
    }

    pub async fn products_with_discounts<'e, E>(&self, executor: E) -> Result<Vec<ProductDiscount>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        self.repo.products_with_discounts(executor).await
    }

    pub async fn order_details<'e, E>(&self, executor: E) -> Result<Vec<OrderDetail>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        self.repo.order_details(executor).await
    }

    pub async fn order_detail_by_id<'e, E>(&self, executor: E, order_id: i64) -> Result<Vec<OrderDetail>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        self.repo.order_detail_by_id(executor, order_id).await
    }

    pub async fn total_products_per_supplier<'e, E>(&self, executor: E) -> Result<Vec<SupplierProductCount>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        self.repo.total_products_per_supplier(executor).await
    }
}
