// src/test_support.rs
// Payloads e sementes compartilhados pelos testes.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use sqlx::PgPool;

use crate::{
    db::{
        CustomerRepository, DiscountRepository, EmployeeRepository, OrderRepository,
        ProductRepository, SupplierRepository,
    },
    models::{
        customer::{CreateCustomerPayload, Customer},
        discount::{CreateDiscountPayload, Discount},
        employee::{CreateEmployeePayload, Employee},
        order::{CreateOrderPayload, Order},
        product::{CreateProductPayload, Product},
        supplier::{CreateSupplierPayload, Supplier},
    },
};

pub fn customer_payload(name: &str) -> CreateCustomerPayload {
    CreateCustomerPayload {
        full_name: name.to_string(),
        email: format!("{}@example.com", name.to_lowercase()),
        phone: None,
        address: "Calle Mayor 1".to_string(),
    }
}

pub fn employee_payload(name: &str) -> CreateEmployeePayload {
    CreateEmployeePayload {
        full_name: name.to_string(),
        position: "Repartidor".to_string(),
        hire_date: NaiveDate::from_ymd_opt(2023, 6, 1).unwrap(),
        salary: Decimal::new(1200, 0),
    }
}

pub fn product_payload(name: &str, supplier_id: Option<i64>) -> CreateProductPayload {
    CreateProductPayload {
        product_name: name.to_string(),
        category: "Pizza".to_string(),
        price: Decimal::new(1095, 2),
        size: "Mediana".to_string(),
        supplier_id,
    }
}

pub fn supplier_payload(name: &str) -> CreateSupplierPayload {
    CreateSupplierPayload {
        supplier_name: name.to_string(),
        contact_email: None,
        contact_phone: None,
        address: None,
    }
}

pub fn discount_payload(name: &str, percent: Decimal, product_id: Option<i64>) -> CreateDiscountPayload {
    CreateDiscountPayload {
        discount_name: name.to_string(),
        discount_percent: percent,
        product_id,
        order_id: None,
    }
}

pub fn order_payload(customer_id: i64, employee_id: i64, order_date: NaiveDate) -> CreateOrderPayload {
    CreateOrderPayload {
        customer_id,
        order_date,
        total_amount: Decimal::new(2000, 2),
        employee_id,
    }
}

pub async fn seed_customer(pool: &PgPool, name: &str) -> Customer {
    CustomerRepository::new()
        .create(pool, &customer_payload(name))
        .await
        .unwrap()
}

pub async fn seed_employee(pool: &PgPool, name: &str) -> Employee {
    EmployeeRepository::new()
        .create(pool, &employee_payload(name))
        .await
        .unwrap()
}

pub async fn seed_supplier(pool: &PgPool, name: &str) -> Supplier {
    SupplierRepository::new()
        .create(pool, &supplier_payload(name))
        .await
        .unwrap()
}

pub async fn seed_product(pool: &PgPool, name: &str, category: &str, supplier_id: Option<i64>) -> Product {
    let mut payload = product_payload(name, supplier_id);
    payload.category = category.to_string();
    ProductRepository::new().create(pool, &payload).await.unwrap()
}

pub async fn seed_order(
    pool: &PgPool,
    customer_id: i64,
    employee_id: i64,
    order_date: NaiveDate,
    total_amount: Decimal,
) -> Order {
    let mut payload = order_payload(customer_id, employee_id, order_date);
    payload.total_amount = total_amount;
    OrderRepository::new().create(pool, &payload).await.unwrap()
}

pub async fn seed_discount(pool: &PgPool, name: &str, percent: Decimal, product_id: Option<i64>) -> Discount {
    DiscountRepository::new()
        .create(pool, &discount_payload(name, percent, product_id))
        .await
        .unwrap()
}
