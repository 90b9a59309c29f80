// src/docs.rs

use utoipa::OpenApi;
use crate::handlers;
use crate::models;

#[derive(OpenApi)]
#[openapi(
    info(title = "API Telepizza"),
    paths(
        handlers::root::welcome,

        // --- Customers ---
        handlers::customers::create_customer,
        handlers::customers::list_customers,
        handlers::customers::create_customers_bulk,

        // --- Employees ---
        handlers::employees::create_employee,
        handlers::employees::list_employees,
        handlers::employees::create_employees_bulk,

        // --- Suppliers ---
        handlers::suppliers::create_supplier,
        handlers::suppliers::list_suppliers,
        handlers::suppliers::create_suppliers_bulk,

        // --- Products ---
        handlers::products::create_product,
        handlers::products::list_products,
        handlers::products::create_products_bulk,

        // --- Orders ---
        handlers::orders::create_order,
        handlers::orders::list_orders,
        handlers::orders::create_orders_bulk,

        // --- Discounts ---
        handlers::discounts::create_discount,
        handlers::discounts::list_discounts,
        handlers::discounts::create_discounts_bulk,

        // --- Reports ---
        handlers::reports::customer_by_id,
        handlers::reports::customers_without_orders,
        handlers::reports::employees_without_orders,
        handlers::reports::max_discount,
        handlers::reports::min_discount,
        handlers::reports::avg_discount,
        handlers::reports::products_by_category,
        handlers::reports::orders_by_customer,
        handlers::reports::orders_between,
        handlers::reports::total_orders_per_customer,
        handlers::reports::total_sales_per_employee,
        handlers::reports::average_order_per_employee,
        handlers::reports::products_with_discounts,
        handlers::reports::order_details,
        handlers::reports::order_detail_by_id,
        handlers::reports::total_products_per_supplier,
    ),
    components(
        schemas(
            handlers::root::WelcomeMessage,

            // --- Entidades ---
            models::customer::Customer,
            models::employee::Employee,
            models::supplier::Supplier,
            models::product::Product,
            models::order::Order,
            models::discount::Discount,

            // --- Payloads ---
            models::customer::CreateCustomerPayload,
            models::employee::CreateEmployeePayload,
            models::supplier::CreateSupplierPayload,
            models::product::CreateProductPayload,
            models::order::CreateOrderPayload,
            models::discount::CreateDiscountPayload,

            // --- Relatórios ---
            models::reports::MaxDiscount,
            models::reports::MinDiscount,
            models::reports::AvgDiscount,
            models::reports::CustomerOrder,
            models::reports::ProductDiscount,
            models::reports::OrderDetail,
            models::reports::CustomerOrderCount,
            models::reports::EmployeeSales,
            models::reports::EmployeeAverageOrder,
            models::reports::SupplierProductCount,
        )
    ),
    tags(
        (name = "Root", description = "Boas-vindas"),
        (name = "Customers", description = "Clientes"),
        (name = "Employees", description = "Funcionários"),
        (name = "Suppliers", description = "Fornecedores"),
        (name = "Products", description = "Produtos do cardápio"),
        (name = "Orders", description = "Pedidos"),
        (name = "Discounts", description = "Descontos"),
        (name = "Reports", description = "Relatórios fixos (Query1..Query15)")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_lists_every_route() {
        let doc = ApiDoc::openapi();
        assert_eq!(doc.info.title, "API Telepizza");

        let paths = &doc.paths.paths;
        for path in ["/", "/customers/", "/products/bulk/", "/Query9", "/Query14/{id}", "/Query15"] {
            assert!(paths.contains_key(path), "missing {path}");
        }
        assert_eq!(paths.keys().filter(|p| p.starts_with("/Query")).count(), 16);
    }
}
