pub mod customer_repo;
pub use customer_repo::CustomerRepository;
pub mod employee_repo;
pub use employee_repo::EmployeeRepository;
pub mod supplier_repo;
pub use supplier_repo::SupplierRepository;
pub mod product_repo;
pub use product_repo::ProductRepository;
pub mod order_repo;
pub use order_repo::OrderRepository;
pub mod discount_repo;
pub use discount_repo::DiscountRepository;
pub mod report_repo;
pub use report_repo::ReportRepository;

// Migrações embutidas no binário (pasta ./migrations)
pub static MIGRATOR: sqlx::migrate::Migrator = sqlx::migrate!();
