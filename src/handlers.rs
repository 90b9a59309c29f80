pub mod customers;
pub mod discounts;
pub mod employees;
pub mod orders;
pub mod products;
pub mod reports;
pub mod root;
pub mod suppliers;
