pub mod customer;
pub mod discount;
pub mod employee;
pub mod order;
pub mod product;
pub mod reports;
pub mod supplier;
