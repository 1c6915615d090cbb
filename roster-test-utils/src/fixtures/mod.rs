//! Test fixture modules for database row creation.
//!
//! - `customer` - Customers and their addresses
//! - `employee` - Employees assigned to offices
//! - `user` - Users
//! - `factory` - Pure builders for entity models, without database access

pub mod customer;
pub mod employee;
pub mod factory;
pub mod user;
