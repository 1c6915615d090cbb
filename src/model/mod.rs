//! Domain models.
//!
//! Relational entities (customers, users, employees), the office document aggregate, and the
//! commands and notifications that flow between the employee service and its subscribers.

pub mod command;
pub mod customer;
pub mod employee;
pub mod notification;
pub mod office;
pub mod user;
