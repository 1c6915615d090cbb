//! Customer, user and employee records over a generic SeaORM repository, with office
//! payroll aggregates kept current by employee notifications.

#![warn(rustdoc::missing_crate_level_docs)]

pub mod config;
pub mod data;
pub mod error;
pub mod model;
pub mod notification;
pub mod service;
pub mod startup;
