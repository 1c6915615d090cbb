//! Service layer.
//!
//! Services run commands against the repositories and publish the resulting notifications.

pub mod employee;
