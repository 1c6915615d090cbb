pub mod prelude;

pub mod customer;
pub mod customer_address;
pub mod employee;
pub mod user;
