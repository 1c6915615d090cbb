pub use super::customer::Entity as Customer;
pub use super::customer_address::Entity as CustomerAddress;
pub use super::employee::Entity as Employee;
pub use super::user::Entity as User;
