use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A customer and, when loaded, its postal addresses.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub phone: String,
    /// Navigation property, `None` when not loaded.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub addresses: Option<Vec<Address>>,
}

impl Customer {
    /// Name of the addresses navigation property.
    pub const ADDRESSES: &'static str = "addresses";

    /// Creates a customer with a fresh id and no addresses loaded.
    pub fn new(name: impl Into<String>, email: impl Into<String>, phone: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            email: email.into(),
            phone: phone.into(),
            addresses: None,
        }
    }

    /// Attaches addresses to the customer.
    pub fn with_addresses(mut self, addresses: Vec<Address>) -> Self {
        self.addresses = Some(addresses);
        self
    }
}

/// Postal address owned by a customer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    pub id: Uuid,
    pub street: String,
    pub city: String,
    pub postal_code: String,
}

impl Address {
    pub fn new(
        street: impl Into<String>,
        city: impl Into<String>,
        postal_code: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            street: street.into(),
            city: city.into(),
            postal_code: postal_code.into(),
        }
    }
}
