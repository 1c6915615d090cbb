use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    /// Brazilian individual taxpayer registry number.
    pub cpf: String,
    pub name: String,
    pub email: String,
    pub phone: String,
}

impl User {
    pub fn new(
        cpf: impl Into<String>,
        name: impl Into<String>,
        email: impl Into<String>,
        phone: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            cpf: cpf.into(),
            name: name.into(),
            email: email.into(),
            phone: phone.into(),
        }
    }
}
