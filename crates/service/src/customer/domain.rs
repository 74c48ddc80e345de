use serde::{Deserialize, Serialize};

/// Stored customer record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub age: i32,
}

/// Customer awaiting an id from storage
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCustomer {
    pub name: String,
    pub email: String,
    pub age: i32,
}

impl NewCustomer {
    pub fn with_id(self, id: i32) -> Customer {
        Customer { id, name: self.name, email: self.email, age: self.age }
    }
}

/// Registration input
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomerRegistrationRequest {
    pub name: String,
    pub email: String,
    pub age: i32,
}

/// Partial update input; `None` leaves the field as is
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CustomerUpdateRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub age: Option<i32>,
}

impl From<models::customer::Model> for Customer {
    fn from(m: models::customer::Model) -> Self {
        Customer { id: m.id, name: m.name, email: m.email, age: m.age }
    }
}
