//! Customer transport types

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::customer::{Customer, CustomerId, CustomerRegistrationResult};

/// Customer representation used at the API boundary
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct CustomerView {
    #[serde(default)]
    pub id: Option<i64>,

    #[validate(length(min = 1, max = 100, message = "name is required (max 100 characters)"))]
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(length(max = 20))]
    pub gender: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(range(max = 150, message = "age cannot exceed 150"))]
    pub age: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, max = 20))]
    pub identification: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(length(max = 200))]
    pub address: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(length(max = 20))]
    pub phone: Option<String>,

    #[serde(default = "default_active")]
    pub active: bool,
}

fn default_active() -> bool {
    true
}

impl From<Customer> for CustomerView {
    fn from(customer: Customer) -> Self {
        Self {
            id: customer.id.map(i64::from),
            name: customer.name,
            gender: customer.gender,
            age: customer.age,
            identification: customer.identification,
            address: customer.address,
            phone: customer.phone,
            active: customer.active,
        }
    }
}

/// Non-positive ids can never belong to a stored customer and are dropped.
impl From<CustomerView> for Customer {
    fn from(view: CustomerView) -> Self {
        Self {
            id: view.id.and_then(|id| CustomerId::new(id).ok()),
            name: view.name,
            gender: view.gender,
            age: view.age,
            identification: view.identification,
            address: view.address,
            phone: view.phone,
            active: view.active,
        }
    }
}

impl From<&CustomerView> for CustomerRegistrationResult {
    fn from(view: &CustomerView) -> Self {
        Self {
            id: view.id.and_then(|id| CustomerId::new(id).ok()),
            name: view.name.clone(),
            identification: view.identification.clone(),
            active: view.active,
            registered_at: None,
        }
    }
}
