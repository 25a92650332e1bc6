//! Customer entity and related types

use serde::{Deserialize, Serialize};

use super::validation::{
    validate_customer_id, validate_customer_name, validate_identification,
    CustomerValidationError,
};

/// Customer identifier - positive number assigned by the service
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct CustomerId(i64);

impl CustomerId {
    /// Create a new CustomerId after validation
    pub fn new(id: i64) -> Result<Self, CustomerValidationError> {
        validate_customer_id(id)?;
        Ok(Self(id))
    }

    /// Get the inner numeric value
    pub fn value(&self) -> i64 {
        self.0
    }
}

impl TryFrom<i64> for CustomerId {
    type Error = CustomerValidationError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<CustomerId> for i64 {
    fn from(id: CustomerId) -> Self {
        id.0
    }
}

impl std::fmt::Display for CustomerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Customer entity
///
/// `id` stays `None` until the customer has been stored; the service assigns it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    pub id: Option<CustomerId>,
    pub name: String,
    pub gender: Option<String>,
    pub age: Option<u32>,
    pub identification: Option<String>,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub active: bool,
}

impl Customer {
    /// Create a new, not yet stored, active customer
    pub fn new(name: impl Into<String>) -> Result<Self, CustomerValidationError> {
        let customer = Self {
            id: None,
            name: name.into(),
            gender: None,
            age: None,
            identification: None,
            address: None,
            phone: None,
            active: true,
        };

        customer.validate()?;
        Ok(customer)
    }

    /// Set the identifier (builder pattern)
    pub fn with_id(mut self, id: CustomerId) -> Self {
        self.id = Some(id);
        self
    }

    pub fn with_identification(mut self, identification: impl Into<String>) -> Self {
        self.identification = Some(identification.into());
        self
    }

    pub fn with_gender(mut self, gender: impl Into<String>) -> Self {
        self.gender = Some(gender.into());
        self
    }

    pub fn with_age(mut self, age: u32) -> Self {
        self.age = Some(age);
        self
    }

    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.address = Some(address.into());
        self
    }

    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }

    /// Check the name and, when present, the identification
    pub fn validate(&self) -> Result<(), CustomerValidationError> {
        validate_customer_name(&self.name)?;

        if let Some(identification) = &self.identification {
            validate_identification(identification)?;
        }

        Ok(())
    }
}
