//! Result of the validated registration flow

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::entity::{Customer, CustomerId};

/// Projection of a customer returned by the validated registration flow.
///
/// The endpoint builds it from the request before registration, so `id` and
/// `registered_at` are only filled in once the service has stored the customer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomerRegistrationResult {
    pub id: Option<CustomerId>,
    pub name: String,
    pub identification: Option<String>,
    pub active: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub registered_at: Option<DateTime<Utc>>,
}

impl From<&Customer> for CustomerRegistrationResult {
    fn from(customer: &Customer) -> Self {
        Self {
            id: customer.id,
            name: customer.name.clone(),
            identification: customer.identification.clone(),
            active: customer.active,
            registered_at: None,
        }
    }
}

impl From<CustomerRegistrationResult> for Customer {
    fn from(registration: CustomerRegistrationResult) -> Self {
        Self {
            id: registration.id,
            name: registration.name,
            gender: None,
            age: None,
            identification: registration.identification,
            address: None,
            phone: None,
            active: registration.active,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_projection_from_customer() {
        let customer = Customer::new("Acme")
            .unwrap()
            .with_id(CustomerId::new(5).unwrap())
            .with_identification("0991234567001")
            .with_phone("022555666");

        let registration = CustomerRegistrationResult::from(&customer);

        assert_eq!(registration.id, customer.id);
        assert_eq!(registration.name, "Acme");
        assert_eq!(registration.identification.as_deref(), Some("0991234567001"));
        assert!(registration.active);
        assert!(registration.registered_at.is_none());
    }

    #[test]
    fn test_carried_fields_survive_conversion() {
        let registration = CustomerRegistrationResult {
            id: None,
            name: "Marianela Montalvo".to_string(),
            identification: Some("1723456789".to_string()),
            active: false,
            registered_at: None,
        };

        let customer = Customer::from(registration.clone());
        assert_eq!(CustomerRegistrationResult::from(&customer), registration);
    }

    #[test]
    fn test_serialization_omits_missing_timestamp() {
        let registration = CustomerRegistrationResult {
            id: Some(CustomerId::new(1).unwrap()),
            name: "Acme".to_string(),
            identification: Some("0991234567001".to_string()),
            active: true,
            registered_at: None,
        };

        let json = serde_json::to_string(&registration).unwrap();
        assert!(json.contains("\"id\":1"));
        assert!(!json.contains("registered_at"));
    }
}
