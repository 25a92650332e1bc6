//! Customer service for customer management

use std::sync::Arc;

use chrono::Utc;
use tracing::{debug, info};

use crate::domain::DomainError;
use crate::domain::customer::{
    Customer, CustomerId, CustomerRegistrationResult, CustomerRepository,
};

/// Customer service backing the customer endpoints
#[derive(Debug)]
pub struct CustomerService<R: CustomerRepository> {
    repository: Arc<R>,
}

impl<R: CustomerRepository> CustomerService<R> {
    /// Create a new customer service
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// List all customers
    pub async fn list(&self) -> Result<Vec<Customer>, DomainError> {
        self.repository.list().await
    }

    /// Get a customer by ID
    pub async fn get_by_id(&self, id: CustomerId) -> Result<Option<Customer>, DomainError> {
        self.repository.get(id).await
    }

    /// Create a new customer; any supplied ID is replaced by the assigned one
    pub async fn create(&self, customer: Customer) -> Result<Customer, DomainError> {
        info!(name = %customer.name, "Creating customer");

        customer
            .validate()
            .map_err(|e| DomainError::validation(e.to_string()))?;

        let created = self.repository.create(customer).await?;
        debug!(id = ?created.id, "Customer created");

        Ok(created)
    }

    /// Replace an existing customer
    pub async fn update(&self, customer: Customer) -> Result<Customer, DomainError> {
        let id = customer
            .id
            .ok_or_else(|| DomainError::invalid_id("Customer ID is required for update"))?;

        info!(id = %id, "Updating customer");

        customer
            .validate()
            .map_err(|e| DomainError::validation(e.to_string()))?;

        self.repository.update(customer).await
    }

    /// Delete a customer
    pub async fn delete(&self, id: CustomerId) -> Result<(), DomainError> {
        info!(id = %id, "Deleting customer");

        if !self.repository.delete(id).await? {
            return Err(DomainError::not_found(format!(
                "Customer '{}' not found",
                id
            )));
        }

        Ok(())
    }

    /// Register a customer after checking its identification is present and not taken.
    ///
    /// The identification is stored trimmed, so surrounding whitespace cannot
    /// slip past the uniqueness check.
    pub async fn register_validated(
        &self,
        mut registration: CustomerRegistrationResult,
    ) -> Result<CustomerRegistrationResult, DomainError> {
        let identification = registration
            .identification
            .as_deref()
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .map(str::to_string)
            .ok_or_else(|| {
                DomainError::validation("Customer identification is required for registration")
            })?;

        info!(identification = %identification, "Registering customer");

        registration.identification = Some(identification);

        let mut customer = Customer::from(registration);
        customer.active = true;
        customer
            .validate()
            .map_err(|e| DomainError::validation(e.to_string()))?;

        let created = self
            .repository
            .create_with_unique_identification(customer)
            .await?;

        let mut result = CustomerRegistrationResult::from(&created);
        result.registered_at = Some(Utc::now());

        Ok(result)
    }
}
