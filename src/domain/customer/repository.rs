//! Customer repository trait

use async_trait::async_trait;

use super::entity::{Customer, CustomerId};
use crate::domain::DomainError;

/// Repository for managing customers
#[async_trait]
pub trait CustomerRepository: Send + Sync + std::fmt::Debug {
    /// Get a customer by ID
    async fn get(&self, id: CustomerId) -> Result<Option<Customer>, DomainError>;

    /// Store a new customer, assigning the next identifier
    async fn create(&self, customer: Customer) -> Result<Customer, DomainError>;

    /// Store a new customer unless another one already holds its identification.
    ///
    /// The check and the insert must happen atomically; a taken identification
    /// fails with `DomainError::Conflict`.
    async fn create_with_unique_identification(
        &self,
        customer: Customer,
    ) -> Result<Customer, DomainError>;

    /// Replace an existing customer
    async fn update(&self, customer: Customer) -> Result<Customer, DomainError>;

    /// Delete a customer by ID, returns true if deleted
    async fn delete(&self, id: CustomerId) -> Result<bool, DomainError>;

    /// List all customers ordered by ID
    async fn list(&self) -> Result<Vec<Customer>, DomainError>;
}
