//! Application state for shared services

use std::sync::Arc;

#[cfg(test)]
use mockall::automock;

use crate::domain::DomainError;
use crate::domain::customer::{
    Customer, CustomerId, CustomerRegistrationResult, CustomerRepository,
};
use crate::infrastructure::customer::CustomerService;

/// Application state containing shared services using dynamic dispatch
#[derive(Clone)]
pub struct AppState {
    pub customer_service: Arc<dyn CustomerServiceTrait>,
}

impl AppState {
    pub fn new(customer_service: Arc<dyn CustomerServiceTrait>) -> Self {
        Self { customer_service }
    }
}

/// Trait for customer service operations consumed by the customer endpoints
#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait CustomerServiceTrait: Send + Sync {
    async fn list(&self) -> Result<Vec<Customer>, DomainError>;
    async fn get_by_id(&self, id: CustomerId) -> Result<Option<Customer>, DomainError>;
    async fn create(&self, customer: Customer) -> Result<Customer, DomainError>;
    async fn update(&self, customer: Customer) -> Result<Customer, DomainError>;
    async fn delete(&self, id: CustomerId) -> Result<(), DomainError>;
    async fn register_validated(
        &self,
        registration: CustomerRegistrationResult,
    ) -> Result<CustomerRegistrationResult, DomainError>;
}

#[async_trait::async_trait]
impl<R: CustomerRepository + 'static> CustomerServiceTrait for CustomerService<R> {
    async fn list(&self) -> Result<Vec<Customer>, DomainError> {
        CustomerService::list(self).await
    }

    async fn get_by_id(&self, id: CustomerId) -> Result<Option<Customer>, DomainError> {
        CustomerService::get_by_id(self, id).await
    }

    async fn create(&self, customer: Customer) -> Result<Customer, DomainError> {
        CustomerService::create(self, customer).await
    }

    async fn update(&self, customer: Customer) -> Result<Customer, DomainError> {
        CustomerService::update(self, customer).await
    }

    async fn delete(&self, id: CustomerId) -> Result<(), DomainError> {
        CustomerService::delete(self, id).await
    }

    async fn register_validated(
        &self,
        registration: CustomerRegistrationResult,
    ) -> Result<CustomerRegistrationResult, DomainError> {
        CustomerService::register_validated(self, registration).await
    }
}
