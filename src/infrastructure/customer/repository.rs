//! In-memory customer repository implementation

use std::collections::BTreeMap;
use std::sync::RwLock;
use std::sync::atomic::{AtomicI64, Ordering};

use async_trait::async_trait;

use crate::domain::DomainError;
use crate::domain::customer::{Customer, CustomerId, CustomerRepository};

/// Thread-safe in-memory customer repository
///
/// Identifiers come from a monotonic sequence starting at 1 and are never
/// reused, even after deletes. Data is lost when the process terminates.
#[derive(Debug)]
pub struct InMemoryCustomerRepository {
    customers: RwLock<BTreeMap<CustomerId, Customer>>,
    sequence: AtomicI64,
}

impl Default for InMemoryCustomerRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryCustomerRepository {
    /// Creates a new empty repository
    pub fn new() -> Self {
        Self {
            customers: RwLock::new(BTreeMap::new()),
            sequence: AtomicI64::new(1),
        }
    }

    fn next_id(&self) -> Result<CustomerId, DomainError> {
        let next = self.sequence.fetch_add(1, Ordering::SeqCst);
        CustomerId::new(next).map_err(|e| DomainError::internal(e.to_string()))
    }
}

#[async_trait]
impl CustomerRepository for InMemoryCustomerRepository {
    async fn get(&self, id: CustomerId) -> Result<Option<Customer>, DomainError> {
        let customers = self.customers.read().map_err(|e| {
            DomainError::storage(format!("Failed to acquire read lock: {}", e))
        })?;

        Ok(customers.get(&id).cloned())
    }

    async fn create(&self, customer: Customer) -> Result<Customer, DomainError> {
        let mut customers = self.customers.write().map_err(|e| {
            DomainError::storage(format!("Failed to acquire write lock: {}", e))
        })?;

        let id = self.next_id()?;
        let customer = customer.with_id(id);

        customers.insert(id, customer.clone());
        Ok(customer)
    }

    async fn create_with_unique_identification(
        &self,
        customer: Customer,
    ) -> Result<Customer, DomainError> {
        let identification = customer.identification.clone().ok_or_else(|| {
            DomainError::validation("Customer identification is required")
        })?;

        let mut customers = self.customers.write().map_err(|e| {
            DomainError::storage(format!("Failed to acquire write lock: {}", e))
        })?;

        let taken = customers
            .values()
            .any(|c| c.identification.as_deref() == Some(identification.as_str()));

        if taken {
            return Err(DomainError::conflict(format!(
                "Identification '{}' is already registered",
                identification
            )));
        }

        let id = self.next_id()?;
        let customer = customer.with_id(id);

        customers.insert(id, customer.clone());
        Ok(customer)
    }

    async fn update(&self, customer: Customer) -> Result<Customer, DomainError> {
        let id = customer
            .id
            .ok_or_else(|| DomainError::invalid_id("Customer ID is required for update"))?;

        let mut customers = self.customers.write().map_err(|e| {
            DomainError::storage(format!("Failed to acquire write lock: {}", e))
        })?;

        if !customers.contains_key(&id) {
            return Err(DomainError::not_found(format!(
                "Customer '{}' not found",
                id
            )));
        }

        customers.insert(id, customer.clone());
        Ok(customer)
    }

    async fn delete(&self, id: CustomerId) -> Result<bool, DomainError> {
        let mut customers = self.customers.write().map_err(|e| {
            DomainError::storage(format!("Failed to acquire write lock: {}", e))
        })?;

        Ok(customers.remove(&id).is_some())
    }

    async fn list(&self) -> Result<Vec<Customer>, DomainError> {
        let customers = self.customers.read().map_err(|e| {
            DomainError::storage(format!("Failed to acquire read lock: {}", e))
        })?;

        Ok(customers.values().cloned().collect())
    }
}
