//! Customer domain module
//!
//! Customers ("clientes") are identified by a numeric ID assigned when they are
//! first stored.

mod entity;
mod registration;
mod repository;
mod validation;

pub use entity::{Customer, CustomerId};
pub use registration::CustomerRegistrationResult;
pub use repository::CustomerRepository;
pub use validation::{
    validate_customer_id, validate_customer_name, validate_identification,
    CustomerValidationError, MAX_CUSTOMER_NAME_LENGTH, MAX_IDENTIFICATION_LENGTH,
};
