//! Customer validation

use thiserror::Error;

/// Errors that can occur during customer validation
#[derive(Debug, Error, Clone, PartialEq)]
pub enum CustomerValidationError {
    #[error("Customer ID must be a positive number")]
    NonPositiveId,

    #[error("Customer name cannot be empty")]
    EmptyName,

    #[error("Customer name cannot exceed {0} characters")]
    NameTooLong(usize),

    #[error("Customer identification cannot be empty")]
    EmptyIdentification,

    #[error("Customer identification cannot exceed {0} characters")]
    IdentificationTooLong(usize),
}

pub const MAX_CUSTOMER_NAME_LENGTH: usize = 100;
pub const MAX_IDENTIFICATION_LENGTH: usize = 20;

/// Validate a numeric customer ID
pub fn validate_customer_id(id: i64) -> Result<(), CustomerValidationError> {
    if id <= 0 {
        return Err(CustomerValidationError::NonPositiveId);
    }

    Ok(())
}

/// Validate a customer name
pub fn validate_customer_name(name: &str) -> Result<(), CustomerValidationError> {
    if name.trim().is_empty() {
        return Err(CustomerValidationError::EmptyName);
    }

    if name.chars().count() > MAX_CUSTOMER_NAME_LENGTH {
        return Err(CustomerValidationError::NameTooLong(MAX_CUSTOMER_NAME_LENGTH));
    }

    Ok(())
}

/// Validate a customer identification document
pub fn validate_identification(identification: &str) -> Result<(), CustomerValidationError> {
    if identification.trim().is_empty() {
        return Err(CustomerValidationError::EmptyIdentification);
    }

    if identification.chars().count() > MAX_IDENTIFICATION_LENGTH {
        return Err(CustomerValidationError::IdentificationTooLong(
            MAX_IDENTIFICATION_LENGTH,
        ));
    }

    Ok(())
}
