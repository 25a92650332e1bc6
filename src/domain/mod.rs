//! Domain layer - customer entity, validation and repository contract

pub mod customer;
pub mod error;

pub use error::DomainError;
