//! API transport types

pub mod customer;
pub mod error;
pub mod json;

pub use customer::CustomerView;
pub use error::{ApiError, ApiErrorResponse, ApiErrorType};
pub use json::{Json, ValidatedJson};
