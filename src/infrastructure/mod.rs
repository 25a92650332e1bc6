//! Infrastructure layer - storage, services and process-wide setup

pub mod customer;
pub mod logging;
