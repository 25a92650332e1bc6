//! Cliente API
//!
//! REST endpoints for customer management:
//! - CRUD over `/clientes`
//! - Validated registration at `/clientes/registraValida`
//! - Health, readiness and liveness probes

pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;

use std::sync::Arc;

use api::state::AppState;
use infrastructure::customer::{CustomerService, InMemoryCustomerRepository};
use tracing::info;

/// Create the application state backed by the in-memory customer store
pub fn create_app_state() -> AppState {
    let repository = Arc::new(InMemoryCustomerRepository::new());
    let customer_service = Arc::new(CustomerService::new(repository));

    info!("Customer storage: in-memory");

    AppState::new(customer_service)
}
