//! Customer infrastructure implementations

mod repository;
mod service;

pub use repository::InMemoryCustomerRepository;
pub use service::CustomerService;
