//! Core domain logic for the customer registry.
//! This crate is the single source of truth for customer invariants.

pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use logging::{default_log_level, init_logging, logging_status, LogLevel, LoggingError};
pub use model::customer::{
    is_valid_email, is_valid_name, seed_customers, Customer, CustomerPatch,
    CustomerValidationError, NameField,
};
pub use repo::customer_repo::{
    CustomerRepository, InMemoryCustomerRepository, RepoError, RepoResult,
};
pub use service::customer_service::{CustomerError, CustomerService};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
