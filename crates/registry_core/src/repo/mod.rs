//! Record store abstractions and implementations.
//!
//! # Responsibility
//! - Define the storage contract used by the customer service.
//! - Keep storage details out of validation and use-case orchestration.
//!
//! # Invariants
//! - The store performs no validation; callers validate before mutating.
//! - Listing order is insertion order and is never changed by updates.

pub mod customer_repo;
