//! Customer domain model.
//!
//! # Responsibility
//! - Define the canonical customer record and its partial-update shape.
//! - Own the field validators that every stored record must satisfy.
//!
//! # Invariants
//! - Customers are identified by their exact, case-sensitive email.
//! - Validation is pure and never touches storage.

pub mod customer;
