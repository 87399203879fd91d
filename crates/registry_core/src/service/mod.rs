//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate validation and record store calls into use-case level APIs.
//! - Keep the interactive boundary decoupled from storage details.

pub mod customer_service;
