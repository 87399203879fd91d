//! Customer record store contract and in-memory implementation.
//!
//! # Responsibility
//! - Provide append/find/update/remove/list over customer records.
//! - Report missing records as `RepoError::NotFound`.
//!
//! # Invariants
//! - Lookups are linear scans using exact, case-sensitive email equality.
//! - Only the first matching record is touched by update/remove.
//! - Records keep insertion order for their whole lifetime.

use crate::model::customer::{Customer, CustomerPatch};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type RepoResult<T> = Result<T, RepoError>;

/// Record store error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepoError {
    /// No record matches the given email.
    NotFound(String),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound(email) => write!(f, "customer not found: {email}"),
        }
    }
}

impl Error for RepoError {}

/// Storage interface for customer records.
pub trait CustomerRepository {
    /// Appends a record. The caller must have validated it.
    fn append(&mut self, customer: Customer);
    /// Returns the first record whose email equals `email`.
    fn find_by_email(&self, email: &str) -> Option<&Customer>;
    /// Overwrites each field present in `patch` on the record matching `email`.
    fn update_fields(&mut self, email: &str, patch: CustomerPatch) -> RepoResult<()>;
    /// Removes and returns the first record matching `email`.
    fn remove_by_email(&mut self, email: &str) -> RepoResult<Customer>;
    /// Returns all records in insertion order.
    fn list_all(&self) -> &[Customer];

    /// Number of stored records.
    fn len(&self) -> usize {
        self.list_all().len()
    }

    /// Returns whether the store holds no records.
    fn is_empty(&self) -> bool {
        self.list_all().is_empty()
    }
}

/// Vector-backed store owned by a single caller.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCustomerRepository {
    customers: Vec<Customer>,
}

impl InMemoryCustomerRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-populated with `customers`, kept in the given order.
    pub fn with_customers(customers: Vec<Customer>) -> Self {
        Self { customers }
    }

    fn position(&self, email: &str) -> Option<usize> {
        self.customers
            .iter()
            .position(|customer| customer.email == email)
    }
}

impl CustomerRepository for InMemoryCustomerRepository {
    fn append(&mut self, customer: Customer) {
        self.customers.push(customer);
    }

    fn find_by_email(&self, email: &str) -> Option<&Customer> {
        self.customers
            .iter()
            .find(|customer| customer.email == email)
    }

    fn update_fields(&mut self, email: &str, patch: CustomerPatch) -> RepoResult<()> {
        let index = self
            .position(email)
            .ok_or_else(|| RepoError::NotFound(email.to_string()))?;
        self.customers[index].apply(patch);
        Ok(())
    }

    fn remove_by_email(&mut self, email: &str) -> RepoResult<Customer> {
        let index = self
            .position(email)
            .ok_or_else(|| RepoError::NotFound(email.to_string()))?;
        Ok(self.customers.remove(index))
    }

    fn list_all(&self) -> &[Customer] {
        &self.customers
    }
}

#[cfg(test)]
mod tests {
    use super::{CustomerRepository, InMemoryCustomerRepository, RepoError};
    use crate::model::customer::{Customer, CustomerPatch};

    #[test]
    fn find_is_case_sensitive() {
        let mut repo = InMemoryCustomerRepository::new();
        repo.append(Customer::new("Ana", "García", "ana@example.com"));

        assert!(repo.find_by_email("ana@example.com").is_some());
        assert!(repo.find_by_email("ANA@example.com").is_none());
    }

    #[test]
    fn update_fields_on_missing_email_reports_not_found() {
        let mut repo = InMemoryCustomerRepository::new();
        let err = repo
            .update_fields("nobody@example.com", CustomerPatch::default())
            .unwrap_err();
        assert_eq!(err, RepoError::NotFound("nobody@example.com".to_string()));
    }

    #[test]
    fn update_keeps_record_position() {
        let mut repo = InMemoryCustomerRepository::with_customers(vec![
            Customer::new("A", "One", "a@example.com"),
            Customer::new("B", "Two", "b@example.com"),
        ]);
        repo.update_fields(
            "a@example.com",
            CustomerPatch {
                email: Some("z@example.com".to_string()),
                ..CustomerPatch::default()
            },
        )
        .unwrap();

        let emails: Vec<&str> = repo.list_all().iter().map(|c| c.email.as_str()).collect();
        assert_eq!(emails, ["z@example.com", "b@example.com"]);
    }

    #[test]
    fn remove_twice_reports_not_found_second_time() {
        let mut repo = InMemoryCustomerRepository::new();
        repo.append(Customer::new("Ana", "García", "ana@example.com"));

        let removed = repo.remove_by_email("ana@example.com").unwrap();
        assert_eq!(removed.first_name, "Ana");
        assert!(repo.is_empty());
        assert!(matches!(
            repo.remove_by_email("ana@example.com"),
            Err(RepoError::NotFound(_))
        ));
    }
}
