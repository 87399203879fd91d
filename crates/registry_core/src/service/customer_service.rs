//! Customer use-case service.
//!
//! # Responsibility
//! - Validate candidate values before any store mutation.
//! - Enforce email uniqueness across stored customers.
//! - Provide register/update/delete/list entry points for interactive callers.
//!
//! # Invariants
//! - No two stored customers share an email.
//! - A failed update leaves the target record untouched.
//! - Log events carry metadata only; names and emails are never logged.

use crate::model::customer::{
    validate_email, validate_name, Customer, CustomerPatch, CustomerValidationError, NameField,
};
use crate::repo::customer_repo::{CustomerRepository, RepoError};
use log::{debug, info};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Service error for customer use-cases.
///
/// Every variant is recoverable; interactive callers reprompt or return to
/// the menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CustomerError {
    /// Name contains disallowed characters or is empty.
    InvalidNameFormat { field: NameField },
    /// Email fails the syntax check.
    InvalidEmailFormat(String),
    /// Email already belongs to another customer.
    DuplicateEmail(String),
    /// No customer has the referenced email.
    RecordNotFound(String),
}

impl CustomerError {
    /// Stable machine-readable code for log events.
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidNameFormat { .. } => "invalid_name_format",
            Self::InvalidEmailFormat(_) => "invalid_email_format",
            Self::DuplicateEmail(_) => "duplicate_email",
            Self::RecordNotFound(_) => "record_not_found",
        }
    }
}

impl Display for CustomerError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidNameFormat { field } => {
                write!(f, "The {field} must contain only letters.")
            }
            Self::InvalidEmailFormat(_) => write!(f, "The email format is invalid."),
            Self::DuplicateEmail(email) => {
                write!(f, "The email '{email}' is already registered.")
            }
            Self::RecordNotFound(email) => write!(f, "Customer with email '{email}' not found."),
        }
    }
}

impl Error for CustomerError {}

impl From<CustomerValidationError> for CustomerError {
    fn from(value: CustomerValidationError) -> Self {
        match value {
            CustomerValidationError::InvalidNameFormat { field } => {
                Self::InvalidNameFormat { field }
            }
            CustomerValidationError::InvalidEmailFormat(email) => Self::InvalidEmailFormat(email),
        }
    }
}

impl From<RepoError> for CustomerError {
    fn from(value: RepoError) -> Self {
        match value {
            RepoError::NotFound(email) => Self::RecordNotFound(email),
        }
    }
}

/// Customer service facade over a record store it exclusively owns.
pub struct CustomerService<R: CustomerRepository> {
    repo: R,
}

impl<R: CustomerRepository> CustomerService<R> {
    /// Creates a service that takes ownership of `repo`.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Returns whether `candidate` is used by a stored customer whose email
    /// is not `exclude`.
    ///
    /// Passing the record's own email as `exclude` lets an update keep it.
    pub fn is_duplicate_email(&self, candidate: &str, exclude: Option<&str>) -> bool {
        self.repo
            .list_all()
            .iter()
            .any(|customer| {
                customer.email == candidate && Some(customer.email.as_str()) != exclude
            })
    }

    /// Validates one name field and returns it unchanged on success.
    pub fn check_name(&self, field: NameField, text: &str) -> Result<String, CustomerError> {
        validate_name(field, text)?;
        Ok(text.to_string())
    }

    /// Validates a new email: syntax first, then uniqueness.
    ///
    /// # Errors
    /// - `InvalidEmailFormat` when the syntax check fails.
    /// - `DuplicateEmail` when another customer already uses it.
    pub fn check_new_email(
        &self,
        text: &str,
        exclude: Option<&str>,
    ) -> Result<String, CustomerError> {
        validate_email(text)?;
        if self.is_duplicate_email(text, exclude) {
            return Err(CustomerError::DuplicateEmail(text.to_string()));
        }
        Ok(text.to_string())
    }

    /// Validates and stores a new customer.
    pub fn register(
        &mut self,
        first_name: &str,
        last_name: &str,
        email: &str,
    ) -> Result<Customer, CustomerError> {
        let result = self.try_register(first_name, last_name, email);
        match &result {
            Ok(_) => info!(
                "event=customer_register module=service status=ok count={}",
                self.repo.len()
            ),
            Err(err) => debug!(
                "event=customer_register module=service status=rejected reason={}",
                err.code()
            ),
        }
        result
    }

    fn try_register(
        &mut self,
        first_name: &str,
        last_name: &str,
        email: &str,
    ) -> Result<Customer, CustomerError> {
        let first_name = self.check_name(NameField::FirstName, first_name)?;
        let last_name = self.check_name(NameField::LastName, last_name)?;
        let email = self.check_new_email(email, None)?;

        let customer = Customer::new(first_name, last_name, email);
        self.repo.append(customer.clone());
        Ok(customer)
    }

    /// Applies `patch` to the customer identified by `current_email`.
    ///
    /// Every supplied field is validated before anything is written; the
    /// new email is checked for uniqueness excluding `current_email`.
    ///
    /// # Errors
    /// - `RecordNotFound` when no customer has `current_email`.
    /// - Validation errors for the first invalid supplied field.
    pub fn update(
        &mut self,
        current_email: &str,
        patch: CustomerPatch,
    ) -> Result<Customer, CustomerError> {
        let result = self.try_update(current_email, patch);
        match &result {
            Ok(_) => info!("event=customer_update module=service status=ok"),
            Err(err) => debug!(
                "event=customer_update module=service status=rejected reason={}",
                err.code()
            ),
        }
        result
    }

    fn try_update(
        &mut self,
        current_email: &str,
        patch: CustomerPatch,
    ) -> Result<Customer, CustomerError> {
        let mut updated = self
            .repo
            .find_by_email(current_email)
            .cloned()
            .ok_or_else(|| CustomerError::RecordNotFound(current_email.to_string()))?;

        if let Some(first_name) = patch.first_name.as_deref() {
            self.check_name(NameField::FirstName, first_name)?;
        }
        if let Some(last_name) = patch.last_name.as_deref() {
            self.check_name(NameField::LastName, last_name)?;
        }
        if let Some(email) = patch.email.as_deref() {
            self.check_new_email(email, Some(current_email))?;
        }

        updated.apply(patch.clone());
        self.repo.update_fields(current_email, patch)?;
        Ok(updated)
    }

    /// Removes the customer identified by `email`.
    pub fn delete(&mut self, email: &str) -> Result<Customer, CustomerError> {
        match self.repo.remove_by_email(email) {
            Ok(customer) => {
                info!(
                    "event=customer_delete module=service status=ok count={}",
                    self.repo.len()
                );
                Ok(customer)
            }
            Err(err) => {
                let err = CustomerError::from(err);
                debug!(
                    "event=customer_delete module=service status=rejected reason={}",
                    err.code()
                );
                Err(err)
            }
        }
    }

    /// Returns the customer with exactly this email, if any.
    pub fn find(&self, email: &str) -> Option<&Customer> {
        self.repo.find_by_email(email)
    }

    /// Lists all customers in registration order.
    pub fn list(&self) -> &[Customer] {
        self.repo.list_all()
    }
}

#[cfg(test)]
mod tests {
    use super::{CustomerError, CustomerService};
    use crate::model::customer::{Customer, CustomerPatch, NameField};
    use crate::repo::customer_repo::InMemoryCustomerRepository;

    fn service_with(customers: Vec<Customer>) -> CustomerService<InMemoryCustomerRepository> {
        CustomerService::new(InMemoryCustomerRepository::with_customers(customers))
    }

    #[test]
    fn check_new_email_reports_format_before_duplicate() {
        let service = service_with(vec![Customer::new("A", "B", "a@b.co")]);
        assert!(matches!(
            service.check_new_email("not-an-email", None),
            Err(CustomerError::InvalidEmailFormat(_))
        ));
        assert_eq!(
            service.check_new_email("a@b.co", None),
            Err(CustomerError::DuplicateEmail("a@b.co".to_string()))
        );
    }

    #[test]
    fn exclusion_only_skips_the_given_email() {
        let service = service_with(vec![
            Customer::new("A", "B", "a@b.co"),
            Customer::new("C", "D", "c@d.co"),
        ]);
        assert!(!service.is_duplicate_email("a@b.co", Some("a@b.co")));
        assert!(service.is_duplicate_email("c@d.co", Some("a@b.co")));
        assert!(!service.is_duplicate_email("x@y.co", None));
    }

    #[test]
    fn empty_email_is_never_mistaken_for_no_exclusion() {
        let service = service_with(vec![Customer::new("A", "B", "a@b.co")]);
        assert!(service.is_duplicate_email("a@b.co", Some("")));
    }

    #[test]
    fn failed_update_leaves_record_untouched() {
        let mut service = service_with(vec![Customer::new("Ana", "García", "ana@b.co")]);
        let err = service
            .update(
                "ana@b.co",
                CustomerPatch {
                    first_name: Some("Anabel".to_string()),
                    last_name: Some("G4rcía".to_string()),
                    email: None,
                },
            )
            .unwrap_err();

        assert_eq!(
            err,
            CustomerError::InvalidNameFormat {
                field: NameField::LastName
            }
        );
        assert_eq!(service.find("ana@b.co").unwrap().first_name, "Ana");
    }

    #[test]
    fn error_codes_are_stable() {
        assert_eq!(
            CustomerError::DuplicateEmail(String::new()).code(),
            "duplicate_email"
        );
        assert_eq!(
            CustomerError::RecordNotFound(String::new()).code(),
            "record_not_found"
        );
    }
}
