//! Customer record, patch model and field validators.
//!
//! # Responsibility
//! - Define the record stored by the registry (first name, last name, email).
//! - Provide the name and email syntax validators.
//!
//! # Invariants
//! - Names contain only ASCII letters, accented vowels, `ñ`/`Ñ` and whitespace.
//! - Emails follow `local@domain.tld` syntax; no DNS or mailbox checks.
//! - A record accepted by `Customer::try_new` passes `Customer::validate`.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

static NAME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-zA-ZáéíóúÁÉÍÓÚñÑ\s]+$").expect("valid name regex"));
static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-zA-Z0-9_.+-]+@[a-zA-Z0-9-]+\.[a-zA-Z0-9.-]+$").expect("valid email regex")
});

/// Returns whether `text` is a legal first or last name.
///
/// Empty input is rejected. Callers that treat blank input as "keep the
/// current value" must check for it before calling this.
pub fn is_valid_name(text: &str) -> bool {
    NAME_RE.is_match(text)
}

/// Returns whether `text` is a syntactically valid email address.
pub fn is_valid_email(text: &str) -> bool {
    EMAIL_RE.is_match(text)
}

/// Which name field a validation failure refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameField {
    FirstName,
    LastName,
}

impl NameField {
    /// Human-readable label used in messages.
    pub fn label(self) -> &'static str {
        match self {
            Self::FirstName => "first name",
            Self::LastName => "last name",
        }
    }
}

impl Display for NameField {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// One registered customer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    pub first_name: String,
    pub last_name: String,
    /// Unique across the registry, compared with exact equality.
    pub email: String,
}

impl Customer {
    /// Creates a customer without running validators.
    ///
    /// Used for trusted input such as seed data and tests.
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            email: email.into(),
        }
    }

    /// Creates a customer and validates every field.
    ///
    /// # Errors
    /// - `InvalidNameFormat` when either name fails `is_valid_name`.
    /// - `InvalidEmailFormat` when the email fails `is_valid_email`.
    pub fn try_new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email: impl Into<String>,
    ) -> Result<Self, CustomerValidationError> {
        let customer = Self::new(first_name, last_name, email);
        customer.validate()?;
        Ok(customer)
    }

    /// Validates field syntax. Uniqueness is a registry concern and is not
    /// checked here.
    pub fn validate(&self) -> Result<(), CustomerValidationError> {
        validate_name(NameField::FirstName, &self.first_name)?;
        validate_name(NameField::LastName, &self.last_name)?;
        validate_email(&self.email)
    }

    /// Full display name, `"<first> <last>"`.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Applies every field present in `patch`. No validation is performed.
    pub fn apply(&mut self, patch: CustomerPatch) {
        if let Some(first_name) = patch.first_name {
            self.first_name = first_name;
        }
        if let Some(last_name) = patch.last_name {
            self.last_name = last_name;
        }
        if let Some(email) = patch.email {
            self.email = email;
        }
    }
}

/// Partial update for an existing customer. `None` keeps the current value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CustomerPatch {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
}

impl CustomerPatch {
    /// Returns whether the patch changes nothing.
    pub fn is_empty(&self) -> bool {
        self.first_name.is_none() && self.last_name.is_none() && self.email.is_none()
    }
}

/// Customers the registry starts with unless launched empty.
pub fn seed_customers() -> Vec<Customer> {
    vec![
        Customer::new("Carlos", "López", "carlos.lopez@gmail.com"),
        Customer::new("María", "Pérez", "maria.perez@yahoo.com"),
        Customer::new("Ana", "García", "ana.garcia@hotmail.com"),
    ]
}

pub(crate) fn validate_name(field: NameField, text: &str) -> Result<(), CustomerValidationError> {
    if is_valid_name(text) {
        Ok(())
    } else {
        Err(CustomerValidationError::InvalidNameFormat { field })
    }
}

pub(crate) fn validate_email(text: &str) -> Result<(), CustomerValidationError> {
    if is_valid_email(text) {
        Ok(())
    } else {
        Err(CustomerValidationError::InvalidEmailFormat(text.to_string()))
    }
}

/// Field syntax errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CustomerValidationError {
    InvalidNameFormat { field: NameField },
    InvalidEmailFormat(String),
}

impl Display for CustomerValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidNameFormat { field } => {
                write!(f, "the {field} must contain only letters")
            }
            Self::InvalidEmailFormat(value) => write!(f, "invalid email format: `{value}`"),
        }
    }
}

impl Error for CustomerValidationError {}
