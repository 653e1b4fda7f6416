//! Contact form fields and their validation.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email pattern"));
// ASCII digits only; `\d` would also accept other scripts' digits.
static PHONE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{10}$").expect("valid phone pattern"));

/// A field of the contact form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactField {
    Name,
    Email,
    Phone,
    Comments,
}

impl ContactField {
    /// Fields in form order.
    pub const ALL: [ContactField; 4] = [
        ContactField::Name,
        ContactField::Email,
        ContactField::Phone,
        ContactField::Comments,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ContactField::Name => "name",
            ContactField::Email => "email",
            ContactField::Phone => "phone",
            ContactField::Comments => "comments",
        }
    }
}

/// A contact detail that failed validation.
///
/// Validation stops at the first failure, in form order.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Please enter your name.")]
    MissingName,

    #[error("Please enter a valid email address.")]
    InvalidEmail,

    #[error("Please enter a valid 10-digit phone number.")]
    InvalidPhone,
}

impl ValidationError {
    /// The field that should regain focus.
    pub fn field(&self) -> ContactField {
        match self {
            ValidationError::MissingName => ContactField::Name,
            ValidationError::InvalidEmail => ContactField::Email,
            ValidationError::InvalidPhone => ContactField::Phone,
        }
    }

    /// Message shown to the customer.
    pub fn message(&self) -> String {
        self.to_string()
    }
}

/// Raw values as read from the form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub comments: String,
}

impl ContactForm {
    /// Create a form from raw values.
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        phone: impl Into<String>,
        comments: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            phone: phone.into(),
            comments: comments.into(),
        }
    }

    /// Value of one field.
    pub fn get(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Phone => &self.phone,
            ContactField::Comments => &self.comments,
        }
    }

    /// Copy with surrounding whitespace removed from every field.
    pub fn trimmed(&self) -> Self {
        Self {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            phone: self.phone.trim().to_string(),
            comments: self.comments.trim().to_string(),
        }
    }

    /// Trim and validate the form.
    ///
    /// Checks run in order: name present, email shaped `local@domain.tld`,
    /// phone exactly ten digits.
    pub fn validate(&self) -> Result<Customer, ValidationError> {
        let form = self.trimmed();

        if form.name.is_empty() {
            return Err(ValidationError::MissingName);
        }
        if !EMAIL_RE.is_match(&form.email) {
            return Err(ValidationError::InvalidEmail);
        }
        if !PHONE_RE.is_match(&form.phone) {
            return Err(ValidationError::InvalidPhone);
        }

        Ok(Customer {
            name: form.name,
            email: form.email,
            phone: form.phone,
        })
    }
}

/// Validated customer contact details.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    pub name: String,
    pub email: String,
    pub phone: String,
}
