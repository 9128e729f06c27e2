//! Contact form

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::feedback::is_valid_email;

/// Errors raised while validating a contact message.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ContactValidationError {
    /// A required field is blank.
    #[error("{0} is required")]
    Required(&'static str),

    /// The email address is not shaped like one.
    #[error("invalid email address: {0}")]
    InvalidEmail(String),
}

/// A message sent through the contact form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactMessage {
    /// Sender name
    pub name: String,

    /// Sender email
    pub email: String,

    /// Optional subject line
    #[serde(default)]
    pub subject: String,

    /// Message body
    pub message: String,
}

impl ContactMessage {
    /// Check the message and return a trimmed copy.
    ///
    /// # Errors
    ///
    /// Returns a [`ContactValidationError`] when the name or message is blank
    /// or the email is malformed.
    pub fn validate(&self) -> Result<Self, ContactValidationError> {
        let name = self.name.trim();

        if name.is_empty() {
            return Err(ContactValidationError::Required("name"));
        }

        let email = self.email.trim();

        if !is_valid_email(email) {
            return Err(ContactValidationError::InvalidEmail(email.to_string()));
        }

        let message = self.message.trim();

        if message.is_empty() {
            return Err(ContactValidationError::Required("message"));
        }

        Ok(Self {
            name: name.to_string(),
            email: email.to_string(),
            subject: self.subject.trim().to_string(),
            message: message.to_string(),
        })
    }
}
