//! Contact form

use std::sync::Arc;

use showroom::contact::{ContactMessage, ContactValidationError};
use thiserror::Error;
use tracing::{error, info};

use crate::domain::contacts::{ContactsService, ContactsServiceError, records::ContactRecord};

#[derive(Debug, Error)]
pub enum ContactError {
    #[error(transparent)]
    Validation(#[from] ContactValidationError),

    #[error("failed to send message")]
    Persistence(#[from] ContactsServiceError),
}

#[derive(Clone)]
pub struct ContactFlow {
    contacts: Arc<dyn ContactsService>,
}

impl ContactFlow {
    #[must_use]
    pub fn new(contacts: Arc<dyn ContactsService>) -> Self {
        Self { contacts }
    }

    /// Validate and store a contact message.
    ///
    /// # Errors
    ///
    /// Returns [`ContactError::Validation`] without contacting storage when
    /// the message is invalid.
    pub async fn submit(&self, message: &ContactMessage) -> Result<ContactRecord, ContactError> {
        let message = message.validate()?;

        let stored = self
            .contacts
            .create_contact(message)
            .await
            .inspect_err(|source| error!(error = %source, "failed to store contact message"))?;

        info!(contact = %stored.uuid, "contact message stored");

        Ok(stored)
    }
}

impl std::fmt::Debug for ContactFlow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ContactFlow").finish_non_exhaustive()
    }
}
