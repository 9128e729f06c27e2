//! Contacts service.

use async_trait::async_trait;
use mockall::automock;
use showroom::contact::ContactMessage;

use crate::{
    database::Db,
    domain::contacts::{
        errors::ContactsServiceError,
        records::{ContactRecord, ContactUuid},
        repository::PgContactsRepository,
    },
};

#[derive(Debug, Clone)]
pub struct PgContactsService {
    db: Db,
    repository: PgContactsRepository,
}

impl PgContactsService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: PgContactsRepository::new(),
        }
    }
}

#[async_trait]
impl ContactsService for PgContactsService {
    async fn create_contact(
        &self,
        message: ContactMessage,
    ) -> Result<ContactRecord, ContactsServiceError> {
        let mut tx = self.db.begin().await?;

        let created = self
            .repository
            .create_contact(&mut tx, ContactUuid::new(), &message)
            .await?;

        tx.commit().await?;

        Ok(created)
    }

    async fn list_contacts(&self) -> Result<Vec<ContactRecord>, ContactsServiceError> {
        let mut tx = self.db.begin().await?;

        let contacts = self.repository.list_contacts(&mut tx).await?;

        tx.commit().await?;

        Ok(contacts)
    }
}

#[automock]
#[async_trait]
pub trait ContactsService: Send + Sync {
    /// Store a validated contact message.
    async fn create_contact(
        &self,
        message: ContactMessage,
    ) -> Result<ContactRecord, ContactsServiceError>;

    /// All contact messages, newest first.
    async fn list_contacts(&self) -> Result<Vec<ContactRecord>, ContactsServiceError>;
}
