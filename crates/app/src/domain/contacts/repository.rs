//! Contacts Repository

use jiff_sqlx::Timestamp as SqlxTimestamp;
use showroom::contact::ContactMessage;
use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query_as};

use crate::domain::contacts::records::{ContactRecord, ContactUuid};

const CREATE_CONTACT_SQL: &str = include_str!("sql/create_contact.sql");
const LIST_CONTACTS_SQL: &str = include_str!("sql/list_contacts.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgContactsRepository;

impl PgContactsRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn create_contact(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        contact: ContactUuid,
        message: &ContactMessage,
    ) -> Result<ContactRecord, sqlx::Error> {
        query_as::<Postgres, ContactRecord>(CREATE_CONTACT_SQL)
            .bind(contact.into_uuid())
            .bind(&message.name)
            .bind(&message.email)
            .bind(&message.subject)
            .bind(&message.message)
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn list_contacts(
        &self,
        tx: &mut Transaction<'_, Postgres>,
    ) -> Result<Vec<ContactRecord>, sqlx::Error> {
        query_as::<Postgres, ContactRecord>(LIST_CONTACTS_SQL)
            .fetch_all(&mut **tx)
            .await
    }
}

impl<'r> FromRow<'r, PgRow> for ContactRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            uuid: ContactUuid::from_uuid(row.try_get("uuid")?),
            name: row.try_get("name")?,
            email: row.try_get("email")?,
            subject: row.try_get("subject")?,
            message: row.try_get("message")?,
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
        })
    }
}
