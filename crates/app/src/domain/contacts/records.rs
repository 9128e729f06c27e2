//! Contact Records

use jiff::Timestamp;

use crate::uuids::TypedUuid;

/// Contact UUID
pub type ContactUuid = TypedUuid<ContactRecord>;

/// Contact Record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactRecord {
    pub uuid: ContactUuid,
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    pub created_at: Timestamp,
}
