//! Contact messages

pub mod errors;
pub mod records;
mod repository;
pub mod service;

pub use errors::ContactsServiceError;
pub use service::*;
