//! Authentication

mod errors;
mod models;
pub mod provider;
mod service;

pub use errors::*;
pub use models::*;
pub use provider::{HttpAuthService, IdentityProviderConfig};
pub use service::*;
