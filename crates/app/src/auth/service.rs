//! Auth service.

use async_trait::async_trait;
use mockall::automock;

use crate::auth::{AuthServiceError, Session};

#[automock]
#[async_trait]
pub trait AuthService: Send + Sync {
    /// Resolve a bearer session token into a verified [`Session`].
    async fn authenticate_bearer(&self, bearer_token: &str) -> Result<Session, AuthServiceError>;
}
