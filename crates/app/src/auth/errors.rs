//! Auth service errors.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AuthServiceError {
    #[error("session is missing or invalid")]
    Unauthenticated,

    #[error("session lacks the required role")]
    Forbidden,

    #[error("identity provider request failed")]
    Http(#[from] reqwest::Error),

    #[error("unexpected response from identity provider: {0}")]
    UnexpectedResponse(String),
}
