//! Hosted identity provider client.

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use tracing::debug;

use crate::auth::{AuthService, AuthServiceError, Role, Session};

/// Connection settings for the identity provider.
#[derive(Debug, Clone)]
pub struct IdentityProviderConfig {
    /// Provider API base URL, e.g. `"https://api.clerk.com"`.
    pub url: String,

    /// Backend secret key.
    pub secret_key: String,
}

/// Verifies session tokens against the provider's session verification endpoint.
#[derive(Debug, Clone)]
pub struct HttpAuthService {
    config: IdentityProviderConfig,
    http: Client,
}

impl HttpAuthService {
    #[must_use]
    pub fn new(config: IdentityProviderConfig) -> Self {
        Self {
            config,
            http: Client::new(),
        }
    }

    fn verify_url(&self) -> String {
        format!("{}/v1/sessions/verify", self.config.url.trim_end_matches('/'))
    }
}

#[async_trait]
impl AuthService for HttpAuthService {
    async fn authenticate_bearer(&self, bearer_token: &str) -> Result<Session, AuthServiceError> {
        if bearer_token.trim().is_empty() {
            return Err(AuthServiceError::Unauthenticated);
        }

        let response = self
            .http
            .post(self.verify_url())
            .bearer_auth(&self.config.secret_key)
            .json(&serde_json::json!({ "token": bearer_token }))
            .send()
            .await?;

        let status = response.status();

        if matches!(
            status,
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN | StatusCode::NOT_FOUND
        ) {
            debug!(%status, "session rejected by identity provider");

            return Err(AuthServiceError::Unauthenticated);
        }

        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();

            return Err(AuthServiceError::UnexpectedResponse(format!(
                "session verification failed with status {status}: {text}"
            )));
        }

        let verified: VerifiedSession = response.json().await?;

        verified.into_session()
    }
}

#[derive(Debug, Deserialize)]
struct VerifiedSession {
    user_id: String,

    #[serde(default)]
    status: Option<String>,

    #[serde(default)]
    claims: SessionClaims,
}

#[derive(Debug, Default, Deserialize)]
struct SessionClaims {
    #[serde(default)]
    metadata: SessionMetadata,
}

#[derive(Debug, Default, Deserialize)]
struct SessionMetadata {
    #[serde(default)]
    role: Role,
}

impl VerifiedSession {
    fn into_session(self) -> Result<Session, AuthServiceError> {
        if self.user_id.is_empty() || self.status.as_deref().is_some_and(|status| status != "active")
        {
            return Err(AuthServiceError::Unauthenticated);
        }

        Ok(Session {
            user_id: self.user_id,
            role: self.claims.metadata.role,
        })
    }
}
