//! Auth Config

use clap::Args;

/// Hosted identity provider settings.
#[derive(Debug, Args)]
pub struct AuthConfig {
    /// Identity provider base URL
    #[arg(long = "auth-provider-url", env = "AUTH_PROVIDER_URL")]
    pub url: String,

    /// Identity provider secret key
    #[arg(
        long = "auth-provider-secret-key",
        env = "AUTH_PROVIDER_SECRET_KEY",
        hide_env_values = true
    )]
    pub secret_key: String,
}
