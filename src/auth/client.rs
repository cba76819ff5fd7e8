use crate::AuthError;
use crate::config::PlatformConfig;
use reqwest::Client;
use std::time::Duration;

pub struct TokenExchanger {
    pub(in crate::auth) client: Client,
    pub(in crate::auth) auth_url: String,
    pub(in crate::auth) client_id: String,
}

impl TokenExchanger {
    /// Creates a new TokenExchanger for the configured auth endpoint
    pub fn new(config: &PlatformConfig) -> Result<Self, AuthError> {
        let mut builder =
            Client::builder().user_agent(format!("psh-github-setup/{}", env!("CARGO_PKG_VERSION")));
        if let Some(timeout) = config.timeout_sec {
            builder = builder.timeout(Duration::from_secs(timeout));
        }
        let client = builder
            .build()
            .map_err(|e| AuthError::ClientBuildError { source: e })?;

        Ok(TokenExchanger {
            client,
            auth_url: config.auth_url.clone(),
            client_id: config.client_id.clone(),
        })
    }
}
