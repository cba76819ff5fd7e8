use crate::auth::bearer_header;
use crate::config::PlatformConfig;
use crate::errors::PlatformError;
use crate::models::UserInput;
use crate::platform::types::{IntegrationPayload, VariablePayload, variable_payloads};
use futures::future::try_join_all;
use reqwest::{Client, Response, StatusCode};
use secrecy::SecretString;
use std::time::Duration;

/// Platform.sh プロジェクトAPIクライアント
pub struct PlatformClient {
    client: Client,
    api_base_url: String,
    token: SecretString,
}

impl PlatformClient {
    /// 新しいクライアントを作成
    pub fn new(config: &PlatformConfig, token: SecretString) -> Result<Self, PlatformError> {
        let mut builder =
            Client::builder().user_agent(format!("psh-github-setup/{}", env!("CARGO_PKG_VERSION")));
        if let Some(timeout) = config.timeout_sec {
            builder = builder.timeout(Duration::from_secs(timeout));
        }
        let client = builder
            .build()
            .map_err(|e| PlatformError::NetworkError { source: e })?;

        Ok(PlatformClient {
            client,
            api_base_url: config.api_base_url.trim_end_matches('/').to_string(),
            token,
        })
    }

    /// APIベースURLを取得
    pub fn get_api_base_url(&self) -> &str {
        &self.api_base_url
    }

    fn project_url(&self, project_id: &str, resource: &str) -> String {
        format!(
            "{}/projects/{}/{}",
            self.get_api_base_url(),
            project_id,
            resource
        )
    }

    /// GitHub連携を登録する
    ///
    /// An existing integration comes back as a 409 and is reported as an
    /// error like any other non-success status.
    pub async fn register_integration(
        &self,
        input: &UserInput,
    ) -> Result<StatusCode, PlatformError> {
        let url = self.project_url(&input.project_id, "integrations");
        let payload = IntegrationPayload::github(input);

        tracing::info!(
            "Registering GitHub integration for {} on project {}",
            payload.repository,
            input.project_id
        );

        let response = self
            .client
            .post(&url)
            .header("Authorization", bearer_header(&self.token))
            .json(&payload)
            .send()
            .await?;

        Self::check_status("Register integration", response).await
    }

    /// 環境変数を並列で設定する
    ///
    /// All four requests are in flight at once; the first failure is returned
    /// and the remaining requests are dropped.
    pub async fn set_project_variables(
        &self,
        input: &UserInput,
    ) -> Result<Vec<StatusCode>, PlatformError> {
        let url = self.project_url(&input.project_id, "variables");
        let payloads = variable_payloads(input);

        tracing::info!(
            "Creating {} variables on project {}",
            payloads.len(),
            input.project_id
        );

        try_join_all(
            payloads
                .iter()
                .map(|payload| self.create_variable(&url, payload)),
        )
        .await
    }

    async fn create_variable(
        &self,
        url: &str,
        payload: &VariablePayload,
    ) -> Result<StatusCode, PlatformError> {
        tracing::debug!("Creating variable {}", payload.name);
        let response = self
            .client
            .post(url)
            .header("Authorization", bearer_header(&self.token))
            .json(payload)
            .send()
            .await?;

        Self::check_status(&format!("Create variable {}", payload.name), response).await
    }

    async fn check_status(operation: &str, response: Response) -> Result<StatusCode, PlatformError> {
        let status = response.status();
        if status.is_success() {
            tracing::debug!("{} succeeded with {}", operation, status);
            return Ok(status);
        }

        let body = response.text().await?;
        tracing::debug!("{} failed with {}: {}", operation, status, body);
        Err(PlatformError::ApiError {
            operation: operation.to_string(),
            status: status.as_u16(),
            body,
        })
    }
}
