use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

/// Site discovered under the local `sites/` directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteInfo {
    /// First entry of the sites directory
    pub dir_name: String,
    /// Manifest `name` with the `@sites/` prefix removed
    pub site_name: String,
}

/// Everything the operator supplied, plus the derived site directory name.
///
/// Built once by the prompt collector and handed by reference to every later
/// stage. Values are passed through as typed, empty strings included.
#[derive(Debug, Clone)]
pub struct UserInput {
    pub project_id: String,
    pub api_token: SecretString,
    pub github_pat: SecretString,
    pub github_owner: String,
    pub github_repo: String,
    pub site_dir_name: String,
}

impl UserInput {
    /// `owner/repo` as the integrations API expects it
    pub fn repository(&self) -> String {
        format!("{}/{}", self.github_owner, self.github_repo)
    }

    pub fn remote_url(&self) -> String {
        format!(
            "https://github.com/{}/{}.git",
            self.github_owner, self.github_repo
        )
    }
}

/// Body of the API-token → access-token exchange
#[derive(Debug, Clone, Serialize)]
pub struct TokenRequest {
    pub client_id: String,
    pub grant_type: String,
    #[serde(serialize_with = "serialize_secret")]
    pub api_token: SecretString,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TokenResponse {
    #[serde(default)]
    pub access_token: Option<String>,
}

// Custom serialization for SecretString
pub fn serialize_secret<S>(secret: &SecretString, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::ser::Serializer,
{
    serializer.serialize_str(secret.expose_secret())
}
