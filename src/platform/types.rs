use crate::models::{UserInput, serialize_secret};
use secrecy::SecretString;
use serde::Serialize;

pub const VAR_GIT_PW: &str = "env:APP_GIT_PW";
pub const VAR_GIT_REMOTE_URL: &str = "env:APP_GIT_REMOTE_URL";
pub const VAR_GIT_USER: &str = "env:APP_GIT_USER";
pub const VAR_SITE_DIR_NAME: &str = "env:APP_SITE_DIR_NAME";

/// GitHub integration registration body
#[derive(Debug, Clone, Serialize)]
pub struct IntegrationPayload {
    /// 連携の種類（常に "github"）
    #[serde(rename = "type")]
    pub kind: String,
    /// GitHub Personal Access Token
    #[serde(serialize_with = "serialize_secret")]
    pub token: SecretString,
    /// リポジトリ（owner/repo形式）
    pub repository: String,
    pub fetch_branches: bool,
    pub prune_branches: bool,
    pub build_pull_requests: bool,
    pub build_draft_pull_requests: bool,
    pub build_pull_requests_post_merge: bool,
    pub pull_requests_clone_parent_data: bool,
}

impl IntegrationPayload {
    /// Fetches and prunes branches, builds PRs but not drafts or post-merge
    /// states, and never clones parent environment data.
    pub fn github(input: &UserInput) -> Self {
        Self {
            kind: "github".to_string(),
            token: input.github_pat.clone(),
            repository: input.repository(),
            fetch_branches: true,
            prune_branches: true,
            build_pull_requests: true,
            build_draft_pull_requests: false,
            build_pull_requests_post_merge: false,
            pull_requests_clone_parent_data: false,
        }
    }
}

/// Project variable definition
#[derive(Debug, Clone, Serialize)]
pub struct VariablePayload {
    pub name: String,
    #[serde(serialize_with = "serialize_secret")]
    pub value: SecretString,
    pub is_json: bool,
    pub is_sensitive: bool,
    pub visible_build: bool,
    pub visible_runtime: bool,
}

impl VariablePayload {
    fn plain(name: &str, value: String) -> Self {
        Self {
            name: name.to_string(),
            value: SecretString::new(value),
            is_json: false,
            is_sensitive: false,
            visible_build: true,
            visible_runtime: true,
        }
    }

    fn sensitive(name: &str, value: SecretString) -> Self {
        Self {
            name: name.to_string(),
            value,
            is_json: false,
            is_sensitive: true,
            visible_build: true,
            visible_runtime: true,
        }
    }
}

/// The four variables every site needs to push back to its repository
pub fn variable_payloads(input: &UserInput) -> [VariablePayload; 4] {
    [
        VariablePayload::sensitive(VAR_GIT_PW, input.github_pat.clone()),
        VariablePayload::plain(VAR_GIT_REMOTE_URL, input.remote_url()),
        VariablePayload::plain(VAR_GIT_USER, input.github_owner.clone()),
        VariablePayload::plain(VAR_SITE_DIR_NAME, input.site_dir_name.clone()),
    ]
}
