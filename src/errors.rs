use thiserror::Error;

/// Error type for the whole setup run
#[derive(Error, Debug)]
pub enum AppError {
    /// Local site inspection failed
    #[error("Site inspection error: {0}")]
    Site(#[from] SiteError),

    /// Reading operator input failed
    #[error("Prompt error: {0}")]
    Prompt(#[from] PromptError),

    /// Token exchange failed
    #[error("Authentication error: {0}")]
    Auth(#[from] AuthError),

    /// Platform.sh project API call failed
    #[error("Platform API error: {0}")]
    Platform(#[from] PlatformError),

    /// Configuration could not be loaded
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// The token endpoint answered 2xx but the body carried no access token
    #[error("Token endpoint response did not contain an access_token")]
    MissingAccessToken,
}

/// Errors raised while reading the local `sites/` directory
#[derive(Error, Debug)]
pub enum SiteError {
    #[error("Failed to read sites directory {path}: {source}")]
    ReadDir {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Sites directory {path} is empty")]
    EmptyDir { path: String },

    #[error("Failed to read manifest {path}: {source}")]
    ReadManifest {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse manifest {path}: {source}")]
    ParseManifest {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Manifest {path} has no string \"name\" field")]
    MissingName { path: String },
}

/// Errors raised by the interactive prompt collector
#[derive(Error, Debug)]
pub enum PromptError {
    #[error("Failed to read from input: {source}")]
    Read {
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write prompt: {source}")]
    Write {
        #[source]
        source: std::io::Error,
    },

    #[error("Input closed before answering: {question}")]
    InputClosed { question: String },

    #[error("Prompt task failed: {source}")]
    Task {
        #[source]
        source: tokio::task::JoinError,
    },
}

/// Token exchange errors
#[derive(Error, Debug)]
pub enum AuthError {
    /// HTTPリクエストエラー
    #[error("Request error: {source}")]
    RequestError {
        #[source]
        source: reqwest::Error,
    },

    /// JSONパースエラー
    #[error("JSON parsing error: {source}")]
    JsonError {
        #[source]
        source: serde_json::Error,
    },

    /// Non-success status from the token endpoint
    #[error("Token endpoint returned {status}: {body}")]
    TokenEndpointError { status: u16, body: String },

    #[error("Failed to create HTTP client: {source}")]
    ClientBuildError {
        #[source]
        source: reqwest::Error,
    },
}

/// Platform.sh project API errors
#[derive(Error, Debug)]
pub enum PlatformError {
    /// ネットワークエラー
    #[error("Network error: {source}")]
    NetworkError {
        #[source]
        source: reqwest::Error,
    },

    /// Non-success status from a project endpoint
    #[error("{operation} failed with {status}: {body}")]
    ApiError {
        operation: String,
        status: u16,
        body: String,
    },
}

/// 設定関連エラー
#[derive(Error, Debug)]
pub enum ConfigError {
    /// 設定ファイル読み込みエラー
    #[error("Failed to load config file: {source}")]
    LoadError {
        #[source]
        source: std::io::Error,
    },

    /// 設定ファイルパースエラー
    #[error("Failed to parse config file: {source}")]
    ParseError {
        #[source]
        source: toml::de::Error,
    },

    /// 設定バリデーションエラー
    #[error("Configuration validation failed: {reason}")]
    ValidationError { reason: String },
}

impl From<reqwest::Error> for AuthError {
    fn from(error: reqwest::Error) -> Self {
        AuthError::RequestError { source: error }
    }
}

impl From<serde_json::Error> for AuthError {
    fn from(error: serde_json::Error) -> Self {
        AuthError::JsonError { source: error }
    }
}

impl From<reqwest::Error> for PlatformError {
    fn from(error: reqwest::Error) -> Self {
        PlatformError::NetworkError { source: error }
    }
}

impl From<std::io::Error> for ConfigError {
    fn from(error: std::io::Error) -> Self {
        ConfigError::LoadError { source: error }
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(error: toml::de::Error) -> Self {
        ConfigError::ParseError { source: error }
    }
}
