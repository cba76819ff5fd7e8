use crate::errors::ConfigError;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Platform.sh API設定
#[derive(Debug, Clone, Deserialize)]
pub struct PlatformConfig {
    /// Token exchange endpoint
    #[serde(default = "default_auth_url")]
    pub auth_url: String,

    /// APIベースURL（省略可、デフォルト: https://api.platform.sh）
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,

    /// OAuth client identifier sent with the token exchange
    #[serde(default = "default_client_id")]
    pub client_id: String,

    /// Request timeout in seconds. Unset means the HTTP client default.
    #[serde(default)]
    pub timeout_sec: Option<u64>,
}

fn default_auth_url() -> String {
    "https://auth.api.platform.sh/oauth2/token".to_string()
}

fn default_api_base_url() -> String {
    "https://api.platform.sh".to_string()
}

fn default_client_id() -> String {
    "platform-api-user".to_string()
}

impl Default for PlatformConfig {
    fn default() -> Self {
        Self {
            auth_url: default_auth_url(),
            api_base_url: default_api_base_url(),
            client_id: default_client_id(),
            timeout_sec: None,
        }
    }
}

/// Local site layout
#[derive(Debug, Clone, Deserialize)]
pub struct SiteConfig {
    #[serde(default = "default_sites_dir")]
    pub sites_dir: PathBuf,
}

fn default_sites_dir() -> PathBuf {
    PathBuf::from("sites")
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            sites_dir: default_sites_dir(),
        }
    }
}

/// ログ設定
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// ログレベル（省略可、デフォルト: warn）
    #[serde(default = "default_log_level")]
    pub level: String,

    /// ログファイルのパス（省略時は標準エラー出力）
    #[serde(default)]
    pub file_path: Option<String>,
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file_path: None,
        }
    }
}

/// メイン設定構造体
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub platform: PlatformConfig,

    #[serde(default)]
    pub site: SiteConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    pub fn log_level(&self) -> &str {
        &self.logging.level
    }

    pub fn log_file_path(&self) -> &Option<String> {
        &self.logging.file_path
    }

    pub fn sites_dir(&self) -> &Path {
        &self.site.sites_dir
    }

    /// Checks that both endpoints are absolute http(s) URLs
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (field, value) in [
            ("platform.auth_url", &self.platform.auth_url),
            ("platform.api_base_url", &self.platform.api_base_url),
        ] {
            let parsed = url::Url::parse(value).map_err(|e| ConfigError::ValidationError {
                reason: format!("{} is not a valid URL ({}): {}", field, value, e),
            })?;
            if !matches!(parsed.scheme(), "http" | "https") {
                return Err(ConfigError::ValidationError {
                    reason: format!("{} must use http or https, got {}", field, value),
                });
            }
        }
        Ok(())
    }
}

/// 設定ファイルのパスを取得
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push("psh-github-setup");
        path.push("config.toml");
        path
    })
}

/// 設定ファイルを読み込む
pub fn load_config_from(path: &Path) -> Result<Config, ConfigError> {
    if path.exists() {
        let contents = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        Ok(config)
    } else {
        // ファイルが存在しない場合はデフォルト設定を返す
        tracing::debug!("No config file at {}, using defaults", path.display());
        Ok(Config::default())
    }
}

pub fn load_config() -> Result<Config, ConfigError> {
    match default_config_path() {
        Some(path) => load_config_from(&path),
        None => Ok(Config::default()),
    }
}
