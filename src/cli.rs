use crate::config::Config;
use clap::Parser;
use std::path::PathBuf;

/// psh-github-setup - Connect a GitHub repository to a Platform.sh project
#[derive(Parser, Debug)]
#[command(name = "psh-github-setup")]
#[command(
    about = "Registers a GitHub integration on a Platform.sh project and seeds its git variables",
    long_about = None
)]
pub struct Cli {
    /// Path to the configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Directory holding the site folders
    #[arg(short, long, value_name = "DIR")]
    pub sites_dir: Option<PathBuf>,

    /// Logging level
    #[arg(short, long, value_name = "LEVEL")]
    pub log_level: Option<String>,

    /// Platform.sh API base URL
    #[arg(long, value_name = "URL")]
    pub api_base_url: Option<String>,

    /// Platform.sh token exchange endpoint
    #[arg(long, value_name = "URL")]
    pub auth_url: Option<String>,
}

impl Cli {
    /// Command-line values win over the config file
    pub fn apply_overrides(&self, config: &mut Config) {
        if let Some(dir) = &self.sites_dir {
            config.site.sites_dir = dir.clone();
        }
        if let Some(level) = &self.log_level {
            config.logging.level = level.clone();
        }
        if let Some(url) = &self.api_base_url {
            config.platform.api_base_url = url.clone();
        }
        if let Some(url) = &self.auth_url {
            config.platform.auth_url = url.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn test_no_args_keeps_config() {
        let cli = Cli::try_parse_from(["psh-github-setup"]).unwrap();
        let mut config = Config::default();
        cli.apply_overrides(&mut config);

        assert_eq!(config.sites_dir(), Path::new("sites"));
        assert_eq!(config.log_level(), "warn");
        assert_eq!(config.platform.api_base_url, "https://api.platform.sh");
    }

    #[test]
    fn test_overrides() {
        let cli = Cli::try_parse_from([
            "psh-github-setup",
            "--sites-dir",
            "apps",
            "-l",
            "debug",
            "--api-base-url",
            "http://localhost:1234",
            "--auth-url",
            "http://localhost:1234/oauth2/token",
        ])
        .unwrap();
        let mut config = Config::default();
        cli.apply_overrides(&mut config);

        assert_eq!(config.sites_dir(), Path::new("apps"));
        assert_eq!(config.log_level(), "debug");
        assert_eq!(config.platform.api_base_url, "http://localhost:1234");
        assert_eq!(
            config.platform.auth_url,
            "http://localhost:1234/oauth2/token"
        );
    }
}
