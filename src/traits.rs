use crate::config::Config;
use crate::errors::ConfigError;
use std::path::PathBuf;

/// Trait for handling printing messages to console, allowing for testable output
pub trait MessageHandler: Send + Sync {
    fn print(&self, message: &str);
    fn eprint(&self, message: &str);
}

/// Default implementation that calls println!/eprintln!
pub struct DefaultMessageHandler;

impl MessageHandler for DefaultMessageHandler {
    fn print(&self, message: &str) {
        println!("{}", message);
    }

    fn eprint(&self, message: &str) {
        eprintln!("{}", message);
    }
}

/// Trait for configuration loading, allowing for testable configuration
pub trait ConfigProvider: Send + Sync {
    fn load_config(&self) -> Result<Config, ConfigError>;
}

/// Loads from an explicit path, or from the user config directory
pub struct FileConfigProvider {
    pub path: Option<PathBuf>,
}

impl ConfigProvider for FileConfigProvider {
    fn load_config(&self) -> Result<Config, ConfigError> {
        match &self.path {
            Some(path) => crate::config::load_config_from(path),
            None => crate::config::load_config(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    #[test]
    fn test_default_message_handler() {
        let handler: Box<dyn MessageHandler> = Box::new(DefaultMessageHandler);
        handler.print("Test message");
        handler.eprint("Test error message");
    }

    #[test]
    fn test_file_config_provider_with_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[logging]\nlevel = \"debug\"\n").unwrap();

        let provider = FileConfigProvider { path: Some(path) };
        let config = provider.load_config().unwrap();
        assert_eq!(config.log_level(), "debug");
    }

    #[test]
    fn test_mock_message_handler() {
        struct MockMessageHandler {
            printed: Arc<Mutex<Vec<String>>>,
            eprinted: Arc<Mutex<Vec<String>>>,
        }

        impl MessageHandler for MockMessageHandler {
            fn print(&self, message: &str) {
                self.printed.lock().unwrap().push(message.to_string());
            }

            fn eprint(&self, message: &str) {
                self.eprinted.lock().unwrap().push(message.to_string());
            }
        }

        let printed = Arc::new(Mutex::new(Vec::new()));
        let eprinted = Arc::new(Mutex::new(Vec::new()));
        let handler = MockMessageHandler {
            printed: printed.clone(),
            eprinted: eprinted.clone(),
        };

        handler.print("Hello");
        handler.eprint("World");

        assert_eq!(printed.lock().unwrap().as_slice(), ["Hello"]);
        assert_eq!(eprinted.lock().unwrap().as_slice(), ["World"]);
    }
}
