pub mod auth;
pub mod cli;
pub mod config;
pub mod errors;
pub mod logger;
pub mod models;
pub mod platform;
pub mod prompt;
pub mod runner;
pub mod site;
pub mod traits;

pub use auth::TokenExchanger;
pub use config::Config;
pub use errors::{AppError, AuthError, ConfigError, PlatformError, PromptError, SiteError};
pub use models::{SiteInfo, TokenRequest, TokenResponse, UserInput};
pub use platform::PlatformClient;
pub use prompt::PromptCollector;
pub use traits::{ConfigProvider, DefaultMessageHandler, FileConfigProvider, MessageHandler};
