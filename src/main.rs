use clap::Parser;
use psh_github_setup::cli::Cli;
use psh_github_setup::logger::setup_logging;
use psh_github_setup::{
    ConfigProvider, DefaultMessageHandler, FileConfigProvider, PromptCollector, runner,
};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Load config first to get log level
    let provider = FileConfigProvider {
        path: cli.config.clone(),
    };
    let mut config = provider.load_config().unwrap_or_else(|e| {
        eprintln!("Failed to load config: {}", e);
        std::process::exit(1);
    });
    cli.apply_overrides(&mut config);
    if let Err(e) = config.validate() {
        eprintln!("{}", e);
        std::process::exit(1);
    }

    // Keep the guard alive to ensure log messages are flushed
    let _guard = setup_logging(&config);

    tracing::info!("Starting setup with sites from {}", config.sites_dir().display());

    // The outcome is printed either way; the process exits normally after a
    // failed run too.
    let succeeded = runner::run(&config, PromptCollector::stdio(), &DefaultMessageHandler).await;

    tracing::info!("Setup finished (success: {})", succeeded);
}
