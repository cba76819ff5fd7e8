use crate::auth::TokenExchanger;
use crate::config::Config;
use crate::errors::{AppError, PromptError};
use crate::platform::PlatformClient;
use crate::prompt::PromptCollector;
use crate::site::inspect_sites_dir;
use crate::traits::MessageHandler;
use std::error::Error;
use std::io::{BufRead, Write};

pub const SUCCESS_MESSAGE: &str = "Success!";

/// Runs every stage in order: site inspection, prompts, token exchange,
/// integration registration, then the concurrent variable writes.
///
/// Prompts are read on the blocking pool so the runtime worker is never
/// parked on stdin.
///
/// Nothing is rolled back. If the integration was registered and a
/// variable write fails, the integration stays on the project.
pub async fn run_setup<R, W>(config: &Config, prompts: PromptCollector<R, W>) -> Result<(), AppError>
where
    R: BufRead + Send + 'static,
    W: Write + Send + 'static,
{
    let site = inspect_sites_dir(config.sites_dir())?;
    let input = tokio::task::spawn_blocking(move || prompts.collect(&site))
        .await
        .map_err(|e| PromptError::Task { source: e })??;

    let exchanger = TokenExchanger::new(&config.platform)?;
    let token = exchanger
        .exchange(&input.api_token)
        .await?
        .ok_or(AppError::MissingAccessToken)?;

    let client = PlatformClient::new(&config.platform, token)?;
    let status = client.register_integration(&input).await?;
    tracing::info!("Integration registered ({})", status);

    if let Err(e) = client.set_project_variables(&input).await {
        tracing::warn!(
            "GitHub integration for {} remains registered on project {}; remove it manually before retrying",
            input.repository(),
            input.project_id
        );
        return Err(e.into());
    }

    tracing::info!("All project variables created");
    Ok(())
}

/// Runs the setup inside a single error scope and reports the outcome.
///
/// Prints `Success!` on completion, otherwise the error with its source
/// chain. Returns whether the run succeeded.
pub async fn run<R, W>(
    config: &Config,
    prompts: PromptCollector<R, W>,
    messages: &dyn MessageHandler,
) -> bool
where
    R: BufRead + Send + 'static,
    W: Write + Send + 'static,
{
    match run_setup(config, prompts).await {
        Ok(()) => {
            messages.print(SUCCESS_MESSAGE);
            true
        }
        Err(e) => {
            tracing::debug!("Setup failed: {}", e);
            messages.eprint(&format_error(&e));
            false
        }
    }
}

/// Formats an error followed by each of its sources
pub fn format_error(error: &dyn Error) -> String {
    let mut message = error.to_string();
    let mut source = error.source();
    while let Some(cause) = source {
        let cause_text = cause.to_string();
        if !message.contains(&cause_text) {
            message.push_str(&format!("\n  caused by: {}", cause_text));
        }
        source = cause.source();
    }
    message
}
