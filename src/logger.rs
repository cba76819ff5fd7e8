use std::path::{Path, PathBuf};
use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use crate::config::Config;

/// Set up application logging based on configuration.
///
/// Logs go to stderr unless `logging.file_path` is set. The returned guard
/// must be held until exit so buffered file output is flushed.
pub fn setup_logging(config: &Config) -> Option<WorkerGuard> {
    // RUST_LOG takes precedence over the configured level
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level()));

    let file_logger = config
        .log_file_path()
        .as_deref()
        .and_then(|path| match create_file_logger(Path::new(path)) {
            Ok(logger) => Some(logger),
            Err(e) => {
                eprintln!("Failed to open log file {}: {}. Logging to stderr.", path, e);
                None
            }
        });

    let (result, guard) = match file_logger {
        Some((file_writer, guard)) => {
            let subscriber = FmtSubscriber::builder()
                .with_env_filter(env_filter)
                .with_writer(file_writer)
                .with_ansi(false)
                .finish();
            (tracing::subscriber::set_global_default(subscriber), Some(guard))
        }
        None => {
            let subscriber = FmtSubscriber::builder()
                .with_env_filter(env_filter)
                .with_writer(std::io::stderr)
                .finish();
            (tracing::subscriber::set_global_default(subscriber), None)
        }
    };

    if let Err(e) = result {
        eprintln!("Failed to set global tracing subscriber: {}", e);
    }

    guard
}

// Create a non-rotating file logger; a one-shot run never needs rotation
fn create_file_logger(log_path: &Path) -> std::io::Result<(NonBlocking, WorkerGuard)> {
    let log_dir = match log_path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };

    std::fs::create_dir_all(&log_dir)?;

    let log_file_name = log_path
        .file_name()
        .unwrap_or(std::ffi::OsStr::new("psh-github-setup.log"));

    let file_appender = tracing_appender::rolling::never(&log_dir, log_file_name);
    Ok(tracing_appender::non_blocking(file_appender))
}
