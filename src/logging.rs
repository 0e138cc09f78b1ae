use crate::cli::Args;
use crate::config::Config;
use crate::constants::LOG_FILE_NAME;
use crate::error::AppError;
use std::io::stdout;
use std::path::Path;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::filter::Directive;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Sets up logging for the application.
///
/// - Logs go to a daily rolling file and, unless `--quiet`, to stdout
/// - `--debug` lowers the crate's level from info to debug
/// - `RUST_LOG` directives are honored on top of that
/// - Creates the log directory if it doesn't exist
///
/// Returns the path to the log file and the guard that must be kept alive
/// for the duration of the program to ensure proper log flushing.
pub async fn setup_logging(args: &Args, config: &Config) -> Result<(String, WorkerGuard), AppError> {
    let (log_dir, log_file_name) = match &config.log_file_path {
        Some(custom_path) => {
            let path = Path::new(custom_path);
            let parent = path
                .parent()
                .filter(|p| !p.as_os_str().is_empty())
                .unwrap_or(Path::new("."));
            let file_name = path
                .file_name()
                .and_then(|n| n.to_str())
                .unwrap_or(LOG_FILE_NAME);
            (parent.to_string_lossy().to_string(), file_name.to_string())
        }
        None => (Config::get_log_dir_path(), LOG_FILE_NAME.to_string()),
    };

    if !Path::new(&log_dir).exists() {
        tokio::fs::create_dir_all(&log_dir).await.map_err(|e| {
            AppError::log_setup_error(format!("Failed to create log directory: {e}"))
        })?;
    }

    let file_appender = RollingFileAppender::new(Rotation::DAILY, &log_dir, &log_file_name);

    // The guard must outlive every log call so buffered lines are flushed
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let directive = crate_directive(args.debug)?;
    let stdout_layer = (!args.quiet).then(|| {
        fmt::Layer::new()
            .with_writer(stdout)
            .with_ansi(true)
            .with_filter(EnvFilter::from_default_env().add_directive(directive.clone()))
    });

    tracing_subscriber::registry()
        .with(stdout_layer)
        .with(
            fmt::Layer::new()
                .with_writer(non_blocking)
                .with_ansi(false)
                .with_filter(EnvFilter::from_default_env().add_directive(directive)),
        )
        .try_init()
        .map_err(|e| AppError::log_setup_error(format!("Failed to install subscriber: {e}")))?;

    let log_file_path = format!("{log_dir}/{log_file_name}");
    Ok((log_file_path, guard))
}

fn crate_directive(debug: bool) -> Result<Directive, AppError> {
    let level = if debug { "debug" } else { "info" };
    format!("{}={level}", env!("CARGO_CRATE_NAME"))
        .parse()
        .map_err(|e| AppError::log_setup_error(format!("Invalid log directive: {e}")))
}
