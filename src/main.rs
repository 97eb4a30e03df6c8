// Contact Form - terminal contact form with live validation
//
// Four fields (first name, last name, email, message) validated as you type,
// swept on submit, and echoed back in a confirmation panel once accepted.
//
// Architecture:
// - Form: state container, validation rules, and a flat render model
// - TUI (ratatui): the interactive form, driven by a tokio event loop
// - CLI (clap): headless submission and config management
// - Logging (tracing): TUI log buffer or stderr, plus optional rolling files

mod cli;
mod config;
mod form;
mod logging;
mod tui;
mod util;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Commands};
use config::{Config, LogRotation};
use logging::{LogBuffer, TuiLogLayer};
use std::process::ExitCode;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    let submit_args = match cli.command {
        Some(Commands::Config { show, reset, path }) => {
            cli::handle_config(show, reset, path)?;
            return Ok(ExitCode::SUCCESS);
        }
        Some(Commands::Submit(args)) => Some(args),
        None => None,
    };
    let headless = submit_args.is_some();

    // Ensure config template exists (helps users discover options)
    Config::ensure_config_exists();
    let config = Config::from_env();

    let log_buffer = LogBuffer::new();

    // The guard must outlive everything that logs so the file writer flushes
    let _file_guard = init_tracing(&config, &log_buffer, headless)?;

    tracing::debug!(
        theme = %config.theme,
        level = %config.logging.level,
        file_logging = config.logging.file_enabled,
        "Configuration loaded"
    );

    match submit_args {
        Some(args) => cli::handle_submit(&args),
        None => {
            if let Err(e) = tui::run_tui(log_buffer, config).await {
                // Only reaches the log file; the buffer dies with the screen
                tracing::error!("TUI failed: {:#}", e);
                return Err(e);
            }
            Ok(ExitCode::SUCCESS)
        }
    }
}

/// Install the global subscriber
///
/// - TUI mode: capture logs to the buffer (keeps the display intact)
/// - Headless mode: write logs to stderr (stdout carries the confirmation)
/// - File logging: optional JSON lines in rotating files, on top of either
///
/// Precedence: RUST_LOG env var > config file > default "info"
fn init_tracing(
    config: &Config,
    log_buffer: &LogBuffer,
    headless: bool,
) -> Result<Option<WorkerGuard>> {
    let default_filter = format!("contact_form={}", config.logging.level);
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into());

    let tui_layer = (!headless).then(|| TuiLogLayer::new(log_buffer.clone()));
    let stderr_layer = headless.then(|| {
        tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(false)
    });

    let (file_layer, guard) = if config.logging.file_enabled {
        let logging = &config.logging;
        std::fs::create_dir_all(&logging.file_dir).with_context(|| {
            format!("Could not create log directory {}", logging.file_dir.display())
        })?;

        let file_appender = match logging.file_rotation {
            LogRotation::Hourly => {
                tracing_appender::rolling::hourly(&logging.file_dir, &logging.file_prefix)
            }
            LogRotation::Daily => {
                tracing_appender::rolling::daily(&logging.file_dir, &logging.file_prefix)
            }
            LogRotation::Never => {
                tracing_appender::rolling::never(&logging.file_dir, &logging.file_prefix)
            }
        };

        // Writes happen on a background thread
        let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
        let layer = tracing_subscriber::fmt::layer()
            .json()
            .with_writer(non_blocking)
            .with_ansi(false);
        (Some(layer), Some(guard))
    } else {
        (None, None)
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tui_layer)
        .with(stderr_layer)
        .with(file_layer)
        .try_init()
        .context("Failed to initialize logging")?;

    Ok(guard)
}
