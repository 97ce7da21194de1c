//! Logging configuration using tracing

use std::path::PathBuf;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::error::Result;

const LOG_FILE_NAME: &str = "pdeck.log";

const DEFAULT_FILTER: &str =
    "profile_deck=info,pdeck_core=info,pdeck_client=info,pdeck_app=info,pdeck_tui=info,warn";

/// Initialize the logging subsystem
///
/// Logs are written to `~/.local/share/profile-deck/logs/` (platform data dir).
/// Log level is controlled by the `PDECK_LOG` environment variable.
///
/// Stdout is left alone: the TUI owns the terminal and headless mode writes
/// NDJSON there.
///
/// # Examples
/// ```bash
/// PDECK_LOG=debug pdeck
/// PDECK_LOG=pdeck_app=trace pdeck --headless
/// ```
pub fn init() -> Result<()> {
    let log_dir = get_log_directory();
    std::fs::create_dir_all(&log_dir)?;

    let file_appender = RollingFileAppender::new(Rotation::DAILY, &log_dir, LOG_FILE_NAME);

    let env_filter =
        EnvFilter::try_from_env("PDECK_LOG").unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(file_appender)
                .with_ansi(false)
                .with_target(true)
                .with_thread_ids(false)
                .with_file(true)
                .with_line_number(true)
                .with_timer(fmt::time::ChronoLocal::new(
                    "%Y-%m-%d %H:%M:%S%.3f".to_string(),
                )),
        )
        .init();

    tracing::info!("═══════════════════════════════════════════════════════");
    tracing::info!("Profile Deck starting");
    tracing::info!("Log directory: {}", log_dir.display());
    tracing::info!("═══════════════════════════════════════════════════════");

    Ok(())
}

/// Get the log directory path
fn get_log_directory() -> PathBuf {
    let base = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    base.join("profile-deck").join("logs")
}
