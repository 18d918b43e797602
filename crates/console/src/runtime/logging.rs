//! Tracing subscriber setup.
//!
//! Interactive sessions log to a daily-rolling file so output never corrupts
//! the terminal; headless runs log to stderr. Filtering follows `RUST_LOG`.

use anyhow::Result;
use tracing_appender::non_blocking;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use crate::cli::{Cli, LogFormat};

/// Log file name inside `--log-dir`.
pub const LOG_FILE_NAME: &str = "awx-console.log";

/// Install the global subscriber.
///
/// The returned guard must be held until exit so buffered file logs are flushed.
pub fn init(cli: &Cli) -> Result<Option<WorkerGuard>> {
    let json = cli.log_format == LogFormat::Json;

    if cli.no_tui {
        tracing_subscriber::registry()
            .with(EnvFilter::from_default_env())
            .with(json.then(|| fmt::layer().json().with_writer(std::io::stderr)))
            .with((!json).then(|| fmt::layer().with_writer(std::io::stderr)))
            .try_init()?;
        return Ok(None);
    }

    std::fs::create_dir_all(&cli.log_dir)?;
    let file_appender = tracing_appender::rolling::daily(&cli.log_dir, LOG_FILE_NAME);
    let (writer, guard) = non_blocking(file_appender);

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(json.then(|| fmt::layer().json().with_writer(writer.clone())))
        .with((!json).then(|| fmt::layer().with_ansi(false).with_writer(writer)))
        .try_init()?;

    Ok(Some(guard))
}
