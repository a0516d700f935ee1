//! Log output setup
//!
//! Every line reads `YYYY-MM-DD HH:MM:SS LEVEL message`. `RUST_LOG`
//! overrides the default `info` filter.

use anyhow::{Context, Result};
use std::path::Path;
use tracing::Subscriber;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::fmt::time::ChronoLocal;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::EnvFilter;

/// Timestamp format of log lines
pub const LOG_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Build the subscriber writing formatted lines to `make_writer`
pub fn subscriber<W>(make_writer: W, ansi: bool) -> impl Subscriber + Send + Sync + 'static
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_timer(ChronoLocal::new(LOG_TIME_FORMAT.to_string()))
        .with_target(false)
        .with_ansi(ansi)
        .with_writer(make_writer)
        .finish()
}

/// Install the global subscriber
///
/// With `log_file`, output goes through a non-blocking writer whose guard
/// must be kept alive until exit.
pub fn init(log_file: Option<&Path>) -> Result<Option<WorkerGuard>> {
    match log_file {
        Some(path) => {
            let file_name = path
                .file_name()
                .with_context(|| format!("Invalid log file path: {}", path.display()))?;
            let dir = match path.parent() {
                Some(parent) if !parent.as_os_str().is_empty() => parent,
                _ => Path::new("."),
            };
            std::fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create log directory {}", dir.display()))?;

            let (writer, guard) =
                tracing_appender::non_blocking(tracing_appender::rolling::never(dir, file_name));

            tracing::subscriber::set_global_default(subscriber(writer, false))
                .context("Failed to initialize logging")?;

            Ok(Some(guard))
        }
        None => {
            tracing::subscriber::set_global_default(subscriber(std::io::stdout, true))
                .context("Failed to initialize logging")?;

            Ok(None)
        }
    }
}
