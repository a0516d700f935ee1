//! lastopened CLI
//!
//! Watches one directory (the Desktop unless told otherwise) and logs every
//! top-level entry that gets opened, until interrupted with Ctrl-C.

pub mod logging;
pub mod util;

use anyhow::{Context, Result};
use chrono::Local;
use clap::Parser;
use std::path::PathBuf;
use std::time::{Duration, Instant};
use tracing::{debug, info};
use watcher::platform::default_source;
use watcher::{
    Backend, DirectoryPoller, LastOpenedSource, OpenedSink, PollerConfig, QueryErrorPolicy,
    TracingSink,
};

/// lastopened - log when files and folders on your Desktop are opened
#[derive(Debug, Parser)]
#[command(name = "lastopened")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Directory to watch (default: your Desktop)
    #[arg(long)]
    pub root: Option<PathBuf>,

    /// Milliseconds between polls (default: 1000)
    #[arg(
        long,
        default_value_t = 1000,
        value_parser = clap::value_parser!(u64).range(1..=3_600_000)
    )]
    pub interval_ms: u64,

    /// Keep polling when a lookup fails instead of stopping
    #[arg(long)]
    pub skip_failed_queries: bool,

    /// Lookup backend: mdls or atime (default: mdls on macOS, atime elsewhere)
    #[arg(long)]
    pub backend: Option<Backend>,

    /// Append logs to this file instead of stdout
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    /// Poller settings from flags, falling back to the Desktop
    pub fn poller_config(&self) -> Result<PollerConfig> {
        let config = match &self.root {
            Some(root) => PollerConfig::new(root),
            None => PollerConfig::desktop().context("Could not determine Desktop directory")?,
        };

        let policy = if self.skip_failed_queries {
            QueryErrorPolicy::SkipEntry
        } else {
            QueryErrorPolicy::Abort
        };

        Ok(config
            .with_interval(Duration::from_millis(self.interval_ms))
            .with_query_error_policy(policy))
    }

    pub fn backend(&self) -> Backend {
        self.backend.unwrap_or_else(Backend::platform_default)
    }
}

/// Watch the directory chosen by `cli` with the selected backend
pub async fn run(cli: Cli) -> Result<()> {
    let config = cli.poller_config()?;
    let source = match cli.backend {
        Some(backend) => backend.source(),
        None => default_source(),
    };
    debug!("Using {} backend", cli.backend());

    monitor(config, source, TracingSink).await
}

/// Seed the poller, then poll until Ctrl-C
///
/// Seeding failures abort before the stop messages. Once polling has begun,
/// the stop time and total runtime are logged however the loop ends.
pub async fn monitor<S, K>(config: PollerConfig, source: S, sink: K) -> Result<()>
where
    S: LastOpenedSource,
    K: OpenedSink,
{
    let started = Instant::now();
    info!(
        "Monitoring started at {}",
        Local::now().format(util::DATETIME_FORMAT)
    );

    let root = config.root.clone();
    let mut poller = DirectoryPoller::new(config, source, sink)
        .with_context(|| format!("Failed to start monitoring {}", root.display()))?;

    let outcome = watch(&mut poller).await;

    info!(
        "Monitoring stopped at {}",
        Local::now().format(util::DATETIME_FORMAT)
    );
    info!("Total runtime: {}", util::format_runtime(started.elapsed()));

    outcome
}

/// Race the polling loop against Ctrl-C
pub async fn watch<S, K>(poller: &mut DirectoryPoller<S, K>) -> Result<()>
where
    S: LastOpenedSource,
    K: OpenedSink,
{
    tokio::select! {
        result = poller.monitor_directory() => result.context("Monitoring failed"),
        signal = tokio::signal::ctrl_c() => {
            signal.context("Failed to listen for Ctrl-C")?;
            debug!("Interrupt received");
            Ok(())
        }
    }
}
