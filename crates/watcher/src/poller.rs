//! Snapshot-diff directory poller
//!
//! Seeds a [`SnapshotTable`] from the directory's immediate entries, then on
//! every tick re-resolves each tracked entry that is still listed and reports
//! those whose opened time changed.

use crate::config::{PollerConfig, QueryErrorPolicy};
use crate::error::PollError;
use crate::sink::{OpenedSink, TracingSink};
use crate::source::LastOpenedSource;
use opened_core::SnapshotTable;
use std::collections::HashSet;
use std::ffi::OsString;
use std::fs;
use std::path::Path;
use tracing::{debug, info, trace, warn};

/// Polls one directory for entries opened since the previous tick
pub struct DirectoryPoller<S, K = TracingSink> {
    config: PollerConfig,
    source: S,
    sink: K,
    table: SnapshotTable,
}

impl<S: LastOpenedSource, K: OpenedSink> DirectoryPoller<S, K> {
    /// List the root and record the opened time of every entry
    ///
    /// Entries never opened are left out and will never be reported. Any
    /// listing or lookup failure here is fatal, regardless of
    /// [`QueryErrorPolicy`].
    pub fn new(config: PollerConfig, source: S, sink: K) -> Result<Self, PollError> {
        let listed = list_names(config.root())?;
        let mut table = SnapshotTable::new();

        for name in &listed {
            let path = config.root().join(name);
            match source.last_opened(&path) {
                Ok(Some(last_opened)) => {
                    debug!("Tracking {:?} (last opened {})", name, last_opened);
                    table.track(name.clone(), last_opened);
                }
                Ok(None) => debug!("Skipping {:?}: never opened", name),
                Err(source) => {
                    return Err(PollError::Resolve {
                        name: name.clone(),
                        source,
                    })
                }
            }
        }

        info!(
            "Tracking {} of {} entries in {}",
            table.len(),
            listed.len(),
            config.root().display()
        );

        Ok(Self {
            config,
            source,
            sink,
            table,
        })
    }

    /// Poll forever, sleeping the configured interval between ticks
    ///
    /// Only returns on error. Stop it by dropping the future (e.g. from a
    /// `select!` against Ctrl-C); the interrupt is observed at the sleep.
    pub async fn monitor_directory(&mut self) -> Result<(), PollError> {
        debug!(
            "Polling {} every {:?}",
            self.config.root().display(),
            self.config.interval
        );

        loop {
            self.tick()?;
            tokio::time::sleep(self.config.interval).await;
        }
    }

    /// Run a single tick and return the number of changes reported
    pub fn tick(&mut self) -> Result<usize, PollError> {
        let listed = list_names(self.config.root())?;
        let mut reported = 0;

        for (name, entry) in self.table.iter_mut() {
            // Vanished entries stay tracked and resume if the name comes back
            if !listed.contains(name) {
                trace!("{:?} not present, skipping", name);
                continue;
            }

            let path = self.config.root().join(name);
            let current = match self.source.last_opened(&path) {
                Ok(current) => current,
                Err(source) => match self.config.on_query_error {
                    QueryErrorPolicy::Abort => {
                        return Err(PollError::Resolve {
                            name: name.to_os_string(),
                            source,
                        })
                    }
                    QueryErrorPolicy::SkipEntry => {
                        warn!("Skipping {:?} this tick: {}", name, source);
                        continue;
                    }
                },
            };

            if entry.update(current) {
                self.sink.opened(name, entry.last_accessed_local());
                reported += 1;
            }
        }

        Ok(reported)
    }

    pub fn table(&self) -> &SnapshotTable {
        &self.table
    }

    pub fn sink(&self) -> &K {
        &self.sink
    }
}

/// Names of the immediate entries of `root`
fn list_names(root: &Path) -> Result<HashSet<OsString>, PollError> {
    let list_err = |source| PollError::ListDir {
        path: root.to_path_buf(),
        source,
    };

    let mut names = HashSet::new();
    for entry in fs::read_dir(root).map_err(list_err)? {
        names.insert(entry.map_err(list_err)?.file_name());
    }

    Ok(names)
}
