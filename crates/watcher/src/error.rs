//! Poller errors

use opened_core::ResolveError;
use std::ffi::OsString;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PollError {
    /// The monitored directory could not be listed
    #[error("failed to list directory {}", path.display())]
    ListDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Resolving one entry failed
    #[error("failed to resolve last opened time of {name:?}")]
    Resolve {
        name: OsString,
        #[source]
        source: ResolveError,
    },
}
