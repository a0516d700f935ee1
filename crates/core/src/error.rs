//! Errors raised while resolving the last opened time of a path

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Failure of a single "last opened" lookup
///
/// Every variant is fatal to the caller; nothing here is retried.
#[derive(Debug, Error)]
pub enum ResolveError {
    /// The metadata command could not be started (missing binary, permissions)
    #[error("failed to run `{command}` for {}", path.display())]
    Spawn {
        command: String,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The metadata command ran but reported failure
    #[error("`{command}` exited with {status} for {}: {stderr}", path.display())]
    CommandFailed {
        command: String,
        path: PathBuf,
        status: String,
        stderr: String,
    },

    /// Query output had no `key = value` line
    #[error("unexpected metadata query output: {output:?}")]
    MalformedOutput { output: String },

    /// Query value was neither the null sentinel nor a timestamp with offset
    #[error("invalid timestamp {value:?}")]
    InvalidTimestamp {
        value: String,
        #[source]
        source: chrono::ParseError,
    },

    /// Filesystem metadata could not be read
    #[error("failed to read metadata of {}", path.display())]
    Metadata {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
