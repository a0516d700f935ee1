//! Spotlight metadata lookup through the `mdls` command

use crate::source::LastOpenedSource;
use chrono::{FixedOffset, Local};
use opened_core::{timestamp, ResolveError};
use std::ffi::OsString;
use std::path::Path;
use std::process::Command;
use tracing::trace;

/// Spotlight attribute holding the last time a user opened the entry
pub const LAST_USED_ATTRIBUTE: &str = "kMDItemLastUsedDate";

/// Runs `mdls -name kMDItemLastUsedDate <path>` once per lookup
///
/// Timestamps are shifted by the local UTC offset captured at construction,
/// so every reported time uses the same offset regardless of DST.
#[derive(Debug, Clone)]
pub struct MdlsSource {
    program: OsString,
    offset: FixedOffset,
}

impl MdlsSource {
    pub fn new() -> Self {
        Self::with_program("mdls")
    }

    /// Use a different executable with the same interface
    pub fn with_program(program: impl Into<OsString>) -> Self {
        Self {
            program: program.into(),
            offset: *Local::now().offset(),
        }
    }

    /// Report times at `offset` instead of the current local one
    pub fn with_offset(mut self, offset: FixedOffset) -> Self {
        self.offset = offset;
        self
    }

    pub fn offset(&self) -> FixedOffset {
        self.offset
    }
}

impl Default for MdlsSource {
    fn default() -> Self {
        Self::new()
    }
}

impl LastOpenedSource for MdlsSource {
    fn last_opened(&self, path: &Path) -> Result<Option<String>, ResolveError> {
        let command = self.program.to_string_lossy().into_owned();

        let output = Command::new(&self.program)
            .arg("-name")
            .arg(LAST_USED_ATTRIBUTE)
            .arg(path)
            .output()
            .map_err(|source| ResolveError::Spawn {
                command: command.clone(),
                path: path.to_path_buf(),
                source,
            })?;

        if !output.status.success() {
            return Err(ResolveError::CommandFailed {
                command,
                path: path.to_path_buf(),
                status: output.status.to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        trace!("{} {}: {}", command, path.display(), stdout.trim());

        timestamp::parse_last_used(&stdout, &self.offset)
    }
}
