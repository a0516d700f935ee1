//! The "last opened time" capability

use opened_core::ResolveError;
use std::path::Path;

/// Resolves when a filesystem entry was last opened
///
/// Implementations return `Ok(None)` when the system has no record of the
/// entry ever being opened, and a `YYYY-MM-DD HH:MM:SS` local time otherwise.
/// The path must exist; failures are propagated, never retried.
pub trait LastOpenedSource {
    fn last_opened(&self, path: &Path) -> Result<Option<String>, ResolveError>;
}

impl<T: LastOpenedSource + ?Sized> LastOpenedSource for Box<T> {
    fn last_opened(&self, path: &Path) -> Result<Option<String>, ResolveError> {
        (**self).last_opened(path)
    }
}
