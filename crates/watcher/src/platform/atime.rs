//! Filesystem access time lookup
//!
//! Used where Spotlight is unavailable. Access times depend on mount
//! options (`noatime`, `relatime`), so this backend may lag behind what the
//! user actually opened. It never reports "never opened".

use crate::source::LastOpenedSource;
use chrono::Local;
use opened_core::{timestamp, ResolveError};
use std::fs;
use std::path::Path;

#[derive(Debug, Default, Clone, Copy)]
pub struct AtimeSource;

impl LastOpenedSource for AtimeSource {
    fn last_opened(&self, path: &Path) -> Result<Option<String>, ResolveError> {
        let accessed = fs::metadata(path)
            .and_then(|metadata| metadata.accessed())
            .map_err(|source| ResolveError::Metadata {
                path: path.to_path_buf(),
                source,
            })?;

        Ok(Some(timestamp::format_system_time(accessed, &Local)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use filetime::{set_file_atime, FileTime};
    use std::time::{Duration, SystemTime};
    use tempfile::TempDir;

    #[test]
    fn test_reports_access_time_in_local_format() {
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join("report.pdf");
        fs::write(&file, b"%PDF").unwrap();

        let accessed = SystemTime::UNIX_EPOCH + Duration::from_secs(1_704_110_400);
        set_file_atime(&file, FileTime::from_system_time(accessed)).unwrap();

        let resolved = AtimeSource.last_opened(&file).unwrap();
        assert_eq!(
            resolved,
            Some(timestamp::format_system_time(accessed, &Local))
        );
    }

    #[test]
    fn test_missing_path_is_metadata_error() {
        let temp_dir = TempDir::new().unwrap();
        let err = AtimeSource
            .last_opened(&temp_dir.path().join("gone"))
            .unwrap_err();

        assert!(matches!(err, ResolveError::Metadata { .. }));
    }
}
