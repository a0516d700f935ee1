//! Snapshot table: entry name -> last known opened time
//!
//! Names are fixed once seeded. Entries are never removed, even when they
//! vanish from the directory; callers skip them instead.

use std::collections::BTreeMap;
use std::ffi::{OsStr, OsString};

/// Last known state of one tracked directory entry
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WatchedEntry {
    last_accessed_local: Option<String>,
}

impl WatchedEntry {
    /// Create an entry with a known opened time
    pub fn new(last_accessed_local: Option<String>) -> Self {
        Self { last_accessed_local }
    }

    /// Last opened time as `YYYY-MM-DD HH:MM:SS`, if any
    pub fn last_accessed_local(&self) -> Option<&str> {
        self.last_accessed_local.as_deref()
    }

    /// Store `current` and report whether it differs from the previous value
    pub fn update(&mut self, current: Option<String>) -> bool {
        if self.last_accessed_local == current {
            return false;
        }
        self.last_accessed_local = current;
        true
    }
}

/// Mapping of tracked entry names to their last opened time
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SnapshotTable {
    entries: BTreeMap<OsString, WatchedEntry>,
}

impl SnapshotTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start tracking `name`
    ///
    /// Only meant for the seed phase.
    pub fn track(&mut self, name: impl Into<OsString>, last_accessed_local: String) {
        self.entries
            .insert(name.into(), WatchedEntry::new(Some(last_accessed_local)));
    }

    pub fn get(&self, name: impl AsRef<OsStr>) -> Option<&WatchedEntry> {
        self.entries.get(name.as_ref())
    }

    pub fn contains(&self, name: impl AsRef<OsStr>) -> bool {
        self.entries.contains_key(name.as_ref())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Tracked names in sorted order
    pub fn names(&self) -> impl Iterator<Item = &OsStr> {
        self.entries.keys().map(OsString::as_os_str)
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = (&OsStr, &mut WatchedEntry)> {
        self.entries
            .iter_mut()
            .map(|(name, entry)| (name.as_os_str(), entry))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_reports_only_changes() {
        let mut entry = WatchedEntry::new(Some("2024-01-01 14:00:00".to_string()));

        assert!(!entry.update(Some("2024-01-01 14:00:00".to_string())));
        assert!(entry.update(Some("2024-01-01 15:00:00".to_string())));
        assert_eq!(entry.last_accessed_local(), Some("2024-01-01 15:00:00"));
    }

    #[test]
    fn test_update_to_none_counts_as_change() {
        let mut entry = WatchedEntry::new(Some("2024-01-01 14:00:00".to_string()));

        assert!(entry.update(None));
        assert_eq!(entry.last_accessed_local(), None);
        assert!(!entry.update(None));
    }

    #[test]
    fn test_track_and_lookup() {
        let mut table = SnapshotTable::new();
        assert!(table.is_empty());

        table.track("notes.txt", "2024-01-01 14:00:00".to_string());
        table.track("Projects", "2024-01-02 09:30:00".to_string());

        assert_eq!(table.len(), 2);
        assert!(table.contains("Projects"));
        assert!(!table.contains("missing"));
        assert_eq!(
            table.get("notes.txt").and_then(WatchedEntry::last_accessed_local),
            Some("2024-01-01 14:00:00")
        );

        let names: Vec<_> = table.names().collect();
        assert_eq!(names, vec![OsStr::new("Projects"), OsStr::new("notes.txt")]);
    }

    #[test]
    fn test_iter_mut_updates_in_place() {
        let mut table = SnapshotTable::new();
        table.track("a", "2024-01-01 00:00:00".to_string());

        for (_, entry) in table.iter_mut() {
            entry.update(Some("2024-01-01 00:00:01".to_string()));
        }

        assert_eq!(
            table.get("a").and_then(WatchedEntry::last_accessed_local),
            Some("2024-01-01 00:00:01")
        );
    }
}
