//! Poller configuration
//!
//! There is no configuration file. Defaults match the plain `lastopened`
//! invocation; the binary overrides individual fields from its flags.

use std::path::{Path, PathBuf};
use std::time::Duration;

/// Default pause between ticks
pub const DEFAULT_INTERVAL: Duration = Duration::from_secs(1);

/// What a tick does when one entry's lookup fails
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum QueryErrorPolicy {
    /// Propagate the failure and end the loop
    #[default]
    Abort,
    /// Log a warning and leave the entry for the next tick
    SkipEntry,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PollerConfig {
    /// Directory whose immediate entries are tracked
    pub root: PathBuf,

    /// Sleep between ticks (default: 1 second)
    pub interval: Duration,

    /// Handling of lookup failures during ticks (seeding always aborts)
    pub on_query_error: QueryErrorPolicy,
}

impl PollerConfig {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            interval: DEFAULT_INTERVAL,
            on_query_error: QueryErrorPolicy::default(),
        }
    }

    /// Configuration for the user's Desktop, if it can be located
    pub fn desktop() -> Option<Self> {
        default_root().map(Self::new)
    }

    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    pub fn with_query_error_policy(mut self, policy: QueryErrorPolicy) -> Self {
        self.on_query_error = policy;
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

/// The user's Desktop directory, falling back to `~/Desktop`
pub fn default_root() -> Option<PathBuf> {
    dirs::desktop_dir().or_else(|| dirs::home_dir().map(|home| home.join("Desktop")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = PollerConfig::new("/tmp/watched");

        assert_eq!(config.root(), Path::new("/tmp/watched"));
        assert_eq!(config.interval, Duration::from_secs(1));
        assert_eq!(config.on_query_error, QueryErrorPolicy::Abort);
    }

    #[test]
    fn test_builders_override_defaults() {
        let config = PollerConfig::new("/tmp/watched")
            .with_interval(Duration::from_millis(250))
            .with_query_error_policy(QueryErrorPolicy::SkipEntry);

        assert_eq!(config.interval, Duration::from_millis(250));
        assert_eq!(config.on_query_error, QueryErrorPolicy::SkipEntry);
    }
}
