//! Platform-specific "last opened" adapters
//!
//! - [`MdlsSource`]: Spotlight's `kMDItemLastUsedDate` via `mdls` (macOS)
//! - [`AtimeSource`]: filesystem access time (everywhere else)

pub mod atime;
pub mod mdls;

pub use atime::AtimeSource;
pub use mdls::MdlsSource;

use crate::source::LastOpenedSource;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Selectable lookup backend
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Backend {
    Mdls,
    Atime,
}

impl Backend {
    /// Backend native to the compilation target
    pub fn platform_default() -> Self {
        if cfg!(target_os = "macos") {
            Backend::Mdls
        } else {
            Backend::Atime
        }
    }

    pub fn source(self) -> Box<dyn LastOpenedSource> {
        match self {
            Backend::Mdls => Box::new(MdlsSource::new()),
            Backend::Atime => Box::new(AtimeSource),
        }
    }
}

impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Backend::Mdls => f.write_str("mdls"),
            Backend::Atime => f.write_str("atime"),
        }
    }
}

#[derive(Debug, Error)]
#[error("unknown backend '{0}' (expected 'mdls' or 'atime')")]
pub struct UnknownBackend(String);

impl FromStr for Backend {
    type Err = UnknownBackend;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "mdls" => Ok(Backend::Mdls),
            "atime" => Ok(Backend::Atime),
            _ => Err(UnknownBackend(s.to_string())),
        }
    }
}

/// Adapter for the current platform
pub fn default_source() -> Box<dyn LastOpenedSource> {
    Backend::platform_default().source()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backend_names_round_trip() {
        for backend in [Backend::Mdls, Backend::Atime] {
            assert_eq!(backend.to_string().parse::<Backend>().unwrap(), backend);
        }
        assert_eq!("MDLS".parse::<Backend>().unwrap(), Backend::Mdls);
        assert!("spotlight".parse::<Backend>().is_err());
    }

    #[test]
    fn test_platform_default() {
        #[cfg(target_os = "macos")]
        assert_eq!(Backend::platform_default(), Backend::Mdls);
        #[cfg(not(target_os = "macos"))]
        assert_eq!(Backend::platform_default(), Backend::Atime);
    }
}
