//! Directory polling for lastopened
//!
//! This crate provides:
//! - The [`LastOpenedSource`] capability and its platform adapters
//! - The [`OpenedSink`] that change reports are written to
//! - [`DirectoryPoller`], the snapshot-diff polling loop

pub mod config;
pub mod error;
pub mod platform;
pub mod poller;
pub mod sink;
pub mod source;

pub use opened_core::ResolveError;

pub use config::{PollerConfig, QueryErrorPolicy};
pub use error::PollError;
pub use platform::Backend;
pub use poller::DirectoryPoller;
pub use sink::{OpenedSink, TracingSink};
pub use source::LastOpenedSource;
