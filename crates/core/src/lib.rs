//! Core types for lastopened
//!
//! This crate provides:
//! - The snapshot table of tracked directory entries
//! - Parsing of the metadata query output (`key = value` lines)
//! - Conversion of query timestamps to local wall-clock strings
//! - Resolver error types

pub mod error;
pub mod snapshot;
pub mod timestamp;

// Re-exports
pub use error::ResolveError;
pub use snapshot::{SnapshotTable, WatchedEntry};
pub use timestamp::{LOCAL_FORMAT, NULL_SENTINEL};
