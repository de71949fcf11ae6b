//! netperf-feeds — log line sources for netperf.
//!
//! A source turns an input path (one log file, or a directory searched
//! recursively for `*.log` files) into a lazy stream of decoded text lines
//! for the normalizer.

pub mod file;

pub use file::{discover, LineSource};

use std::path::PathBuf;

/// Errors that stop a source from being opened at all.
///
/// Problems with individual files found under a directory never surface
/// here; those files are skipped while iterating.
#[derive(Debug, thiserror::Error)]
pub enum FeedError {
    #[error("input path does not exist: {}", .0.display())]
    NotFound(PathBuf),
    #[error("invalid discovery pattern {pattern}: {source}")]
    Pattern {
        pattern: String,
        source: glob::PatternError,
    },
}
