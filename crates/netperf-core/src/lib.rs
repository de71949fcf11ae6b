//! netperf-core — extraction and export layers for netperf.
//!
//! This crate turns backup-job log lines into [`EventRecord`] values and
//! writes them out. It knows nothing about where lines come from; see
//! `netperf-feeds` for the file and directory sources.
//!
//! # Architecture
//!
//! ```text
//! Line source ──► Normalizer ──► Export
//!                    │
//!                    └──► validate preview
//! ```
//!
//! Every stage is synchronous and line-oriented: no record depends on any
//! other line.

pub mod config;
pub mod export;
pub mod normalizer;
pub mod types;

pub use types::{EventRecord, ExportFormat, COLUMNS};
