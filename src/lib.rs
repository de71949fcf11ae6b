//! netperf — network-performance event extraction for backup job logs.
//!
//! This crate wires the line source from `netperf-feeds` to the extraction
//! and export layers in `netperf-core`, and exposes the two commands so that
//! integration tests can drive them without spawning the binary.
//!
//! # Architecture
//!
//! ```text
//! LineSource ──► normalizer::matches ──► validate (stdout)
//!      │
//!      └───────► normalizer::extract ──► export (csv / jsonl)
//! ```
//!
//! Everything runs on the calling thread, one line at a time.

pub mod commands;

pub use netperf_core::{config, EventRecord, ExportFormat};
