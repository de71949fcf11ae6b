//! The two user-facing passes over a log input.
//!
//! [`validate`] previews which raw lines the extractors recognise; [`scan`]
//! runs full extraction and writes the export file.

pub mod scan;
pub mod validate;

pub use scan::{default_output_path, run_scan, ScanOptions, ScanSummary};
pub use validate::{run_validate, NO_MATCHES_NOTICE};
