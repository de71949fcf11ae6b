//! Core types for netperf-core.
//!
//! This module defines the [`EventRecord`] produced by the normalizer and
//! consumed by the export layer, plus the [`ExportFormat`] discriminant.

use serde::{Deserialize, Serialize};

/// Column order of every export. Matches the field order of [`EventRecord`].
pub const COLUMNS: [&str; 7] = [
    "event_time",
    "bytes_sent",
    "duration_s",
    "network_bottleneck_pct",
    "wan_cache_hit_pct",
    "retries",
    "message",
];

/// One network-performance event extracted from a single log line.
///
/// Every numeric field is optional: `None` means the line did not carry that
/// measurement, which is distinct from a measured zero. A record only exists
/// when at least one of the four numeric groups was extracted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventRecord {
    /// Leading timestamp text, verbatim. No date parsing is attempted.
    pub event_time: Option<String>,
    /// Transfer size in bytes (binary units).
    pub bytes_sent: Option<u64>,
    /// Transfer duration in seconds.
    pub duration_s: Option<u64>,
    pub network_bottleneck_pct: Option<u16>,
    pub wan_cache_hit_pct: Option<u16>,
    pub retries: Option<u64>,
    /// The line with any leading timestamp removed.
    pub message: String,
}

impl EventRecord {
    /// An empty record for `message`, with every measurement absent.
    pub fn new(event_time: Option<&str>, message: &str) -> Self {
        Self {
            event_time: event_time.map(str::to_string),
            bytes_sent: None,
            duration_s: None,
            network_bottleneck_pct: None,
            wan_cache_hit_pct: None,
            retries: None,
            message: message.to_string(),
        }
    }

    /// True if any measurement field is populated.
    pub fn has_measurement(&self) -> bool {
        self.bytes_sent.is_some()
            || self.duration_s.is_some()
            || self.network_bottleneck_pct.is_some()
            || self.wan_cache_hit_pct.is_some()
            || self.retries.is_some()
    }
}

/// Output format for the scan export.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    #[default]
    Csv,
    Jsonl,
}

impl ExportFormat {
    /// File extension used when the output path is derived automatically.
    pub fn extension(self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Jsonl => "jsonl",
        }
    }
}

impl std::fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExportFormat::Csv => write!(f, "csv"),
            ExportFormat::Jsonl => write!(f, "jsonl"),
        }
    }
}

impl std::str::FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "csv" => Ok(ExportFormat::Csv),
            "jsonl" | "ndjson" => Ok(ExportFormat::Jsonl),
            other => Err(format!("unknown export format: {other} (expected csv or jsonl)")),
        }
    }
}
