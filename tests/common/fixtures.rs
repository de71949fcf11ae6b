//! Static log corpora used across harnesses.
//!
//! Lines are modelled on backup job logs: a timestamp prefix followed by the
//! job message. Each corpus is a `&'static [&'static str]`.

#![allow(dead_code)]

use std::path::{Path, PathBuf};

/// Lines every extractor recognises, one measurement group each.
pub const CORPUS_NETWORK: &[&str] = &[
    "2024-01-15 10:00:00 Bottleneck: Network: 87%",
    "2024-01-15 10:00:05 Transferred: 1.5 GB Duration: 00:10:00 Avg speed: 2.5 MB/s",
    "2024-01-15 10:00:10 WAN Accelerator wan-01: cache hit: 42%",
    "2024-01-15 10:00:15 Task failed, retries: 3",
];

/// Lines no extractor recognises.
pub const CORPUS_NOISE: &[&str] = &[
    "2024-01-15 10:00:00 Job Nightly started",
    "2024-01-15 10:00:01 Processing VM sql-01",
    "Bottleneck: Source",
    "WAN Accelerator service started",
    "",
];

/// Interleaved matches and noise, as a real job log would read.
pub const CORPUS_MIXED: &[&str] = &[
    "15.01.2024 22:00:01.117 Job Nightly started",
    "15.01.2024 22:00:04.300 Bottleneck: Network: 64% Retries: 1",
    "15.01.2024 22:10:42.005 Processing finished",
    "15.01.2024 22:10:42.900 Transfer: 700 MB Duration: 00:10:38 Avg speed: 1.1 MB/s",
    "Summary: WAN Accelerator hit=12%",
];

/// Write `lines` as a newline-terminated file at `dir/name`.
pub fn write_log(dir: &Path, name: &str, lines: &[&str]) -> PathBuf {
    let path = dir.join(name);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).expect("create fixture dir");
    }
    let mut text = lines.join("\n");
    text.push('\n');
    std::fs::write(&path, text).expect("write fixture log");
    path
}

/// Build a directory with three `.log` files and one `.txt` file.
///
/// Returns the number of network lines placed in `.log` files.
pub fn log_tree(root: &Path) -> usize {
    write_log(root, "a.log", &CORPUS_NETWORK[..2]);
    write_log(root, "jobs/b.log", &CORPUS_NETWORK[2..]);
    write_log(root, "jobs/deep/c.log", CORPUS_NOISE);
    write_log(root, "notes.txt", CORPUS_NETWORK);
    CORPUS_NETWORK.len()
}
