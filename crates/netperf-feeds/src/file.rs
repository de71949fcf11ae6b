//! File source — reads lines from one log file or a tree of `*.log` files.
//!
//! Bytes are decoded as UTF-8 with invalid sequences dropped rather than
//! replaced, so a corrupt byte never aborts a file and never injects a
//! replacement character into extracted messages. Files that cannot be
//! opened, or that fail part way through, are skipped after logging at
//! `debug`; lines already read from them are kept.
//!
//! Only `\n` ends a line (a trailing `\r` is stripped with it). A lone `\r`
//! is kept inside the line rather than treated as a break.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use glob::{glob, Pattern};
use tracing::debug;

use crate::FeedError;

/// Suffix searched for under a directory input. Matching is case-sensitive.
const LOG_PATTERN: &str = "**/*.log";

/// A lazy, single-pass iterator over the lines of every input file.
///
/// Files are opened one at a time as the previous one is exhausted; only one
/// handle is open at any moment. Trailing `\n` and `\r\n` are stripped.
pub struct LineSource {
    files: std::vec::IntoIter<PathBuf>,
    current: Option<(PathBuf, BufReader<File>)>,
    buf: Vec<u8>,
}

impl LineSource {
    /// Open `path` as a source.
    ///
    /// A directory is searched recursively for `*.log` files, visited in
    /// sorted path order. Any other existing path is read as a single file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, FeedError> {
        let path = path.as_ref();
        let files = if path.is_dir() {
            discover(path)?
        } else if path.exists() {
            vec![path.to_path_buf()]
        } else {
            return Err(FeedError::NotFound(path.to_path_buf()));
        };

        debug!(input = %path.display(), files = files.len(), "line source opened");
        Ok(Self::from_files(files))
    }

    /// Build a source over an explicit list of files, read in the given order.
    pub fn from_files(files: Vec<PathBuf>) -> Self {
        Self {
            files: files.into_iter(),
            current: None,
            buf: Vec::new(),
        }
    }
}

impl Iterator for LineSource {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        loop {
            if let Some((path, reader)) = self.current.as_mut() {
                self.buf.clear();
                match reader.read_until(b'\n', &mut self.buf) {
                    Ok(0) => self.current = None,
                    Ok(_) => return Some(decode_line(&self.buf)),
                    Err(err) => {
                        debug!(path = %path.display(), error = %err, "read failed; skipping rest of file");
                        self.current = None;
                    }
                }
                continue;
            }

            let path = self.files.next()?;
            match File::open(&path) {
                Ok(file) => self.current = Some((path, BufReader::new(file))),
                Err(err) => debug!(path = %path.display(), error = %err, "cannot open; skipping"),
            }
        }
    }
}

/// Recursively find `*.log` files under `root`, sorted by path.
///
/// Unreadable directories are skipped. Directories whose names end in
/// `.log` are not returned.
pub fn discover(root: &Path) -> Result<Vec<PathBuf>, FeedError> {
    let escaped = Pattern::escape(&root.to_string_lossy());
    let pattern = Path::new(&escaped).join(LOG_PATTERN);
    let pattern = pattern.to_string_lossy();

    let entries = glob(&pattern).map_err(|source| FeedError::Pattern {
        pattern: pattern.to_string(),
        source,
    })?;

    let mut files: Vec<PathBuf> = entries
        .filter_map(|entry| match entry {
            Ok(path) => Some(path),
            Err(err) => {
                debug!(error = %err, "glob iteration error");
                None
            }
        })
        .filter(|path| path.is_file())
        .collect();

    files.sort();
    Ok(files)
}

/// Strip the line terminator and decode, dropping invalid UTF-8 sequences.
fn decode_line(raw: &[u8]) -> String {
    let raw = raw.strip_suffix(b"\n").unwrap_or(raw);
    let raw = raw.strip_suffix(b"\r").unwrap_or(raw);

    let mut line = String::with_capacity(raw.len());
    for chunk in raw.utf8_chunks() {
        line.push_str(chunk.valid());
    }
    line
}
