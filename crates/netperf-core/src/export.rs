//! Export layer — writes [`EventRecord`] sequences as CSV or JSON lines.
//!
//! Both formats keep the fixed column order of [`COLUMNS`](crate::types::COLUMNS).
//! CSV writes absent fields as empty cells; JSONL writes them as `null`.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use thiserror::Error;

use crate::types::{EventRecord, ExportFormat};

/// Errors raised while writing an export.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("failed to create {path}: {source}")]
    Create { path: String, source: io::Error },
    #[error("csv export failed: {0}")]
    Csv(#[from] csv::Error),
    #[error("jsonl export failed: {0}")]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Io(#[from] io::Error),
}

/// Write `records` to `sink` in the given format. Returns the record count.
pub fn write_records<W: Write>(
    sink: W,
    records: &[EventRecord],
    format: ExportFormat,
) -> Result<usize, ExportError> {
    match format {
        ExportFormat::Csv => write_csv(sink, records),
        ExportFormat::Jsonl => write_jsonl(sink, records),
    }
}

/// CSV with a header row, even when `records` is empty.
pub fn write_csv<W: Write>(sink: W, records: &[EventRecord]) -> Result<usize, ExportError> {
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(sink);

    // Written by hand so an empty export still carries the header.
    wtr.write_record(crate::types::COLUMNS)?;
    for record in records {
        wtr.serialize(record)?;
    }
    wtr.flush()?;
    Ok(records.len())
}

/// One JSON object per line.
pub fn write_jsonl<W: Write>(sink: W, records: &[EventRecord]) -> Result<usize, ExportError> {
    let mut out = BufWriter::new(sink);
    for record in records {
        serde_json::to_writer(&mut out, record)?;
        out.write_all(b"\n")?;
    }
    out.flush()?;
    Ok(records.len())
}

/// Write `records` to the file at `path`, creating parent directories.
pub fn export_to_path(
    path: &Path,
    records: &[EventRecord],
    format: ExportFormat,
) -> Result<usize, ExportError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|source| ExportError::Create {
            path: parent.display().to_string(),
            source,
        })?;
    }

    let file = File::create(path).map_err(|source| ExportError::Create {
        path: path.display().to_string(),
        source,
    })?;

    let written = write_records(file, records, format)?;
    tracing::info!(path = %path.display(), %format, records = written, "export written");
    Ok(written)
}
