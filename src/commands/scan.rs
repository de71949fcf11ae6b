use std::path::{Path, PathBuf};

use anyhow::Context;
use netperf_core::{config::OutputLocation, export, normalizer, ExportFormat};
use netperf_feeds::LineSource;

/// Fallback file stem when the input path has no usable name (e.g. `/`).
const FALLBACK_STEM: &str = "events";

/// Inputs to a scan pass, after CLI flags and config are merged.
#[derive(Debug, Clone)]
pub struct ScanOptions {
    pub input: PathBuf,
    /// Explicit output path, used verbatim.
    pub out: Option<PathBuf>,
    pub format: ExportFormat,
    /// Where to place the export when `out` is `None`.
    pub output_location: OutputLocation,
}

/// Result of a completed scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanSummary {
    pub records: usize,
    pub path: PathBuf,
}

impl std::fmt::Display for ScanSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Done. {} events written to {}",
            self.records,
            self.path.display()
        )
    }
}

/// Read every line of the input, extract records and write the export.
pub fn run_scan(opts: &ScanOptions) -> anyhow::Result<ScanSummary> {
    let path = match &opts.out {
        Some(out) => out.clone(),
        None => default_output_path(&opts.input, opts.format, opts.output_location)?,
    };

    let source = LineSource::open(&opts.input)
        .with_context(|| format!("cannot read input {}", opts.input.display()))?;
    let records = normalizer::extract_all(source);
    tracing::debug!(records = records.len(), "extraction finished");

    let written = export::export_to_path(&path, &records, opts.format)
        .with_context(|| format!("cannot write {}", path.display()))?;

    Ok(ScanSummary {
        records: written,
        path,
    })
}

/// `<input-name>.<ext>` inside the directory chosen by `location`.
///
/// The name is the file stem for a file input and the directory's own name
/// for a directory input.
pub fn default_output_path(
    input: &Path,
    format: ExportFormat,
    location: OutputLocation,
) -> anyhow::Result<PathBuf> {
    let dir = location
        .resolve(input)
        .context("cannot resolve default output directory")?;
    Ok(dir.join(format!("{}.{}", input_stem(input), format.extension())))
}

fn input_stem(input: &Path) -> String {
    let name = if input.is_file() {
        input.file_stem()
    } else {
        input.file_name()
    };

    name.map(|n| n.to_string_lossy().into_owned())
        .or_else(|| {
            input
                .canonicalize()
                .ok()
                .and_then(|p| p.file_name().map(|n| n.to_string_lossy().into_owned()))
        })
        .filter(|n| !n.is_empty())
        .unwrap_or_else(|| FALLBACK_STEM.to_string())
}
