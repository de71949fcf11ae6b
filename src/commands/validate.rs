use std::io::{self, Write};

use netperf_core::normalizer;

/// Printed when a validate pass finds nothing.
pub const NO_MATCHES_NOTICE: &str =
    "No recognizable lines found. Share a few sample lines to tune the patterns.";

/// Print up to `limit` raw lines that any extractor recognises.
///
/// Lines are written unmodified, timestamp included. Iteration stops as soon
/// as the limit is reached, so the rest of the input is never read. Returns
/// the number of lines shown.
pub fn run_validate<I, W>(lines: I, limit: usize, out: &mut W) -> io::Result<usize>
where
    I: IntoIterator<Item = String>,
    W: Write,
{
    let mut shown = 0;
    for line in lines {
        if !normalizer::matches(&line) {
            continue;
        }
        writeln!(out, "{line}")?;
        shown += 1;
        if shown >= limit {
            break;
        }
    }

    if shown == 0 {
        writeln!(out, "{NO_MATCHES_NOTICE}")?;
    }
    tracing::debug!(shown, limit, "validate finished");
    Ok(shown)
}
