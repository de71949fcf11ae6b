//! Normalizer — turns raw backup-job log lines into [`EventRecord`] values.
//!
//! A line is first split into an optional timestamp prefix and the message.
//! The message is then searched by four independent extractors (bottleneck,
//! transfer, WAN cache hit, retries). Every extractor that matches contributes
//! its fields to the same record; a line no extractor matches yields nothing.

use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

use crate::types::EventRecord;

// ---------------------------------------------------------------------------
// Patterns
// ---------------------------------------------------------------------------

static TIMESTAMP: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?P<ts>[0-9:.\-\s]{19,26})\s+").expect("timestamp pattern must compile")
});

static BOTTLENECK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)Bottleneck:\s*Network:\s*(?P<pct>[0-9]{1,3})%")
        .expect("bottleneck pattern must compile")
});

static TRANSFER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"(?i)Transfer(?:red)?:\s*(?P<bytes>[0-9.]+\s*(?:KB|MB|GB|TB))",
        r".*?Duration:\s*(?P<dur>[0-9]{2}:[0-9]{2}:[0-9]{2})",
        r".*?Avg speed:\s*(?P<spd>[0-9.]+\s*(?:KB|MB|GB)/s)",
    ))
    .expect("transfer pattern must compile")
});

static WAN_CACHE_HIT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)WAN Accelerator.*?(?:hit|cache hit)[:=]?\s*(?P<hit>[0-9]{1,3})%")
        .expect("wan cache hit pattern must compile")
});

static RETRIES: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(?:retry|retries)\s*[:=]?\s*(?P<retries>[0-9]+)\b")
        .expect("retry pattern must compile")
});

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Failure to decode an `HH:MM:SS` token.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DurationError {
    #[error("expected HH:MM:SS, got {0:?}")]
    Shape(String),
    #[error("invalid duration component {component:?} in {input:?}")]
    Component { input: String, component: String },
    #[error("duration {0:?} does not fit in u64 seconds")]
    Overflow(String),
}

// ---------------------------------------------------------------------------
// Primitive parsers
// ---------------------------------------------------------------------------

/// Split a leading timestamp off `line`.
///
/// The timestamp is any run of 19–26 characters drawn from digits, `:`, `.`,
/// `-` and whitespace, followed by whitespace. Nothing checks that the run is
/// a real date. Returns `(None, line)` when there is no such prefix.
pub fn split_timestamp(line: &str) -> (Option<&str>, &str) {
    match TIMESTAMP.captures(line) {
        Some(caps) => {
            let whole = caps.get(0).map_or(0, |m| m.end());
            (caps.name("ts").map(|m| m.as_str()), &line[whole..])
        }
        None => (None, line),
    }
}

/// Parse `<number> <unit>` into bytes using binary multiples.
///
/// Units are KB, MB, GB and TB in any case. The number may be fractional; the
/// product is truncated. Anything else, including a number glued to its unit
/// (`1.5GB`) or a product too large for `u64`, returns `None`.
pub fn parse_size(text: &str) -> Option<u64> {
    let mut tokens = text.split_whitespace();
    let (number, unit) = (tokens.next()?, tokens.next()?);
    if tokens.next().is_some() {
        return None;
    }

    let multiplier: u64 = match unit.to_ascii_uppercase().as_str() {
        "KB" => 1 << 10,
        "MB" => 1 << 20,
        "GB" => 1 << 30,
        "TB" => 1 << 40,
        _ => return None,
    };

    let value: f64 = number.parse().ok()?;
    if !value.is_finite() || value < 0.0 {
        return None;
    }
    let bytes = value * multiplier as f64;
    if bytes >= u64::MAX as f64 {
        return None;
    }
    Some(bytes as u64)
}

/// Convert `HH:MM:SS` into seconds. Components are not range checked, so
/// `00:90:00` is 5400.
pub fn parse_duration(hms: &str) -> Result<u64, DurationError> {
    let parts: Vec<&str> = hms.split(':').collect();
    let [h, m, s] = parts.as_slice() else {
        return Err(DurationError::Shape(hms.to_string()));
    };

    let component = |c: &str| {
        c.trim().parse::<u64>().map_err(|_| DurationError::Component {
            input: hms.to_string(),
            component: c.to_string(),
        })
    };

    let (h, m, s) = (component(*h)?, component(*m)?, component(*s)?);
    h.checked_mul(3600)
        .and_then(|total| total.checked_add(m.checked_mul(60)?))
        .and_then(|total| total.checked_add(s))
        .ok_or_else(|| DurationError::Overflow(hms.to_string()))
}

// ---------------------------------------------------------------------------
// Field extractors
// ---------------------------------------------------------------------------

/// Fields contributed by a transfer summary line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transfer {
    /// `None` when the size token matched the pattern but not [`parse_size`].
    pub bytes_sent: Option<u64>,
    pub duration_s: u64,
}

/// `Bottleneck: Network: 87%` → `Some(87)`.
pub fn extract_bottleneck(message: &str) -> Option<u16> {
    BOTTLENECK
        .captures(message)
        .and_then(|caps| caps["pct"].parse().ok())
}

/// `Transferred: 1.5 GB ... Duration: 00:10:00 ... Avg speed: 2.5 MB/s`.
///
/// All three parts must be present, in that order. The speed is required for
/// a match but is not returned.
pub fn extract_transfer(message: &str) -> Option<Transfer> {
    let caps = TRANSFER.captures(message)?;
    // The pattern pins the token to three two-digit groups.
    let duration_s = parse_duration(&caps["dur"]).ok()?;
    Some(Transfer {
        bytes_sent: parse_size(&caps["bytes"]),
        duration_s,
    })
}

/// `WAN Accelerator ... cache hit: 42%` → `Some(42)`.
pub fn extract_wan_cache_hit(message: &str) -> Option<u16> {
    WAN_CACHE_HIT
        .captures(message)
        .and_then(|caps| caps["hit"].parse().ok())
}

/// `retries: 3`, `retry=3`, `Retry 3` → `Some(3)`.
pub fn extract_retries(message: &str) -> Option<u64> {
    RETRIES
        .captures(message)
        .and_then(|caps| caps["retries"].parse().ok())
}

// ---------------------------------------------------------------------------
// Line-level entry points
// ---------------------------------------------------------------------------

/// Extract an [`EventRecord`] from one raw line.
///
/// Returns `None` when none of the four extractors produced a value.
pub fn extract(line: &str) -> Option<EventRecord> {
    let (event_time, message) = split_timestamp(line);
    let mut record = EventRecord::new(event_time, message);

    record.network_bottleneck_pct = extract_bottleneck(message);
    if let Some(transfer) = extract_transfer(message) {
        record.bytes_sent = transfer.bytes_sent;
        record.duration_s = Some(transfer.duration_s);
    }
    record.wan_cache_hit_pct = extract_wan_cache_hit(message);
    record.retries = extract_retries(message);

    record.has_measurement().then_some(record)
}

/// True if any extractor pattern occurs in the line's message.
///
/// This is a pattern test only; no fields are decoded.
pub fn matches(line: &str) -> bool {
    let (_, message) = split_timestamp(line);
    BOTTLENECK.is_match(message)
        || TRANSFER.is_match(message)
        || WAN_CACHE_HIT.is_match(message)
        || RETRIES.is_match(message)
}

/// Extract records from a sequence of lines, preserving input order.
pub fn extract_all<I, S>(lines: I) -> Vec<EventRecord>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    lines
        .into_iter()
        .filter_map(|line| extract(line.as_ref()))
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
