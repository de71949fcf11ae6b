//! Domain-specific assertion helpers for netperf harnesses.
//!
//! These add context to failures so it is clear which line produced an
//! unexpected record.

#![allow(dead_code)]

use netperf_core::{normalizer, EventRecord};

/// Assert that `line` extracts to exactly `expected`.
pub fn assert_extracts(line: &str, expected: EventRecord) {
    match normalizer::extract(line) {
        Some(actual) => pretty_assertions::assert_eq!(actual, expected, "line: {line:?}"),
        None => panic!("assert_extracts failed: no record for line {line:?}"),
    }
}

/// Assert that `line` produces no record and is not shown by validate.
pub fn assert_ignored(line: &str) {
    if let Some(record) = normalizer::extract(line) {
        panic!("assert_ignored failed: line {line:?} produced {record:?}");
    }
    assert!(
        !normalizer::matches(line),
        "assert_ignored failed: line {line:?} matched a pattern"
    );
}

/// Assert that every record carries at least one measurement.
pub fn assert_all_measured(records: &[EventRecord]) {
    let failing: Vec<_> = records.iter().filter(|r| !r.has_measurement()).collect();
    assert!(
        failing.is_empty(),
        "{} of {} records have no measurement: {failing:?}",
        failing.len(),
        records.len()
    );
}
