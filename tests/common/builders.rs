//! Test builders — ergonomic constructors for expected `EventRecord` values.
//!
//! These builders are designed for readability in test assertions, not for
//! production use.

#![allow(dead_code)]

use netperf_core::EventRecord;

/// Fluent builder for [`EventRecord`] expectations.
///
/// # Example
///
/// ```rust
/// let expected = EventRecordBuilder::new("Bottleneck: Network: 87%")
///     .event_time("2024-01-15 10:00:00")
///     .bottleneck(87)
///     .build();
/// ```
pub struct EventRecordBuilder {
    record: EventRecord,
}

impl EventRecordBuilder {
    pub fn new(message: impl Into<String>) -> Self {
        let message: String = message.into();
        Self {
            record: EventRecord::new(None, &message),
        }
    }

    pub fn event_time(mut self, ts: impl Into<String>) -> Self {
        self.record.event_time = Some(ts.into());
        self
    }

    pub fn bytes_sent(mut self, bytes: u64) -> Self {
        self.record.bytes_sent = Some(bytes);
        self
    }

    pub fn duration_s(mut self, secs: u64) -> Self {
        self.record.duration_s = Some(secs);
        self
    }

    pub fn bottleneck(mut self, pct: u16) -> Self {
        self.record.network_bottleneck_pct = Some(pct);
        self
    }

    pub fn wan_cache_hit(mut self, pct: u16) -> Self {
        self.record.wan_cache_hit_pct = Some(pct);
        self
    }

    pub fn retries(mut self, n: u64) -> Self {
        self.record.retries = Some(n);
        self
    }

    pub fn build(self) -> EventRecord {
        self.record
    }
}

/// Build `n` records cycling through the measurement groups.
pub fn build_records(n: usize) -> Vec<EventRecord> {
    (0..n)
        .map(|i| {
            let builder = EventRecordBuilder::new(format!("event {i}"));
            let builder = match i % 4 {
                0 => builder.bottleneck((i % 101) as u16),
                1 => builder.bytes_sent(i as u64 * 1024).duration_s(i as u64),
                2 => builder.wan_cache_hit((i % 101) as u16),
                _ => builder.retries(i as u64),
            };
            if i % 2 == 0 {
                builder.event_time(format!("2024-01-15 10:{:02}:{:02}", i / 60 % 60, i % 60))
                    .build()
            } else {
                builder.build()
            }
        })
        .collect()
}
