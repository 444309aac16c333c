// SPDX-License-Identifier: MPL-2.0
//! Diagnostic report generation and TOML export.

use std::collections::BTreeMap;
use std::time::Instant;

use chrono::Utc;
use serde::Serialize;

use super::DiagnosticEventKind;
use crate::error::Result;

/// Metadata about a diagnostic report.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ReportMetadata {
    /// When the report was generated (RFC 3339)
    pub generated_at: String,
    /// Version of the picker that generated the report
    pub version: String,
    /// Duration of collection in milliseconds
    pub collection_duration_ms: u64,
    pub event_count: usize,
}

impl ReportMetadata {
    #[must_use]
    pub fn new(collection_duration_ms: u64, event_count: usize) -> Self {
        Self {
            generated_at: Utc::now().to_rfc3339(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            collection_duration_ms,
            event_count,
        }
    }
}

/// A diagnostic event with its time relative to the start of collection.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SerializableEvent {
    /// Milliseconds since collection started
    pub timestamp_ms: u64,
    #[serde(flatten)]
    pub kind: DiagnosticEventKind,
}

impl SerializableEvent {
    #[must_use]
    #[allow(clippy::cast_possible_truncation)] // Session length in ms fits in u64
    pub fn new(
        event_timestamp: Instant,
        collection_start: Instant,
        kind: DiagnosticEventKind,
    ) -> Self {
        let timestamp_ms = event_timestamp
            .saturating_duration_since(collection_start)
            .as_millis() as u64;
        Self { timestamp_ms, kind }
    }
}

/// Per-type counts computed from the events.
#[derive(Debug, Clone, Serialize, PartialEq, Default)]
pub struct ReportSummary {
    pub event_counts: BTreeMap<String, usize>,
    /// Number of gestures that ended with the curtain opened.
    pub opens: usize,
    /// Number of gestures that ended with the curtain closed after closing.
    pub closes: usize,
}

impl ReportSummary {
    #[must_use]
    pub fn from_events(events: &[SerializableEvent]) -> Self {
        let mut summary = Self::default();
        for event in events {
            *summary
                .event_counts
                .entry(event.kind.type_name().to_string())
                .or_insert(0) += 1;
            if let DiagnosticEventKind::StateChanged { from, to } = event.kind {
                match (from, to) {
                    ("opening", "opened") => summary.opens += 1,
                    ("closing", "closed") => summary.closes += 1,
                    _ => {}
                }
            }
        }
        summary
    }
}

/// Complete diagnostic report.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct DiagnosticReport {
    pub metadata: ReportMetadata,
    pub summary: ReportSummary,
    pub events: Vec<SerializableEvent>,
}

impl DiagnosticReport {
    /// Creates a new report with its summary computed from the events.
    #[must_use]
    pub fn new(metadata: ReportMetadata, events: Vec<SerializableEvent>) -> Self {
        let summary = ReportSummary::from_events(&events);
        Self {
            metadata,
            summary,
            events,
        }
    }

    /// Serializes the report as pretty TOML.
    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn event(ms: u64, kind: DiagnosticEventKind) -> SerializableEvent {
        let start = Instant::now();
        SerializableEvent::new(start + Duration::from_millis(ms), start, kind)
    }

    #[test]
    fn serializable_event_is_relative_to_start() {
        let start = Instant::now();
        let later = start + Duration::from_millis(1500);
        let event = SerializableEvent::new(later, start, DiagnosticEventKind::LibraryScanned { count: 2 });
        assert_eq!(event.timestamp_ms, 1500);
    }

    #[test]
    fn event_before_start_saturates_to_zero() {
        let start = Instant::now() + Duration::from_secs(1);
        let event = SerializableEvent::new(Instant::now(), start, DiagnosticEventKind::LibraryScanned { count: 0 });
        assert_eq!(event.timestamp_ms, 0);
    }

    #[test]
    fn summary_counts_types_and_completed_transitions() {
        let events = vec![
            event(0, DiagnosticEventKind::GestureBegan { scroll_offset: 0.0 }),
            event(5, DiagnosticEventKind::StateChanged { from: "closed", to: "opening" }),
            event(9, DiagnosticEventKind::StateChanged { from: "opening", to: "opened" }),
            event(20, DiagnosticEventKind::StateChanged { from: "opened", to: "closing" }),
            event(25, DiagnosticEventKind::StateChanged { from: "closing", to: "closed" }),
        ];
        let summary = ReportSummary::from_events(&events);
        assert_eq!(summary.event_counts.get("state_changed"), Some(&4));
        assert_eq!(summary.event_counts.get("gesture_began"), Some(&1));
        assert_eq!(summary.opens, 1);
        assert_eq!(summary.closes, 1);
    }

    #[test]
    fn report_serializes_to_toml() {
        let events = vec![
            event(3, DiagnosticEventKind::LibraryScanned { count: 12 }),
            event(7, DiagnosticEventKind::Warning { key: "notification-config-load-error".into() }),
        ];
        let report = DiagnosticReport::new(ReportMetadata::new(10, events.len()), events);
        let text = report.to_toml().expect("report serializes");
        assert!(text.contains("[metadata]"));
        assert!(text.contains("event_count = 2"));
        assert!(text.contains("library_scanned"));
        assert!(text.contains("notification-config-load-error"));
    }
}
