// SPDX-License-Identifier: MPL-2.0
//! Diagnostics collector.
//!
//! Records timestamped events in a bounded buffer and turns them into a
//! [`DiagnosticReport`] on demand.

use std::time::Instant;

use super::{
    BufferCapacity, CircularBuffer, DiagnosticEvent, DiagnosticEventKind, DiagnosticReport,
    ReportMetadata, SerializableEvent,
};
use crate::domain::curtain::CurtainState;
use crate::error::Result;

/// Collects diagnostic events during a session.
#[derive(Debug, Clone)]
pub struct DiagnosticsCollector {
    buffer: CircularBuffer<DiagnosticEvent>,
    collection_started_at: Instant,
}

impl DiagnosticsCollector {
    #[must_use]
    pub fn new(capacity: BufferCapacity) -> Self {
        Self {
            buffer: CircularBuffer::new(capacity),
            collection_started_at: Instant::now(),
        }
    }

    /// Records an event stamped with the current time.
    pub fn log(&mut self, kind: DiagnosticEventKind) {
        self.buffer.push(DiagnosticEvent::new(kind));
    }

    pub fn log_gesture_began(&mut self, scroll_offset: f32) {
        self.log(DiagnosticEventKind::GestureBegan { scroll_offset });
    }

    pub fn log_state_change(&mut self, from: CurtainState, to: CurtainState) {
        self.log(DiagnosticEventKind::state_changed(from, to));
    }

    pub fn log_gesture_ended(&mut self, settled: CurtainState, cancelled: bool) {
        self.log(DiagnosticEventKind::GestureEnded {
            settled: settled.name(),
            cancelled,
        });
    }

    pub fn log_library_scanned(&mut self, count: usize) {
        self.log(DiagnosticEventKind::LibraryScanned { count });
    }

    pub fn log_warning(&mut self, key: impl Into<String>) {
        self.log(DiagnosticEventKind::Warning { key: key.into() });
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &DiagnosticEvent> {
        self.buffer.iter()
    }

    /// Builds a report from the events collected so far.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)] // Session length in ms fits in u64
    pub fn build_report(&self) -> DiagnosticReport {
        let started = self.collection_started_at;
        let events: Vec<SerializableEvent> = self
            .buffer
            .iter()
            .map(|event| SerializableEvent::new(event.timestamp, started, event.kind.clone()))
            .collect();
        let duration_ms = started.elapsed().as_millis() as u64;
        DiagnosticReport::new(ReportMetadata::new(duration_ms, events.len()), events)
    }

    /// Builds the report and serializes it as TOML.
    pub fn export_toml(&self) -> Result<String> {
        self.build_report().to_toml()
    }
}

impl Default for DiagnosticsCollector {
    fn default() -> Self {
        Self::new(BufferCapacity::default())
    }
}
