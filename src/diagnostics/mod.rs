// SPDX-License-Identifier: MPL-2.0
//! Diagnostics module for collecting session activity reports.
//!
//! Events are captured during use, kept in a memory-bounded circular buffer
//! and exported as a TOML report (printed on exit with `--diagnostics`).
//! Only interaction metadata is recorded; file paths never enter a report.
//!
//! # Architecture
//!
//! - [`CircularBuffer`]: Generic ring buffer with configurable capacity
//! - [`DiagnosticEventKind`]: What happened (gesture, transition, scan, warning)
//! - [`DiagnosticsCollector`]: Timestamps events and builds reports
//! - [`DiagnosticReport`]: Serializable report with summary counts

mod buffer;
mod collector;
mod events;
mod report;

pub use buffer::{BufferCapacity, CircularBuffer};
pub use collector::DiagnosticsCollector;
pub use events::{DiagnosticEvent, DiagnosticEventKind};
pub use report::{DiagnosticReport, ReportMetadata, ReportSummary, SerializableEvent};
