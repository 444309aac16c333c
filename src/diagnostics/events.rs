// SPDX-License-Identifier: MPL-2.0
//! Diagnostic event types.
//!
//! Events capture what the picker did during a session: gestures, curtain
//! transitions, library scans and user-facing warnings.

use std::time::Instant;

use serde::Serialize;

use crate::domain::curtain::CurtainState;

/// A timestamped diagnostic event.
#[derive(Debug, Clone)]
pub struct DiagnosticEvent {
    /// When the event occurred (monotonic clock for duration calculations)
    pub timestamp: Instant,
    pub kind: DiagnosticEventKind,
}

impl DiagnosticEvent {
    /// Creates a new diagnostic event with the current timestamp.
    #[must_use]
    pub fn new(kind: DiagnosticEventKind) -> Self {
        Self::with_timestamp(kind, Instant::now())
    }

    #[must_use]
    pub fn with_timestamp(kind: DiagnosticEventKind, timestamp: Instant) -> Self {
        Self { timestamp, kind }
    }
}

/// The type and associated data for a diagnostic event.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DiagnosticEventKind {
    /// A press or touch started a drag session.
    GestureBegan {
        /// Grid scroll offset captured as the session anchor.
        scroll_offset: f32,
    },

    /// The curtain moved to a different state.
    StateChanged {
        from: &'static str,
        to: &'static str,
    },

    /// The drag session was released or cancelled.
    GestureEnded {
        /// State the curtain settled into.
        settled: &'static str,
        cancelled: bool,
    },

    /// The asset library finished scanning.
    LibraryScanned { count: usize },

    /// A warning was shown to the user.
    Warning {
        /// i18n key of the warning.
        key: String,
    },
}

impl DiagnosticEventKind {
    /// Builds a transition event from two curtain states.
    #[must_use]
    pub fn state_changed(from: CurtainState, to: CurtainState) -> Self {
        Self::StateChanged {
            from: from.name(),
            to: to.name(),
        }
    }

    /// Stable snake_case name of the variant, used for summary counts.
    #[must_use]
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::GestureBegan { .. } => "gesture_began",
            Self::StateChanged { .. } => "state_changed",
            Self::GestureEnded { .. } => "gesture_ended",
            Self::LibraryScanned { .. } => "library_scanned",
            Self::Warning { .. } => "warning",
        }
    }
}
