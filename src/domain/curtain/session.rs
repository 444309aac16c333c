// SPDX-License-Identifier: MPL-2.0
//! Drag session tracking.
//!
//! A session lives for exactly one gesture. It remembers the grid's scroll
//! offset at the moment the gesture began so that transient states can hold
//! the grid at that value instead of whatever it drifts to mid-gesture.

/// State of one active drag gesture.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragSession {
    /// Scroll offset captured when the gesture began (or re-captured when
    /// the curtain starts closing).
    anchor_scroll_offset: f32,

    /// Latest pointer position reported for this gesture.
    current_pointer_y: Option<f32>,
}

impl DragSession {
    /// Starts a session anchored at the given scroll offset.
    #[must_use]
    pub fn begin(anchor_scroll_offset: f32) -> Self {
        Self {
            anchor_scroll_offset: finite_or_zero(anchor_scroll_offset),
            current_pointer_y: None,
        }
    }

    #[must_use]
    pub fn anchor(&self) -> f32 {
        self.anchor_scroll_offset
    }

    /// Replaces the anchor for the rest of the gesture.
    pub fn reanchor(&mut self, anchor: f32) {
        self.anchor_scroll_offset = finite_or_zero(anchor);
    }

    /// Records the latest pointer sample.
    pub fn record_pointer(&mut self, pointer_y: f32) {
        self.current_pointer_y = Some(pointer_y);
    }

    /// Returns the latest pointer sample, if any arrived yet.
    #[must_use]
    pub fn pointer_y(&self) -> Option<f32> {
        self.current_pointer_y
    }
}

fn finite_or_zero(value: f32) -> f32 {
    if value.is_finite() {
        value
    } else {
        0.0
    }
}
