// SPDX-License-Identifier: MPL-2.0
//! Pan state management
//!
//! Handles grab-and-drag interaction state for scrolling the thumbnail grid
//! vertically.

use iced::Point;

/// Manages grab-and-drag state of the grid.
#[derive(Debug, Clone, Default)]
pub struct PanState {
    /// Whether a drag operation is currently active
    pub is_dragging: bool,

    /// Position where the drag started (or was last rebased)
    pub start_position: Option<Point>,

    /// Grid scroll offset when the drag started
    pub start_offset: Option<f32>,

    /// Largest distance the pointer travelled from the press position
    travelled: f32,
    press_position: Option<Point>,
}

impl PanState {
    /// Starts a drag operation
    pub fn start(&mut self, position: Point, offset_y: f32) {
        self.is_dragging = true;
        self.start_position = Some(position);
        self.start_offset = Some(offset_y);
        self.press_position = Some(position);
        self.travelled = 0.0;
    }

    /// Restarts the delta computation from `position` without forgetting how
    /// far the pointer already travelled.
    pub fn rebase(&mut self, position: Point, offset_y: f32) {
        if self.is_dragging {
            self.start_position = Some(position);
            self.start_offset = Some(offset_y);
        }
    }

    /// Stops the drag operation. The travelled distance is kept until the
    /// next press.
    pub fn stop(&mut self) {
        self.is_dragging = false;
        self.start_position = None;
        self.start_offset = None;
        self.press_position = None;
    }

    /// Marks the current press as one that can never count as a click.
    pub fn forfeit_click(&mut self) {
        if !self.is_dragging {
            self.travelled = f32::INFINITY;
        }
    }

    /// Records pointer travel, used to tell a click from a drag.
    pub fn record(&mut self, position: Point) {
        if let Some(press) = self.press_position {
            self.travelled = self.travelled.max(press.distance(position));
        }
    }

    /// Returns whether the pointer moved further than `slop` since the press.
    #[must_use]
    pub fn exceeded(&self, slop: f32) -> bool {
        self.travelled > slop
    }

    /// Offset the grid would scroll to for the cursor at `current_position`.
    ///
    /// The value is not clamped: dragging down past the top of the grid
    /// yields a negative offset.
    #[must_use]
    pub fn proposed_offset(&self, current_position: Point) -> Option<f32> {
        if !self.is_dragging {
            return None;
        }

        let start_pos = self.start_position?;
        let start_offset = self.start_offset?;

        // Moving the cursor up scrolls content down
        Some(start_offset - (current_position.y - start_pos.y))
    }
}

/// Scroll limits of the grid's scrollable, as last reported by the widget.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct GridViewport {
    pub offset_y: f32,
    pub viewport_height: f32,
    pub content_height: f32,
}

impl GridViewport {
    /// Largest valid scroll offset.
    #[must_use]
    pub fn max_offset(&self) -> f32 {
        (self.content_height - self.viewport_height).max(0.0)
    }

    #[must_use]
    pub fn clamp(&self, offset_y: f32) -> f32 {
        offset_y.clamp(0.0, self.max_offset())
    }

    /// Relative position of `offset_y`, as expected by scroll operations.
    #[must_use]
    pub fn relative(&self, offset_y: f32) -> f32 {
        let max = self.max_offset();
        if max > 0.0 {
            self.clamp(offset_y) / max
        } else {
            0.0
        }
    }
}
