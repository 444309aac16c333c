// SPDX-License-Identifier: MPL-2.0
//! The curtain interaction state machine.
//!
//! The machine turns a stream of gesture samples (pointer y plus the grid's
//! scroll offset) into a [`CurtainOutput`] per sample. It never touches the
//! toolkit: hosts apply `panel_offset` through a presenter and
//! `scroll_override` through their scrollable.
//!
//! Lifecycle calls that arrive out of order are ignored. A sample without an
//! open session, or a release without a press, leaves the machine untouched.

use super::geometry::Geometry;
use super::session::DragSession;
use super::state::CurtainState;

/// Result of feeding one input to the machine.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurtainOutput {
    /// State after the input was processed.
    pub state: CurtainState,
    /// Offset of the panel's top edge relative to its closed position.
    /// Always inside `[opened_top_offset, 0]`.
    pub panel_offset: f32,
    /// Scroll offset the host must force onto the grid, if any.
    pub scroll_override: Option<f32>,
    /// Whether the curtain consumed this drag motion, meaning the grid must
    /// not scroll from it.
    pub consumes_scroll: bool,
}

impl CurtainOutput {
    /// Output of the closed rest state.
    #[must_use]
    pub fn closed() -> Self {
        Self {
            state: CurtainState::Closed,
            panel_offset: 0.0,
            scroll_override: None,
            consumes_scroll: false,
        }
    }
}

impl Default for CurtainOutput {
    fn default() -> Self {
        Self::closed()
    }
}

/// Owns the curtain state and the session of the gesture in progress.
#[derive(Debug, Clone)]
pub struct CurtainMachine {
    state: CurtainState,
    geometry: Geometry,
    session: Option<DragSession>,
    last_output: CurtainOutput,
}

impl CurtainMachine {
    /// Creates a machine in the closed state.
    #[must_use]
    pub fn new(geometry: Geometry) -> Self {
        Self {
            state: CurtainState::Closed,
            geometry,
            session: None,
            last_output: CurtainOutput::closed(),
        }
    }

    #[must_use]
    pub fn state(&self) -> CurtainState {
        self.state
    }

    #[must_use]
    pub fn geometry(&self) -> Geometry {
        self.geometry
    }

    /// Returns the output produced by the most recent input.
    #[must_use]
    pub fn last_output(&self) -> CurtainOutput {
        self.last_output
    }

    /// Returns true while a gesture is in progress.
    #[must_use]
    pub fn has_session(&self) -> bool {
        self.session.is_some()
    }

    /// Starts a drag session anchored at the grid's current scroll offset.
    ///
    /// Must only be called when a pointer button or touch contact goes down.
    /// A second call while a session is open re-anchors it.
    pub fn on_gesture_begin(&mut self, scroll_offset_y: f32) {
        match self.session.as_mut() {
            Some(session) => session.reanchor(scroll_offset_y),
            None => self.session = Some(DragSession::begin(scroll_offset_y)),
        }
    }

    /// Feeds one pointer movement sample.
    ///
    /// Without an open session, or with a non-finite pointer, this returns
    /// the previous output unchanged.
    pub fn on_sample(&mut self, pointer_y: f32, scroll_offset_y: f32) -> CurtainOutput {
        if !pointer_y.is_finite() {
            return self.last_output;
        }
        let Some(session) = self.session.as_mut() else {
            return self.last_output;
        };
        session.record_pointer(pointer_y);

        let geometry = self.geometry;
        let closed_bottom = geometry.closed_bottom();

        let next = match self.state {
            CurtainState::Closed if pointer_y < closed_bottom && geometry.can_open() => {
                CurtainState::Opening
            }
            CurtainState::Closed => CurtainState::Closed,
            CurtainState::Opening if pointer_y > closed_bottom => CurtainState::Closed,
            CurtainState::Opening => CurtainState::Opening,
            CurtainState::Opened if scroll_offset_y <= 0.0 => {
                // Continue from the opened offset instead of jumping.
                session.reanchor(pointer_y - (closed_bottom + geometry.opened_top_offset()));
                CurtainState::Closing
            }
            CurtainState::Opened => CurtainState::Opened,
            CurtainState::Closing => CurtainState::Closing,
        };

        let output = output_for(next, &geometry, pointer_y, session.anchor());
        self.state = next;
        self.last_output = output;
        output
    }

    /// Completes the gesture, settling any transient state.
    ///
    /// Opening always completes to Opened and Closing to Closed, however far
    /// the pointer travelled. Returns `None` when no gesture was open.
    pub fn on_gesture_end(&mut self) -> Option<CurtainOutput> {
        self.session.take()?;
        self.state = self.state.settled();
        self.last_output = rest_output(self.state, &self.geometry);
        Some(self.last_output)
    }

    /// Handles a gesture the host lost track of. Behaves like a release.
    pub fn on_gesture_cancel(&mut self) -> Option<CurtainOutput> {
        self.on_gesture_end()
    }

    /// Replaces the geometry after a layout change and re-derives the
    /// current output from it.
    ///
    /// Geometry without travel cannot hold the panel open, so the curtain
    /// drops back to Closed. A gesture in progress keeps its session.
    pub fn relayout(&mut self, geometry: Geometry) -> CurtainOutput {
        self.geometry = geometry;
        if !geometry.can_open() {
            self.state = CurtainState::Closed;
            self.last_output = CurtainOutput::closed();
            return self.last_output;
        }
        let pointer_and_anchor = self
            .session
            .as_ref()
            .and_then(|session| session.pointer_y().map(|y| (y, session.anchor())));

        self.last_output = match (self.state.is_transient(), pointer_and_anchor) {
            (true, Some((pointer_y, anchor))) => {
                output_for(self.state, &geometry, pointer_y, anchor)
            }
            (true, None) => CurtainOutput {
                panel_offset: geometry.clamp_offset(self.last_output.panel_offset),
                ..self.last_output
            },
            (false, _) => rest_output(self.state, &geometry),
        };
        self.last_output
    }
}

fn rest_output(state: CurtainState, geometry: &Geometry) -> CurtainOutput {
    let panel_offset = match state {
        CurtainState::Opened | CurtainState::Closing => geometry.opened_top_offset(),
        CurtainState::Closed | CurtainState::Opening => 0.0,
    };
    CurtainOutput {
        state,
        panel_offset,
        scroll_override: None,
        consumes_scroll: false,
    }
}

fn output_for(state: CurtainState, geometry: &Geometry, pointer_y: f32, anchor: f32) -> CurtainOutput {
    let closed_bottom = geometry.closed_bottom();
    match state {
        CurtainState::Closed | CurtainState::Opened => rest_output(state, geometry),
        CurtainState::Opening => CurtainOutput {
            state,
            panel_offset: geometry.clamp_offset(-(closed_bottom - pointer_y)),
            scroll_override: Some(anchor),
            consumes_scroll: true,
        },
        CurtainState::Closing => CurtainOutput {
            state,
            panel_offset: geometry.clamp_offset(-(closed_bottom - pointer_y + anchor)),
            scroll_override: Some(0.0),
            consumes_scroll: true,
        },
    }
}
