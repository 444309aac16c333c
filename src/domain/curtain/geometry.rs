// SPDX-License-Identifier: MPL-2.0
//! Panel extents derived from the current layout.
//!
//! Three inputs describe the curtain: the inset that stays visible once the
//! panel is fully opened, the panel's height while closed, and the y of its
//! top edge in host coordinates. Everything the state machine needs is
//! derived from them once per layout pass.

use std::fmt;

/// Geometry inputs that cannot describe a usable curtain.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GeometryError {
    /// One of the inputs is NaN or infinite.
    NonFinite,
    /// The top inset is negative.
    NegativeInset { top_inset: f32 },
    /// The panel is not taller than the inset it leaves visible, so it has
    /// no room to travel and the opened state cannot be reached.
    PanelNotTallerThanInset { panel_height: f32, top_inset: f32 },
}

impl GeometryError {
    /// Returns the i18n message key used to flag this configuration error.
    #[must_use]
    pub fn i18n_key(&self) -> &'static str {
        match self {
            GeometryError::NonFinite => "notification-geometry-non-finite",
            GeometryError::NegativeInset { .. } => "notification-geometry-negative-inset",
            GeometryError::PanelNotTallerThanInset { .. } => "notification-geometry-panel-too-short",
        }
    }
}

impl fmt::Display for GeometryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GeometryError::NonFinite => write!(f, "curtain geometry has a non-finite input"),
            GeometryError::NegativeInset { top_inset } => {
                write!(f, "top inset must not be negative (got {top_inset})")
            }
            GeometryError::PanelNotTallerThanInset {
                panel_height,
                top_inset,
            } => write!(
                f,
                "panel height {panel_height} must exceed top inset {top_inset}"
            ),
        }
    }
}

impl std::error::Error for GeometryError {}

/// Derived, read-only extents of the curtain for one layout pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Geometry {
    top_inset: f32,
    panel_height: f32,
    panel_origin_y: f32,
    closed_bottom: f32,
    opened_top_offset: f32,
}

impl Geometry {
    /// Builds the geometry, rejecting inputs where the opened state is unreachable.
    pub fn new(
        top_inset: f32,
        panel_height: f32,
        panel_origin_y: f32,
    ) -> Result<Self, GeometryError> {
        if !(top_inset.is_finite() && panel_height.is_finite() && panel_origin_y.is_finite()) {
            return Err(GeometryError::NonFinite);
        }
        if top_inset < 0.0 {
            return Err(GeometryError::NegativeInset { top_inset });
        }
        if panel_height <= top_inset {
            return Err(GeometryError::PanelNotTallerThanInset {
                panel_height,
                top_inset,
            });
        }
        Ok(Self::derive(top_inset, panel_height, panel_origin_y))
    }

    /// Builds the geometry without failing.
    ///
    /// Non-finite inputs become zero and the inset is clamped into
    /// `[0, panel_height]`, so the opened offset is never positive. A panel
    /// that is not taller than its inset ends up with zero travel.
    #[must_use]
    pub fn clamped(top_inset: f32, panel_height: f32, panel_origin_y: f32) -> Self {
        let finite = |value: f32| if value.is_finite() { value } else { 0.0 };
        let panel_height = finite(panel_height).max(0.0);
        let top_inset = finite(top_inset).clamp(0.0, panel_height);
        Self::derive(top_inset, panel_height, finite(panel_origin_y))
    }

    /// Returns usable geometry plus the configuration error, if any.
    ///
    /// Hosts use this on every layout pass: the curtain keeps working on the
    /// clamped extents while the error is reported to the user.
    #[must_use]
    pub fn resolve(
        top_inset: f32,
        panel_height: f32,
        panel_origin_y: f32,
    ) -> (Self, Option<GeometryError>) {
        match Self::new(top_inset, panel_height, panel_origin_y) {
            Ok(geometry) => (geometry, None),
            Err(err) => (
                Self::clamped(top_inset, panel_height, panel_origin_y),
                Some(err),
            ),
        }
    }

    fn derive(top_inset: f32, panel_height: f32, panel_origin_y: f32) -> Self {
        Self {
            top_inset,
            panel_height,
            panel_origin_y,
            closed_bottom: panel_height + panel_origin_y,
            opened_top_offset: top_inset - panel_height,
        }
    }

    #[must_use]
    pub fn top_inset(&self) -> f32 {
        self.top_inset
    }

    #[must_use]
    pub fn panel_height(&self) -> f32 {
        self.panel_height
    }

    #[must_use]
    pub fn panel_origin_y(&self) -> f32 {
        self.panel_origin_y
    }

    /// Y of the panel's bottom edge while closed; the pointer threshold
    /// between "inside the panel" and "inside the grid".
    #[must_use]
    pub fn closed_bottom(&self) -> f32 {
        self.closed_bottom
    }

    /// Offset of the panel's top edge when fully opened. Never positive.
    #[must_use]
    pub fn opened_top_offset(&self) -> f32 {
        self.opened_top_offset
    }

    /// Distance the panel travels between closed and opened.
    #[must_use]
    pub fn travel(&self) -> f32 {
        -self.opened_top_offset
    }

    /// Returns true when the panel has room to slide up at all.
    #[must_use]
    pub fn can_open(&self) -> bool {
        self.opened_top_offset < 0.0
    }

    /// Clamps a panel offset into `[opened_top_offset, 0]`.
    #[must_use]
    pub fn clamp_offset(&self, offset: f32) -> f32 {
        if offset.is_nan() {
            return 0.0;
        }
        offset.clamp(self.opened_top_offset, 0.0)
    }
}
