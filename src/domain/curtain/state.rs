// SPDX-License-Identifier: MPL-2.0
//! Curtain state machine states.
//!
//! The curtain cycles Closed → Opening → Opened → Closing → Closed. The two
//! middle states of each half are transient: they only exist while a drag
//! gesture is in progress.

use std::fmt;

/// Represents where the preview curtain currently is in its travel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CurtainState {
    /// Panel rests at full height above the grid.
    #[default]
    Closed,
    /// Panel follows the pointer upward while the grid stays frozen.
    Opening,
    /// Panel rests slid up, leaving only the top inset visible.
    Opened,
    /// Panel follows the pointer back down while the grid is held at its top.
    Closing,
}

impl CurtainState {
    /// Returns true for the states that only exist during a drag.
    #[must_use]
    pub fn is_transient(self) -> bool {
        matches!(self, Self::Opening | Self::Closing)
    }

    /// Returns true for the rest states.
    #[must_use]
    pub fn is_settled(self) -> bool {
        !self.is_transient()
    }

    /// Returns the rest state a transient state completes to on release.
    #[must_use]
    pub fn settled(self) -> Self {
        match self {
            Self::Opening => Self::Opened,
            Self::Closing => Self::Closed,
            other => other,
        }
    }

    /// Stable lowercase name, used in diagnostics reports.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Closed => "closed",
            Self::Opening => "opening",
            Self::Opened => "opened",
            Self::Closing => "closing",
        }
    }
}

impl fmt::Display for CurtainState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_closed() {
        assert_eq!(CurtainState::default(), CurtainState::Closed);
    }

    #[test]
    fn transient_states() {
        assert!(CurtainState::Opening.is_transient());
        assert!(CurtainState::Closing.is_transient());
        assert!(!CurtainState::Closed.is_transient());
        assert!(!CurtainState::Opened.is_transient());

        assert!(CurtainState::Closed.is_settled());
        assert!(!CurtainState::Closing.is_settled());
    }

    #[test]
    fn settled_completes_transient_states() {
        assert_eq!(CurtainState::Opening.settled(), CurtainState::Opened);
        assert_eq!(CurtainState::Closing.settled(), CurtainState::Closed);
        assert_eq!(CurtainState::Opened.settled(), CurtainState::Opened);
        assert_eq!(CurtainState::Closed.settled(), CurtainState::Closed);
    }

    #[test]
    fn display_uses_lowercase_name() {
        assert_eq!(CurtainState::Opening.to_string(), "opening");
        assert_eq!(format!("{}", CurtainState::Closed), "closed");
    }
}
