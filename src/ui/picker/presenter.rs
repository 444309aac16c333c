// SPDX-License-Identifier: MPL-2.0
//! Applies curtain outputs to the panel offset that is actually drawn.
//!
//! While the curtain is Opening or Closing the displayed offset follows the
//! finger exactly. Rest-state snaps, including a reversal from Opening back
//! to Closed mid-gesture, ease the panel to its rest position.

use crate::domain::curtain::CurtainOutput;
use crate::domain::ui::SettleDuration;
use std::time::Instant;

#[derive(Debug, Clone, Copy, PartialEq)]
struct Settle {
    from: f32,
    to: f32,
    started_at: Instant,
}

/// Effector for the panel's displayed offset.
#[derive(Debug, Clone)]
pub struct PanelPresenter {
    settle_duration: SettleDuration,
    displayed: f32,
    target: f32,
    settle: Option<Settle>,
}

impl PanelPresenter {
    #[must_use]
    pub fn new(settle_duration: SettleDuration) -> Self {
        Self {
            settle_duration,
            displayed: 0.0,
            target: 0.0,
            settle: None,
        }
    }

    /// Applies an output: transient states are tracked, settled states are
    /// eased towards over the settle duration.
    pub fn apply(&mut self, output: &CurtainOutput, now: Instant) {
        if output.state.is_transient() {
            self.track(output);
            return;
        }

        let target = output.panel_offset;
        if self.settle.is_some() && target == self.target {
            return;
        }

        self.target = target;
        if self.settle_duration.is_instant() || self.displayed == target {
            self.displayed = target;
            self.settle = None;
        } else {
            self.settle = Some(Settle {
                from: self.displayed,
                to: target,
                started_at: now,
            });
        }
    }

    /// Jumps to the output's offset and cancels any running settle.
    fn track(&mut self, output: &CurtainOutput) {
        self.settle = None;
        self.target = output.panel_offset;
        self.displayed = output.panel_offset;
    }

    /// Advances the settle animation. Returns whether it is still running.
    pub fn tick(&mut self, now: Instant) -> bool {
        let Some(settle) = self.settle else {
            return false;
        };

        let duration = self.settle_duration.as_duration().as_secs_f32();
        let elapsed = now.saturating_duration_since(settle.started_at).as_secs_f32();
        let progress = if duration > 0.0 {
            (elapsed / duration).min(1.0)
        } else {
            1.0
        };

        if progress >= 1.0 {
            self.displayed = settle.to;
            self.settle = None;
            return false;
        }

        self.displayed = settle.from + (settle.to - settle.from) * ease_out_cubic(progress);
        true
    }

    #[must_use]
    pub fn displayed(&self) -> f32 {
        self.displayed
    }

    #[must_use]
    pub fn target(&self) -> f32 {
        self.target
    }

    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.settle.is_some()
    }
}

impl Default for PanelPresenter {
    fn default() -> Self {
        Self::new(SettleDuration::default())
    }
}

fn ease_out_cubic(t: f32) -> f32 {
    let inv = 1.0 - t;
    1.0 - inv * inv * inv
}
