// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! Follows the Elm-style "state down, messages up" pattern: components own
//! their state, emit messages, and report side effects to the application.
//!
//! - [`picker`] - The image picker screen with its curtain panel
//! - [`state`] - Reusable interaction state (grid panning)
//! - [`notifications`] - Toast notification system for user feedback
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)

pub mod design_tokens;
pub mod notifications;
pub mod picker;
pub mod state;
