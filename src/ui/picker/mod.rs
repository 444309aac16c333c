// SPDX-License-Identifier: MPL-2.0
//! Image picker screen.
//!
//! A square preview of the selected asset (the curtain) sits above a grid of
//! thumbnails. Dragging the grid drives the curtain state machine; the
//! [`presenter`] turns its outputs into the offset that is drawn.
//!
//! - [`component`] - State, messages and update logic
//! - [`presenter`] - Tracking and settle animation of the panel offset
//! - [`view`] - Layout of panel, grid and footer

pub mod component;
pub mod presenter;
pub mod view;

pub use component::{Effect, Message, State, StateConfig, ViewEnv, GRID_SCROLLABLE_ID};
pub use presenter::PanelPresenter;
