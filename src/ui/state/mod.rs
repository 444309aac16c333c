// SPDX-License-Identifier: MPL-2.0
//! UI state management modules
//!
//! State logic kept apart from the components that own it.

pub mod pan;

pub use pan::{GridViewport, PanState};
