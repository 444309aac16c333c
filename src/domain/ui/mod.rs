// SPDX-License-Identifier: MPL-2.0
//! UI domain types.
//!
//! Value objects for picker settings, independent of any presentation
//! framework.

pub mod newtypes;

pub use newtypes::{BufferCapacity, GridColumns, SettleDuration, TopInset};
