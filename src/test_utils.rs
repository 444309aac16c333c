// SPDX-License-Identifier: MPL-2.0
//! Test utilities for float comparisons and other common test helpers.
//!
//! This module re-exports the `approx` crate's assertion macros for float comparison,
//! which properly handle floating-point precision issues that `assert_eq!` cannot.

// Re-export approx macros for convenient use in tests
pub use approx::{assert_abs_diff_eq, assert_abs_diff_ne, assert_relative_eq, assert_relative_ne};

use crate::domain::curtain::Geometry;

/// Default epsilon for f32 comparisons.
/// Suitable for values that should be "exactly equal" but may have minor floating-point errors.
pub const F32_EPSILON: f32 = 1e-6;

/// Epsilon for offsets that went through an easing curve.
pub const OFFSET_EPSILON: f32 = 1e-3;

/// Layout used by the curtain walkthroughs: 30 px inset, 300 px square panel
/// at the top of the window. `closed_bottom` is 300, `opened_top_offset` -270.
pub fn scenario_geometry() -> Geometry {
    match Geometry::new(30.0, 300.0, 0.0) {
        Ok(geometry) => geometry,
        Err(err) => panic!("scenario geometry must be valid: {err}"),
    }
}
