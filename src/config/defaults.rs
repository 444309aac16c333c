// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application. The validated newtypes in
//! [`crate::domain::ui`] carry the same bounds; tests keep the two in sync.
//!
//! # Categories
//!
//! - **Curtain**: Top inset and settle animation length
//! - **Grid**: Thumbnail columns
//! - **Diagnostics**: Event buffer size

// ==========================================================================
// Curtain Defaults
// ==========================================================================

/// Panel strip left visible when the curtain is opened (logical pixels).
pub const DEFAULT_TOP_INSET: f32 = 30.0;

/// Minimum top inset.
pub const MIN_TOP_INSET: f32 = 0.0;

/// Maximum top inset.
pub const MAX_TOP_INSET: f32 = 200.0;

/// Default settle animation length in milliseconds.
pub const DEFAULT_SETTLE_DURATION_MS: u64 = 200;

/// Minimum settle duration (instant snap).
pub const MIN_SETTLE_DURATION_MS: u64 = 0;

/// Maximum settle duration.
pub const MAX_SETTLE_DURATION_MS: u64 = 1000;

// ==========================================================================
// Grid Defaults
// ==========================================================================

/// Thumbnails per grid row.
pub const DEFAULT_GRID_COLUMNS: u8 = 2;

pub const MIN_GRID_COLUMNS: u8 = 1;

pub const MAX_GRID_COLUMNS: u8 = 8;

/// Pointer travel (logical pixels) above which a press no longer counts as a click.
pub const CLICK_SLOP: f32 = 10.0;

// ==========================================================================
// Diagnostics Defaults
// ==========================================================================

/// Default number of diagnostics events kept in memory.
pub const DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY: usize = 1000;

pub const MIN_DIAGNOSTICS_BUFFER_CAPACITY: usize = 100;

pub const MAX_DIAGNOSTICS_BUFFER_CAPACITY: usize = 10000;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    // Curtain validation
    assert!(MIN_TOP_INSET >= 0.0);
    assert!(MAX_TOP_INSET > MIN_TOP_INSET);
    assert!(DEFAULT_TOP_INSET >= MIN_TOP_INSET);
    assert!(DEFAULT_TOP_INSET <= MAX_TOP_INSET);

    assert!(MAX_SETTLE_DURATION_MS > MIN_SETTLE_DURATION_MS);
    assert!(DEFAULT_SETTLE_DURATION_MS >= MIN_SETTLE_DURATION_MS);
    assert!(DEFAULT_SETTLE_DURATION_MS <= MAX_SETTLE_DURATION_MS);

    // Grid validation
    assert!(MIN_GRID_COLUMNS > 0);
    assert!(MAX_GRID_COLUMNS >= MIN_GRID_COLUMNS);
    assert!(DEFAULT_GRID_COLUMNS >= MIN_GRID_COLUMNS);
    assert!(DEFAULT_GRID_COLUMNS <= MAX_GRID_COLUMNS);
    assert!(CLICK_SLOP > 0.0);

    // Diagnostics validation
    assert!(MIN_DIAGNOSTICS_BUFFER_CAPACITY > 0);
    assert!(MAX_DIAGNOSTICS_BUFFER_CAPACITY >= MIN_DIAGNOSTICS_BUFFER_CAPACITY);
    assert!(DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY >= MIN_DIAGNOSTICS_BUFFER_CAPACITY);
    assert!(DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY <= MAX_DIAGNOSTICS_BUFFER_CAPACITY);
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ui::newtypes::{
        buffer_capacity_bounds, grid_columns_bounds, settle_duration_bounds, top_inset_bounds,
    };
    use crate::test_utils::assert_abs_diff_eq;

    #[test]
    fn curtain_defaults_match_newtype_bounds() {
        assert_abs_diff_eq!(DEFAULT_TOP_INSET, top_inset_bounds::DEFAULT);
        assert_abs_diff_eq!(MIN_TOP_INSET, top_inset_bounds::MIN);
        assert_abs_diff_eq!(MAX_TOP_INSET, top_inset_bounds::MAX);
        assert_eq!(DEFAULT_SETTLE_DURATION_MS, settle_duration_bounds::DEFAULT_MS);
        assert_eq!(MIN_SETTLE_DURATION_MS, settle_duration_bounds::MIN_MS);
        assert_eq!(MAX_SETTLE_DURATION_MS, settle_duration_bounds::MAX_MS);
    }

    #[test]
    fn grid_and_diagnostics_defaults_match_newtype_bounds() {
        assert_eq!(DEFAULT_GRID_COLUMNS, grid_columns_bounds::DEFAULT);
        assert_eq!(MIN_GRID_COLUMNS, grid_columns_bounds::MIN);
        assert_eq!(MAX_GRID_COLUMNS, grid_columns_bounds::MAX);
        assert_eq!(
            DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY,
            buffer_capacity_bounds::DEFAULT
        );
        assert_eq!(MIN_DIAGNOSTICS_BUFFER_CAPACITY, buffer_capacity_bounds::MIN);
        assert_eq!(MAX_DIAGNOSTICS_BUFFER_CAPACITY, buffer_capacity_bounds::MAX);
    }
}
