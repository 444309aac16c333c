// SPDX-License-Identifier: MPL-2.0
//! UI newtypes.
//!
//! Type-safe wrappers for the picker's tunable values. Each one clamps on
//! construction, so layout and animation code never re-validates.

use std::time::Duration;

// =============================================================================
// Top Inset
// =============================================================================

/// Top inset bounds in logical pixels.
pub mod top_inset_bounds {
    /// Minimum inset (panel slides fully out of view).
    pub const MIN: f32 = 0.0;
    /// Maximum inset.
    pub const MAX: f32 = 200.0;
    /// Default inset.
    pub const DEFAULT: f32 = 30.0;
}

/// Height of the panel strip left visible when the curtain is opened.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TopInset(f32);

impl TopInset {
    /// Creates a new inset, clamping to the valid range.
    ///
    /// NaN falls back to the default.
    #[must_use]
    pub fn new(value: f32) -> Self {
        if value.is_nan() {
            return Self::default();
        }
        Self(value.clamp(top_inset_bounds::MIN, top_inset_bounds::MAX))
    }

    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }

    #[must_use]
    pub fn is_min(self) -> bool {
        self.0 <= top_inset_bounds::MIN
    }

    #[must_use]
    pub fn is_max(self) -> bool {
        self.0 >= top_inset_bounds::MAX
    }
}

impl Default for TopInset {
    fn default() -> Self {
        Self(top_inset_bounds::DEFAULT)
    }
}

// =============================================================================
// Settle Duration
// =============================================================================

/// Settle animation bounds in milliseconds.
pub mod settle_duration_bounds {
    /// Minimum duration; zero snaps without animating.
    pub const MIN_MS: u64 = 0;
    /// Maximum duration.
    pub const MAX_MS: u64 = 1000;
    /// Default duration.
    pub const DEFAULT_MS: u64 = 200;
}

/// Length of the eased snap to a rest position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SettleDuration(u64);

impl SettleDuration {
    /// Creates a new duration from milliseconds, clamping to valid range.
    #[must_use]
    pub fn from_millis(ms: u64) -> Self {
        Self(ms.clamp(
            settle_duration_bounds::MIN_MS,
            settle_duration_bounds::MAX_MS,
        ))
    }

    /// Returns the value in milliseconds.
    #[must_use]
    pub fn as_millis(self) -> u64 {
        self.0
    }

    #[must_use]
    pub fn as_duration(self) -> Duration {
        Duration::from_millis(self.0)
    }

    /// Returns true when settling is instantaneous.
    #[must_use]
    pub fn is_instant(self) -> bool {
        self.0 == 0
    }

    #[must_use]
    pub fn is_max(self) -> bool {
        self.0 >= settle_duration_bounds::MAX_MS
    }
}

impl Default for SettleDuration {
    fn default() -> Self {
        Self(settle_duration_bounds::DEFAULT_MS)
    }
}

// =============================================================================
// Grid Columns
// =============================================================================

/// Thumbnail grid column bounds.
pub mod grid_columns_bounds {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 8;
    pub const DEFAULT: u8 = 2;
}

/// Number of thumbnails per grid row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridColumns(u8);

impl GridColumns {
    /// Creates a new column count, clamping to valid range.
    #[must_use]
    pub fn new(value: u8) -> Self {
        Self(value.clamp(grid_columns_bounds::MIN, grid_columns_bounds::MAX))
    }

    #[must_use]
    pub fn value(self) -> u8 {
        self.0
    }

    /// Returns the count as a `usize` for chunking rows.
    #[must_use]
    pub fn as_usize(self) -> usize {
        usize::from(self.0)
    }

    /// Side length of a square cell for the given grid width.
    #[must_use]
    pub fn cell_size(self, grid_width: f32) -> f32 {
        (grid_width / f32::from(self.0)).max(0.0)
    }

    #[must_use]
    pub fn is_min(self) -> bool {
        self.0 <= grid_columns_bounds::MIN
    }

    #[must_use]
    pub fn is_max(self) -> bool {
        self.0 >= grid_columns_bounds::MAX
    }
}

impl Default for GridColumns {
    fn default() -> Self {
        Self(grid_columns_bounds::DEFAULT)
    }
}

// =============================================================================
// Buffer Capacity
// =============================================================================

/// Diagnostics buffer bounds (100 to 10000 events).
pub mod buffer_capacity_bounds {
    pub const MIN: usize = 100;
    pub const MAX: usize = 10000;
    pub const DEFAULT: usize = 1000;
}

/// Number of diagnostics events retained before the oldest are dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BufferCapacity(usize);

impl BufferCapacity {
    /// Creates a new capacity, clamping to valid range.
    #[must_use]
    pub fn new(value: usize) -> Self {
        Self(value.clamp(buffer_capacity_bounds::MIN, buffer_capacity_bounds::MAX))
    }

    #[must_use]
    pub fn value(self) -> usize {
        self.0
    }
}

impl Default for BufferCapacity {
    fn default() -> Self {
        Self(buffer_capacity_bounds::DEFAULT)
    }
}

// =============================================================================
// Tests
// =============================================================================
