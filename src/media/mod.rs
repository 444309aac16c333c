// SPDX-License-Identifier: MPL-2.0
//! Media sources for the picker.
//!
//! Only still images are listed; decoding is left to the image widget.

pub mod library;

pub use library::{Asset, Library, LibraryAccess};

use crate::config::SortOrder;
use std::path::PathBuf;

/// Scans `directory` off the UI thread.
pub async fn scan_library(directory: PathBuf, sort_order: SortOrder) -> LibraryAccess {
    Library::scan(&directory, sort_order)
}
