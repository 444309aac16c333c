// SPDX-License-Identifier: MPL-2.0
//! `curtain_picker` is an image picker built with the Iced GUI framework.
//!
//! A square preview of the selected image sits above a thumbnail grid like a
//! curtain: pulling the grid up slides the preview away, pulling it down at
//! the top brings it back. The gesture logic lives in [`domain::curtain`]
//! and has no dependency on the toolkit.

pub mod app;
pub mod config;
pub mod diagnostics;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod media;
pub mod ui;

#[cfg(test)]
pub mod test_utils;
