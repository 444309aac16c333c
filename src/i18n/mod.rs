// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for the application.
//!
//! Localization uses the Fluent system with translations embedded in the
//! binary.
//!
//! # Features
//!
//! - Automatic locale detection from CLI, config, or system settings
//! - Embedded `.ftl` translation files (`en-US`, `fr`)
//! - Named arguments and plural selection
//! - Missing keys render as `MISSING: key`

pub mod fluent;
