// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, read from a
//! `settings.toml` file. Settings are read-only: the picker never writes
//! them back.
//!
//! # Configuration Sections
//!
//! The configuration is organized into logical sections:
//! - `[general]` - Language
//! - `[curtain]` - Preview curtain geometry and animation
//! - `[grid]` - Thumbnail grid layout and ordering
//!
//! # Path Resolution
//!
//! The config file location can be customized for testing or portable deployments:
//! 1. Use `load_from_path()` with an explicit path
//! 2. Pass `--config-dir` or set `CURTAIN_PICKER_CONFIG_DIR`
//! 3. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use curtain_picker::config;
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (config, _warning) = config::load();
//! let inset = config.top_inset();
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::domain::ui::{GridColumns, SettleDuration, TopInset};
use crate::error::Result;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Enums
// =============================================================================

/// Order of assets in the thumbnail grid.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum SortOrder {
    /// Most recently created first.
    #[default]
    NewestFirst,
    OldestFirst,
    /// By file name, case-insensitive.
    Alphabetical,
}

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Deserialize, PartialEq, Default)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "fr").
    #[serde(default)]
    pub language: Option<String>,
}

/// Preview curtain settings.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct CurtainConfig {
    /// Panel strip left visible when opened, in logical pixels.
    #[serde(default = "default_top_inset")]
    pub top_inset: Option<f32>,

    /// Length of the eased snap to a rest position.
    #[serde(default = "default_settle_duration_ms")]
    pub settle_duration_ms: Option<u64>,
}

impl Default for CurtainConfig {
    fn default() -> Self {
        Self {
            top_inset: default_top_inset(),
            settle_duration_ms: default_settle_duration_ms(),
        }
    }
}

/// Thumbnail grid settings.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct GridConfig {
    /// Thumbnails per row.
    #[serde(default = "default_grid_columns")]
    pub columns: Option<u8>,

    /// Asset ordering.
    #[serde(default)]
    pub sort_order: Option<SortOrder>,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            columns: default_grid_columns(),
            sort_order: Some(SortOrder::default()),
        }
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Application configuration with logical sections.
#[derive(Debug, Clone, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub curtain: CurtainConfig,

    #[serde(default)]
    pub grid: GridConfig,
}

impl Config {
    /// Top inset, clamped into its valid range.
    #[must_use]
    pub fn top_inset(&self) -> TopInset {
        self.curtain
            .top_inset
            .map(TopInset::new)
            .unwrap_or_default()
    }

    #[must_use]
    pub fn settle_duration(&self) -> SettleDuration {
        self.curtain
            .settle_duration_ms
            .map(SettleDuration::from_millis)
            .unwrap_or_default()
    }

    #[must_use]
    pub fn grid_columns(&self) -> GridColumns {
        self.grid
            .columns
            .map(GridColumns::new)
            .unwrap_or_default()
    }

    #[must_use]
    pub fn sort_order(&self) -> SortOrder {
        self.grid.sort_order.unwrap_or_default()
    }
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_top_inset() -> Option<f32> {
    Some(DEFAULT_TOP_INSET)
}

fn default_settle_duration_ms() -> Option<u64> {
    Some(DEFAULT_SETTLE_DURATION_MS)
}

fn default_grid_columns() -> Option<u8> {
    Some(DEFAULT_GRID_COLUMNS)
}

// =============================================================================
// Load Functions
// =============================================================================

/// Returns the config file path with an optional directory override.
fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with the i18n key of a warning explaining what went wrong.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
///
/// A missing file is not an error: defaults apply silently.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => {
                    tracing::debug!(path = %path.display(), "loaded settings");
                    return (config, None);
                }
                Err(err) => {
                    tracing::warn!(path = %path.display(), error = %err, "settings unreadable, using defaults");
                    return (
                        Config::default(),
                        Some("notification-config-load-error".to_string()),
                    );
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::test_utils::assert_abs_diff_eq;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn default_config_uses_documented_values() {
        let config = Config::default();
        assert_eq!(config.general.language, None);
        assert_abs_diff_eq!(config.top_inset().value(), DEFAULT_TOP_INSET);
        assert_eq!(
            config.settle_duration().as_millis(),
            DEFAULT_SETTLE_DURATION_MS
        );
        assert_eq!(config.grid_columns().value(), DEFAULT_GRID_COLUMNS);
        assert_eq!(config.sort_order(), SortOrder::NewestFirst);
    }

    #[test]
    fn load_from_path_reads_all_sections() {
        let dir = tempdir().expect("failed to create temp dir");
        let path = dir.path().join(CONFIG_FILE);
        fs::write(
            &path,
            r#"
[general]
language = "fr"

[curtain]
top_inset = 44.0
settle_duration_ms = 120

[grid]
columns = 3
sort_order = "alphabetical"
"#,
        )
        .expect("write config");

        let config = load_from_path(&path).expect("config should parse");
        assert_eq!(config.general.language.as_deref(), Some("fr"));
        assert_abs_diff_eq!(config.top_inset().value(), 44.0);
        assert_eq!(config.settle_duration().as_millis(), 120);
        assert_eq!(config.grid_columns().value(), 3);
        assert_eq!(config.sort_order(), SortOrder::Alphabetical);
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let dir = tempdir().expect("failed to create temp dir");
        let path = dir.path().join(CONFIG_FILE);
        fs::write(&path, "[grid]\nsort_order = \"oldest-first\"\n").expect("write config");

        let config = load_from_path(&path).expect("config should parse");
        assert_eq!(config.sort_order(), SortOrder::OldestFirst);
        assert_eq!(config.grid_columns().value(), DEFAULT_GRID_COLUMNS);
        assert_abs_diff_eq!(config.top_inset().value(), DEFAULT_TOP_INSET);
    }

    #[test]
    fn out_of_range_values_are_clamped() {
        let dir = tempdir().expect("failed to create temp dir");
        let path = dir.path().join(CONFIG_FILE);
        fs::write(
            &path,
            "[curtain]\ntop_inset = 5000.0\nsettle_duration_ms = 99999\n[grid]\ncolumns = 0\n",
        )
        .expect("write config");

        let config = load_from_path(&path).expect("config should parse");
        assert_abs_diff_eq!(config.top_inset().value(), MAX_TOP_INSET);
        assert_eq!(
            config.settle_duration().as_millis(),
            MAX_SETTLE_DURATION_MS
        );
        assert_eq!(config.grid_columns().value(), MIN_GRID_COLUMNS);
    }

    #[test]
    fn invalid_toml_is_a_config_error() {
        let dir = tempdir().expect("failed to create temp dir");
        let path = dir.path().join(CONFIG_FILE);
        fs::write(&path, "[curtain\ntop_inset = ").expect("write config");

        let err = load_from_path(&path).expect_err("should fail");
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let dir = tempdir().expect("failed to create temp dir");
        let err = load_from_path(&dir.path().join("absent.toml")).expect_err("should fail");
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn load_with_override_without_file_returns_defaults_silently() {
        let dir = tempdir().expect("failed to create temp dir");
        let (config, warning) = load_with_override(Some(dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert!(warning.is_none());
    }

    #[test]
    fn load_with_override_reports_unreadable_file() {
        let dir = tempdir().expect("failed to create temp dir");
        fs::write(dir.path().join(CONFIG_FILE), "not = [valid").expect("write config");

        let (config, warning) = load_with_override(Some(dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert_eq!(warning.as_deref(), Some("notification-config-load-error"));
    }

    #[test]
    fn unknown_sort_order_is_rejected() {
        let dir = tempdir().expect("failed to create temp dir");
        let path = dir.path().join(CONFIG_FILE);
        fs::write(&path, "[grid]\nsort_order = \"random\"\n").expect("write config");
        assert!(load_from_path(&path).is_err());
    }
}
