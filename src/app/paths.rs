// SPDX-License-Identifier: MPL-2.0
//! Centralized path management for application directories.
//!
//! # Path Resolution Order
//!
//! The config directory is resolved in the following priority order:
//! 1. **Explicit override** - the `--config-dir` CLI argument, or a test path
//! 2. **Environment variable** (`CURTAIN_PICKER_CONFIG_DIR`)
//! 3. **Platform default** - via `dirs` crate, with the app name appended
//!
//! The library directory defaults to the platform picture directory, then
//! the home directory, then the working directory.

use std::path::PathBuf;

/// Application name used for directory naming.
const APP_NAME: &str = "CurtainPicker";

/// Environment variable to override the config directory.
pub const ENV_CONFIG_DIR: &str = "CURTAIN_PICKER_CONFIG_DIR";

/// Returns the application config directory path with an optional override.
///
/// Returns `None` if no override is given and the platform config directory
/// cannot be determined (rare edge case).
pub fn get_app_config_dir_with_override(override_path: Option<PathBuf>) -> Option<PathBuf> {
    resolve_dir(
        override_path,
        std::env::var(ENV_CONFIG_DIR).ok(),
        dirs::config_dir(),
    )
}

/// Returns the application config directory path.
pub fn get_app_config_dir() -> Option<PathBuf> {
    get_app_config_dir_with_override(None)
}

/// Returns the directory the picker lists when none is given on the command line.
pub fn default_library_dir() -> PathBuf {
    dirs::picture_dir()
        .or_else(dirs::home_dir)
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Applies the resolution order to already-gathered inputs.
fn resolve_dir(
    override_path: Option<PathBuf>,
    env_value: Option<String>,
    platform_dir: Option<PathBuf>,
) -> Option<PathBuf> {
    if let Some(path) = override_path {
        return Some(path);
    }

    if let Some(env_path) = env_value.filter(|value| !value.is_empty()) {
        return Some(PathBuf::from(env_path));
    }

    platform_dir.map(|mut path| {
        path.push(APP_NAME);
        path
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn override_path_takes_precedence() {
        let override_path = PathBuf::from("/custom/config/path");
        let result = resolve_dir(
            Some(override_path.clone()),
            Some("/from/env".to_string()),
            Some(PathBuf::from("/platform")),
        );
        assert_eq!(result, Some(override_path));
    }

    #[test]
    fn env_value_beats_platform_default() {
        let result = resolve_dir(
            None,
            Some("/from/env".to_string()),
            Some(PathBuf::from("/platform")),
        );
        assert_eq!(result, Some(PathBuf::from("/from/env")));
    }

    #[test]
    fn empty_env_value_is_ignored() {
        let result = resolve_dir(None, Some(String::new()), Some(PathBuf::from("/platform")));
        assert_eq!(result, Some(PathBuf::from("/platform").join(APP_NAME)));
    }

    #[test]
    fn platform_default_appends_app_name() {
        let result = resolve_dir(None, None, Some(PathBuf::from("/home/user/.config")));
        let path = result.expect("platform dir given");
        assert!(path.ends_with(APP_NAME));
    }

    #[test]
    fn no_source_yields_none() {
        assert_eq!(resolve_dir(None, None, None), None);
    }

    #[test]
    fn explicit_override_is_returned_unchanged() {
        let override_path = PathBuf::from("/tmp/picker-config");
        assert_eq!(
            get_app_config_dir_with_override(Some(override_path.clone())),
            Some(override_path)
        );
    }
}
