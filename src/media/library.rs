// SPDX-License-Identifier: MPL-2.0
//! Asset library scanning.
//!
//! A library is the flat list of supported image files of one directory,
//! sorted according to the configured [`SortOrder`]. Scanning also acts as
//! the access check: a directory that cannot be listed is reported as
//! denied instead of failing.

use crate::config::SortOrder;
use std::cmp::Ordering;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

/// Image extensions shown in the grid (lowercase).
pub const SUPPORTED_EXTENSIONS: &[&str] =
    &["png", "jpg", "jpeg", "gif", "webp", "bmp", "tiff", "ico"];

/// One image file of the library.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Asset {
    pub path: PathBuf,
    /// Creation time, or modification time on filesystems without it.
    pub created: Option<SystemTime>,
}

impl Asset {
    fn from_path(path: PathBuf) -> Self {
        let created = path
            .metadata()
            .ok()
            .and_then(|m| m.created().or_else(|_| m.modified()).ok());
        Self { path, created }
    }

    /// File name for display, empty when the path has none.
    #[must_use]
    pub fn file_name(&self) -> &str {
        self.path
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or_default()
    }
}

/// Sorted assets of a directory.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Library {
    directory: PathBuf,
    assets: Vec<Asset>,
}

/// Outcome of scanning a directory.
#[derive(Debug, Clone, PartialEq)]
pub enum LibraryAccess {
    Authorized(Library),
    /// The directory exists but cannot be listed.
    Denied(PathBuf),
    /// The path does not exist or is not a directory.
    Missing(PathBuf),
}

impl LibraryAccess {
    /// i18n key of the warning shown when the library is unavailable.
    #[must_use]
    pub fn warning_key(&self) -> Option<&'static str> {
        match self {
            LibraryAccess::Authorized(_) => None,
            LibraryAccess::Denied(_) => Some("notification-library-denied"),
            LibraryAccess::Missing(_) => Some("notification-library-missing"),
        }
    }
}

impl Library {
    /// Lists the supported images of `directory`.
    pub fn scan(directory: &Path, sort_order: SortOrder) -> LibraryAccess {
        if !directory.is_dir() {
            return LibraryAccess::Missing(directory.to_path_buf());
        }

        let entries = match std::fs::read_dir(directory) {
            Ok(entries) => entries,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                return LibraryAccess::Missing(directory.to_path_buf());
            }
            Err(err) => {
                tracing::warn!(path = %directory.display(), error = %err, "library not readable");
                return LibraryAccess::Denied(directory.to_path_buf());
            }
        };

        // Entries that vanish or fail mid-listing are skipped
        let mut assets: Vec<Asset> = entries
            .filter_map(|entry| entry.ok().map(|e| e.path()))
            .filter(|path| path.is_file() && is_supported_image(path))
            .map(Asset::from_path)
            .collect();

        sort_assets(&mut assets, sort_order);

        LibraryAccess::Authorized(Self {
            directory: directory.to_path_buf(),
            assets,
        })
    }

    #[must_use]
    pub fn directory(&self) -> &Path {
        &self.directory
    }

    #[must_use]
    pub fn assets(&self) -> &[Asset] {
        &self.assets
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Asset> {
        self.assets.get(index)
    }

    /// Asset selected right after a scan.
    #[must_use]
    pub fn first(&self) -> Option<&Asset> {
        self.assets.first()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.assets.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.assets.is_empty()
    }
}

/// Checks the extension against [`SUPPORTED_EXTENSIONS`], ignoring case.
#[must_use]
pub fn is_supported_image(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase())
        .is_some_and(|ext| SUPPORTED_EXTENSIONS.contains(&ext.as_str()))
}

fn sort_assets(assets: &mut [Asset], sort_order: SortOrder) {
    let by_name = |a: &Asset, b: &Asset| {
        a.file_name()
            .to_lowercase()
            .cmp(&b.file_name().to_lowercase())
    };
    let by_date = |a: &Asset, b: &Asset| {
        let a_time = a.created.unwrap_or(SystemTime::UNIX_EPOCH);
        let b_time = b.created.unwrap_or(SystemTime::UNIX_EPOCH);
        a_time.cmp(&b_time)
    };

    match sort_order {
        SortOrder::Alphabetical => assets.sort_by(by_name),
        SortOrder::OldestFirst => {
            assets.sort_by(|a, b| by_date(a, b).then_with(|| by_name(a, b)));
        }
        SortOrder::NewestFirst => {
            assets.sort_by(|a, b| match by_date(b, a) {
                Ordering::Equal => by_name(a, b),
                other => other,
            });
        }
    }
}
