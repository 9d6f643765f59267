// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Environment variable naming the archive file.
pub const ARCHIVE_PATH_ENV: &str = "LUXESTAY_ARCHIVE_PATH";

/// Archive file used when nothing else is configured, relative to the
/// working directory.
pub const DEFAULT_ARCHIVE_PATH: &str = "luxestay-archive.json";

/// Location of the saved-booking archive on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveConfig {
    path: PathBuf,
}

impl ArchiveConfig {
    /// Creates a configuration for the given file.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Reads the archive path from `LUXESTAY_ARCHIVE_PATH`, falling back to
    /// `luxestay-archive.json`.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_env_value(std::env::var_os(ARCHIVE_PATH_ENV))
    }

    /// Builds the configuration from an already-read environment value.
    ///
    /// An unset or empty value selects the default path.
    #[must_use]
    pub fn from_env_value(value: Option<OsString>) -> Self {
        match value {
            Some(path) if !path.is_empty() => Self::new(path),
            _ => Self::default(),
        }
    }

    /// Returns the archive file path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for ArchiveConfig {
    fn default() -> Self {
        Self::new(DEFAULT_ARCHIVE_PATH)
    }
}
