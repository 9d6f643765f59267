// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::config::ArchiveConfig;
use crate::error::PersistenceError;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Durable storage for the encoded archive.
///
/// A bridge stores exactly one payload. `persist` replaces it and
/// `restore` returns the last one persisted, or `None` if nothing has been
/// stored yet.
pub trait PersistenceBridge {
    /// Replaces the stored payload.
    ///
    /// # Errors
    ///
    /// Returns an error if the payload cannot be written.
    fn persist(&mut self, bytes: &[u8]) -> Result<(), PersistenceError>;

    /// Returns the stored payload, if any.
    ///
    /// # Errors
    ///
    /// Returns an error if storage exists but cannot be read.
    fn restore(&self) -> Result<Option<Vec<u8>>, PersistenceError>;
}

/// A bridge that keeps the payload in memory.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InMemoryBridge {
    payload: Option<Vec<u8>>,
}

impl InMemoryBridge {
    /// Creates an empty bridge.
    #[must_use]
    pub const fn new() -> Self {
        Self { payload: None }
    }

    /// Creates a bridge that already holds `payload`.
    #[must_use]
    pub const fn with_payload(payload: Vec<u8>) -> Self {
        Self {
            payload: Some(payload),
        }
    }

    /// Returns the stored payload.
    #[must_use]
    pub fn payload(&self) -> Option<&[u8]> {
        self.payload.as_deref()
    }
}

impl PersistenceBridge for InMemoryBridge {
    fn persist(&mut self, bytes: &[u8]) -> Result<(), PersistenceError> {
        self.payload = Some(bytes.to_vec());
        Ok(())
    }

    fn restore(&self) -> Result<Option<Vec<u8>>, PersistenceError> {
        Ok(self.payload.clone())
    }
}

/// A bridge that stores the payload in a single file.
///
/// Writes go to a sibling temporary file which is then renamed over the
/// archive, so a crash mid-write leaves the previous archive intact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileBridge {
    config: ArchiveConfig,
}

impl FileBridge {
    /// Creates a bridge for the configured archive file.
    ///
    /// The file is not touched until the first `persist` or `restore`.
    #[must_use]
    pub fn new(config: ArchiveConfig) -> Self {
        info!("Using booking archive at: {}", config.path().display());
        Self { config }
    }

    /// Returns the archive file path.
    #[must_use]
    pub fn path(&self) -> &Path {
        self.config.path()
    }

    fn temporary_path(&self) -> PathBuf {
        let mut name = self
            .path()
            .file_name()
            .map(std::ffi::OsStr::to_os_string)
            .unwrap_or_default();
        name.push(".tmp");
        self.path().with_file_name(name)
    }
}

fn io_error(path: &Path, source: std::io::Error) -> PersistenceError {
    PersistenceError::Io {
        path: path.to_path_buf(),
        source,
    }
}

impl PersistenceBridge for FileBridge {
    fn persist(&mut self, bytes: &[u8]) -> Result<(), PersistenceError> {
        let path: &Path = self.path();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .map_err(|e| io_error(parent, e))?;
        }

        let temporary: PathBuf = self.temporary_path();
        std::fs::write(&temporary, bytes)
            .map_err(|e| io_error(&temporary, e))?;
        std::fs::rename(&temporary, path)
            .map_err(|e| io_error(path, e))?;

        debug!("Wrote {} bytes to {}", bytes.len(), path.display());
        Ok(())
    }

    fn restore(&self) -> Result<Option<Vec<u8>>, PersistenceError> {
        let path: &Path = self.path();
        match std::fs::read(path) {
            Ok(bytes) => {
                debug!("Read {} bytes from {}", bytes.len(), path.display());
                Ok(Some(bytes))
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!("No archive at {}", path.display());
                Ok(None)
            }
            Err(e) => Err(io_error(path, e)),
        }
    }
}
