// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while storing or restoring saved bookings.
#[derive(Debug, Error)]
pub enum PersistenceError {
    /// Reading or writing the archive file failed.
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        /// The file being accessed.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: std::io::Error,
    },

    /// The archive could not be encoded, or the stored bytes are not a
    /// valid archive document.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The stored document was written by an incompatible format version.
    #[error("Unsupported archive version {found}, expected {supported}")]
    UnsupportedVersion {
        /// The version found in storage.
        found: u32,
        /// The version this build reads.
        supported: u32,
    },
}
