// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Mapping between the in-memory archive and its stored form.
//!
//! This is the only place that decides what is durable: the saved bookings
//! and a format version, nothing else.

use crate::bridge::PersistenceBridge;
use crate::error::PersistenceError;
use luxestay::{BookingArchive, SavedBooking};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

/// The archive document version written by this build.
pub const ARCHIVE_FORMAT_VERSION: u32 = 1;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ArchiveDocumentRef<'a> {
    version: u32,
    saved_bookings: &'a [SavedBooking],
}

#[derive(Deserialize)]
struct VersionHeader {
    version: u32,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ArchiveDocument {
    #[serde(default)]
    saved_bookings: Vec<SavedBooking>,
}

/// Encodes the saved bookings for storage.
///
/// # Errors
///
/// Returns `PersistenceError::Serialization` if encoding fails.
pub fn encode_archive(archive: &BookingArchive) -> Result<Vec<u8>, PersistenceError> {
    let document: ArchiveDocumentRef<'_> = ArchiveDocumentRef {
        version: ARCHIVE_FORMAT_VERSION,
        saved_bookings: archive.entries(),
    };
    Ok(serde_json::to_vec(&document)?)
}

/// Decodes stored bytes into an archive, preserving insertion order.
///
/// # Errors
///
/// Returns an error if:
/// - The bytes are not a JSON archive document (`PersistenceError::Serialization`)
/// - The document version is not supported (`PersistenceError::UnsupportedVersion`)
pub fn decode_archive(bytes: &[u8]) -> Result<BookingArchive, PersistenceError> {
    let header: VersionHeader = serde_json::from_slice(bytes)?;
    if header.version != ARCHIVE_FORMAT_VERSION {
        return Err(PersistenceError::UnsupportedVersion {
            found: header.version,
            supported: ARCHIVE_FORMAT_VERSION,
        });
    }

    let document: ArchiveDocument = serde_json::from_slice(bytes)?;
    Ok(BookingArchive::from_entries(document.saved_bookings))
}

/// Restores the archive through a bridge.
///
/// Nothing stored yet yields an empty archive.
///
/// # Errors
///
/// Returns an error if the bridge fails or the stored payload cannot be
/// decoded.
pub fn load_archive<B: PersistenceBridge + ?Sized>(
    bridge: &B,
) -> Result<BookingArchive, PersistenceError> {
    let Some(bytes) = bridge.restore()? else {
        info!("No saved bookings found, starting with an empty archive");
        return Ok(BookingArchive::new());
    };

    let archive: BookingArchive = decode_archive(&bytes).inspect_err(|e| {
        warn!("Stored booking archive is unreadable: {e}");
    })?;
    info!("Restored {} saved booking(s)", archive.len());
    Ok(archive)
}

/// Stores the archive through a bridge.
///
/// # Errors
///
/// Returns an error if encoding or the bridge fails.
pub fn save_archive<B: PersistenceBridge + ?Sized>(
    bridge: &mut B,
    archive: &BookingArchive,
) -> Result<(), PersistenceError> {
    let bytes: Vec<u8> = encode_archive(archive)?;
    bridge.persist(&bytes)?;
    info!("Persisted {} saved booking(s)", archive.len());
    Ok(())
}
