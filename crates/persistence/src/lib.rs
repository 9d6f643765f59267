// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Persistence boundary for saved bookings.
//!
//! Only the archive of saved bookings is durable. The wizard step, the live
//! configuration and the loading flag never cross this boundary.
//!
//! Storage is abstracted behind [`PersistenceBridge`], which moves opaque
//! bytes. The codec in this crate turns a `BookingArchive` into those bytes
//! and back, using a versioned JSON document:
//!
//! ```json
//! { "version": 1, "savedBookings": [ ... ] }
//! ```
//!
//! Two bridges are provided:
//!
//! - [`InMemoryBridge`] for tests and embedders that manage storage
//!   themselves
//! - [`FileBridge`] writing a single JSON file, located by [`ArchiveConfig`]

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)]

mod bridge;
mod codec;
mod config;
mod error;

#[cfg(test)]
mod tests;

pub use bridge::{FileBridge, InMemoryBridge, PersistenceBridge};
pub use codec::{
    ARCHIVE_FORMAT_VERSION, decode_archive, encode_archive, load_archive, save_archive,
};
pub use config::{ARCHIVE_PATH_ENV, ArchiveConfig, DEFAULT_ARCHIVE_PATH};
pub use error::PersistenceError;
