// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Named, timestamped snapshots of booking configurations.

use crate::error::CoreError;
use crate::state::BookingSnapshot;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// A booking the user saved for later.
///
/// Saved bookings are immutable once created; they can only be removed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedBooking {
    id: String,
    name: String,
    /// Creation time in Unix milliseconds.
    timestamp: i64,
    data: BookingSnapshot,
}

impl SavedBooking {
    /// Returns the unique id.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the user-supplied name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the creation time in Unix milliseconds.
    #[must_use]
    pub const fn timestamp(&self) -> i64 {
        self.timestamp
    }

    /// Returns the creation time, if representable.
    #[must_use]
    pub fn created_at(&self) -> Option<OffsetDateTime> {
        OffsetDateTime::from_unix_timestamp_nanos(i128::from(self.timestamp) * 1_000_000)
            .ok()
    }

    /// Returns the frozen snapshot.
    #[must_use]
    pub const fn data(&self) -> &BookingSnapshot {
        &self.data
    }
}

/// Generates a saved-booking id from the creation time and a random suffix.
fn generate_booking_id(now: OffsetDateTime) -> String {
    format!(
        "booking_{}_{}",
        now.unix_timestamp_nanos(),
        rand::random::<u64>()
    )
}

fn unix_millis(now: OffsetDateTime) -> i64 {
    i64::try_from(now.unix_timestamp_nanos() / 1_000_000)
        .unwrap_or(i64::MAX)
}

/// The collection of saved bookings.
///
/// Entries are stored in insertion order; `list` presents them newest
/// first.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BookingArchive {
    bookings: Vec<SavedBooking>,
}

impl BookingArchive {
    /// Creates an empty archive.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            bookings: Vec::new(),
        }
    }

    /// Rebuilds an archive from entries in insertion order.
    #[must_use]
    pub const fn from_entries(bookings: Vec<SavedBooking>) -> Self {
        Self { bookings }
    }

    /// Saves `snapshot` under `name`, stamped with the current time.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::EmptyName` if `name` is blank after trimming.
    pub fn save(
        &mut self,
        name: &str,
        snapshot: BookingSnapshot,
    ) -> Result<SavedBooking, CoreError> {
        self.save_at(name, snapshot, OffsetDateTime::now_utc())
    }

    /// Saves `snapshot` under `name`, stamped with `now`.
    ///
    /// The name is stored trimmed. Incomplete configurations are accepted.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::EmptyName` if `name` is blank after trimming.
    pub fn save_at(
        &mut self,
        name: &str,
        snapshot: BookingSnapshot,
        now: OffsetDateTime,
    ) -> Result<SavedBooking, CoreError> {
        let name: &str = name.trim();
        if name.is_empty() {
            return Err(CoreError::EmptyName);
        }

        let mut id: String = generate_booking_id(now);
        while self.get(&id).is_some() {
            id = generate_booking_id(now);
        }

        let saved: SavedBooking = SavedBooking {
            id,
            name: name.to_string(),
            timestamp: unix_millis(now),
            data: snapshot,
        };
        self.bookings.push(saved.clone());
        Ok(saved)
    }

    /// Returns a copy of the snapshot saved under `id`.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::NotFound` if no entry has this id.
    pub fn load(&self, id: &str) -> Result<BookingSnapshot, CoreError> {
        self.get(id)
            .map(|booking| booking.data.clone())
            .ok_or_else(|| CoreError::NotFound(id.to_string()))
    }

    /// Removes the entry with `id`. Returns whether anything was removed;
    /// an unknown id is not an error.
    pub fn delete(&mut self, id: &str) -> bool {
        let before: usize = self.bookings.len();
        self.bookings.retain(|booking| booking.id != id);
        self.bookings.len() != before
    }

    /// Returns the entry with `id`.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&SavedBooking> {
        self.bookings.iter().find(|booking| booking.id == id)
    }

    /// Returns the entries, most recently created first.
    #[must_use]
    pub fn list(&self) -> Vec<&SavedBooking> {
        self.bookings.iter().rev().collect()
    }

    /// Returns the entries in insertion order.
    #[must_use]
    pub fn entries(&self) -> &[SavedBooking] {
        &self.bookings
    }

    /// Returns the number of saved bookings.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bookings.len()
    }

    /// Returns whether nothing has been saved.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bookings.is_empty()
    }
}
