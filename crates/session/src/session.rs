// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::SessionError;
use luxestay::{
    BookingArchive, BookingState, Command, Outcome, SavedBooking, TransitionResult, apply,
};
use luxestay_domain::BookingSummary;
use luxestay_persistence::{PersistenceBridge, load_archive, save_archive};
use tracing::{debug, info, warn};

/// One user's booking session.
///
/// Holds the live wizard state and the bridge its saved bookings are stored
/// through. Taking `&mut self` for every command keeps transitions strictly
/// sequential.
#[derive(Debug)]
pub struct BookingSession<B: PersistenceBridge> {
    state: BookingState,
    bridge: B,
}

impl<B: PersistenceBridge> BookingSession<B> {
    /// Opens a session, restoring saved bookings from `bridge`.
    ///
    /// The wizard always starts on the first step with an empty
    /// configuration; only the archive is restored.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Persistence` if the stored archive cannot be
    /// read or decoded.
    pub fn open(bridge: B) -> Result<Self, SessionError> {
        let archive: BookingArchive = load_archive(&bridge)?;
        info!(
            "Opened booking session with {} saved booking(s)",
            archive.len()
        );

        Ok(Self {
            state: BookingState::with_archive(archive),
            bridge,
        })
    }

    /// Applies one command to the session.
    ///
    /// On success the new state is installed. If the command saved or
    /// deleted a booking the archive is persisted first; should that fail,
    /// the session keeps its previous state so memory and storage agree.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The command is rejected (`SessionError::Core`)
    /// - The archive cannot be written (`SessionError::Persistence`)
    pub fn dispatch(&mut self, command: Command) -> Result<Outcome, SessionError> {
        let command_name: &'static str = command.name();
        debug!(command = command_name, step = %self.state.current_step, "Dispatching command");

        let result: TransitionResult = apply(&self.state, command).inspect_err(|e| {
            warn!(command = command_name, "Command rejected: {e}");
        })?;

        if result.outcome.archive_changed() {
            save_archive(&mut self.bridge, &result.new_state.archive)?;
        }

        match &result.outcome {
            Outcome::Saved(saved) => info!("Saved booking '{}' as {}", saved.name(), saved.id()),
            Outcome::Loaded { id } => info!("Loaded saved booking {id}"),
            Outcome::Deleted { id } => info!("Deleted saved booking {id}"),
            Outcome::Confirmed(_) => info!("Booking confirmed"),
            Outcome::Updated | Outcome::Unchanged => {}
        }

        self.state = result.new_state;
        Ok(result.outcome)
    }

    /// Returns the live state.
    #[must_use]
    pub const fn state(&self) -> &BookingState {
        &self.state
    }

    /// Returns the summary of the live configuration.
    #[must_use]
    pub fn summary(&self) -> BookingSummary {
        BookingSummary::build(&self.state.configuration)
    }

    /// Returns the saved bookings, most recent first.
    #[must_use]
    pub fn saved_bookings(&self) -> Vec<&SavedBooking> {
        self.state.saved_bookings()
    }

    /// Returns the bridge.
    #[must_use]
    pub const fn bridge(&self) -> &B {
        &self.bridge
    }

    /// Closes the session, returning its bridge.
    #[must_use]
    pub fn into_bridge(self) -> B {
        self.bridge
    }
}
