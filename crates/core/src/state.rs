// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::archive::{BookingArchive, SavedBooking};
use luxestay_domain::{BookingConfiguration, is_step1_valid, is_step2_valid};
use serde::{Deserialize, Serialize};

/// A step of the booking wizard.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
#[serde(try_from = "u8", into = "u8")]
pub enum Step {
    /// Citizenship, destination, dates and board.
    #[default]
    InitialConfiguration,
    /// Hotel and meals per day.
    DailyConfiguration,
    /// Review and confirm.
    Summary,
}

impl Step {
    /// Returns the 1-based step number.
    #[must_use]
    pub const fn number(&self) -> u8 {
        match self {
            Self::InitialConfiguration => 1,
            Self::DailyConfiguration => 2,
            Self::Summary => 3,
        }
    }

    /// Returns the step before this one, if any.
    #[must_use]
    pub const fn previous(&self) -> Option<Self> {
        match self {
            Self::InitialConfiguration => None,
            Self::DailyConfiguration => Some(Self::InitialConfiguration),
            Self::Summary => Some(Self::DailyConfiguration),
        }
    }
}

impl TryFrom<u8> for Step {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Self::InitialConfiguration),
            2 => Ok(Self::DailyConfiguration),
            3 => Ok(Self::Summary),
            _ => Err(format!("invalid wizard step {value}, must be 1, 2 or 3")),
        }
    }
}

impl From<Step> for u8 {
    fn from(step: Step) -> Self {
        step.number()
    }
}

impl std::fmt::Display for Step {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.number())
    }
}

/// The configuration together with the step it was captured at.
///
/// This is what a saved booking freezes and what loading restores.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingSnapshot {
    /// The wizard step at capture time.
    pub current_step: Step,
    /// The captured configuration.
    #[serde(flatten)]
    pub configuration: BookingConfiguration,
}

/// The complete state of one booking session.
///
/// Only the archive is durable. The step, configuration and loading flag
/// live for the session.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BookingState {
    /// The wizard step being shown.
    pub current_step: Step,
    /// The booking being configured.
    pub configuration: BookingConfiguration,
    /// Set while a multi-step derivation runs; blocks duplicate submissions
    /// in the UI. Never persisted.
    pub is_loading: bool,
    /// Named snapshots saved by the user.
    pub archive: BookingArchive,
}

impl BookingState {
    /// Creates the initial state: first step, empty configuration, empty
    /// archive.
    #[must_use]
    pub const fn new() -> Self {
        Self::with_archive(BookingArchive::new())
    }

    /// Creates the initial state around a restored archive.
    #[must_use]
    pub const fn with_archive(archive: BookingArchive) -> Self {
        Self {
            current_step: Step::InitialConfiguration,
            configuration: BookingConfiguration::new(),
            is_loading: false,
            archive,
        }
    }

    /// Returns whether the initial configuration is complete.
    #[must_use]
    pub fn is_step1_valid(&self) -> bool {
        is_step1_valid(&self.configuration)
    }

    /// Returns whether every day has a hotel.
    #[must_use]
    pub fn is_step2_valid(&self) -> bool {
        is_step2_valid(&self.configuration)
    }

    /// Captures the step and configuration for archiving.
    #[must_use]
    pub fn snapshot(&self) -> BookingSnapshot {
        BookingSnapshot {
            current_step: self.current_step,
            configuration: self.configuration.clone(),
        }
    }

    /// Returns the saved bookings, most recent first.
    #[must_use]
    pub fn saved_bookings(&self) -> Vec<&SavedBooking> {
        self.archive.list()
    }
}

/// What a successful transition produced besides the new state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// State changed.
    Updated,
    /// The command was accepted but had nothing to change.
    Unchanged,
    /// The finalized configuration, for an export consumer.
    Confirmed(BookingConfiguration),
    /// A booking was archived.
    Saved(SavedBooking),
    /// A saved booking was installed as the live configuration.
    Loaded {
        /// The id that was loaded.
        id: String,
    },
    /// A saved booking was removed.
    Deleted {
        /// The id that was removed.
        id: String,
    },
}

impl Outcome {
    /// Returns whether the archive differs from before the transition.
    #[must_use]
    pub const fn archive_changed(&self) -> bool {
        matches!(self, Self::Saved(_) | Self::Deleted { .. })
    }
}

/// The result of a successful state transition.
///
/// Transitions are atomic: they either succeed completely or fail without side effects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransitionResult {
    /// The new state after the transition.
    pub new_state: BookingState,
    /// What the transition produced.
    pub outcome: Outcome,
}
