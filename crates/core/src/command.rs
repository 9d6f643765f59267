// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use luxestay_domain::{ConfigField, SelectionField};

/// A command represents user intent as data only.
///
/// Commands are the only way to request state changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Update one initial-configuration field.
    SetField(ConfigField),
    /// Generate the day plan and move to daily configuration.
    AdvanceToStep2,
    /// Replace one field of one day.
    UpdateDaySelection {
        /// Zero-based index into the day plan.
        index: usize,
        /// The field to replace.
        field: SelectionField,
        /// The new value. `None` or blank clears the selection.
        value: Option<String>,
    },
    /// Move from daily configuration to the summary.
    AdvanceToStep3,
    /// Return to the previous step, keeping all data.
    GoBack,
    /// Clear the configuration and return to the first step.
    /// Saved bookings are kept.
    ResetBooking,
    /// Hand the finalized configuration to the caller.
    Confirm,
    /// Raise or clear the loading flag around a long UI operation.
    SetLoading(bool),
    /// Archive the current configuration under a name.
    SaveBooking {
        /// The user-supplied label.
        name: String,
    },
    /// Replace the current configuration with a saved one.
    LoadBooking {
        /// The saved booking id.
        id: String,
    },
    /// Remove a saved booking.
    DeleteSavedBooking {
        /// The saved booking id.
        id: String,
    },
}

impl Command {
    /// Returns the command name used in logs and errors.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::SetField(_) => "SetField",
            Self::AdvanceToStep2 => "AdvanceToStep2",
            Self::UpdateDaySelection { .. } => "UpdateDaySelection",
            Self::AdvanceToStep3 => "AdvanceToStep3",
            Self::GoBack => "GoBack",
            Self::ResetBooking => "ResetBooking",
            Self::Confirm => "Confirm",
            Self::SetLoading(_) => "SetLoading",
            Self::SaveBooking { .. } => "SaveBooking",
            Self::LoadBooking { .. } => "LoadBooking",
            Self::DeleteSavedBooking { .. } => "DeleteSavedBooking",
        }
    }
}
