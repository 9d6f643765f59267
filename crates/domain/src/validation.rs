// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::types::{BoardType, BookingConfiguration, DaySelection, MAX_NUMBER_OF_DAYS};

/// Validates that a trip length is within 1 to 30 days.
///
/// # Errors
///
/// Returns `DomainError::InvalidNumberOfDays` if the value is 0 or above 30.
pub const fn validate_number_of_days(number_of_days: u32) -> Result<(), DomainError> {
    if number_of_days == 0 || number_of_days > MAX_NUMBER_OF_DAYS {
        return Err(DomainError::InvalidNumberOfDays {
            value: number_of_days,
            max: MAX_NUMBER_OF_DAYS,
        });
    }
    Ok(())
}

/// Returns whether the initial configuration step is complete.
///
/// All five fields must be present and the trip length must be in range.
#[must_use]
pub fn is_step1_valid(configuration: &BookingConfiguration) -> bool {
    !configuration.citizenship.trim().is_empty()
        && !configuration.destination_country.trim().is_empty()
        && configuration.start_date.is_some()
        && configuration
            .number_of_days
            .is_some_and(|n| validate_number_of_days(n).is_ok())
        && configuration.board_type.is_some()
}

/// Returns whether every generated day has a hotel.
///
/// Meal fields are not consulted.
#[must_use]
pub fn is_step2_valid(configuration: &BookingConfiguration) -> bool {
    configuration
        .daily_selections
        .iter()
        .all(DaySelection::has_hotel)
}

/// Returns whether the generated day plan still matches the trip length
/// and start date.
///
/// Editing either field after the plan was generated leaves the old plan in
/// place until the wizard advances from step one again.
#[must_use]
pub fn is_day_plan_current(configuration: &BookingConfiguration) -> bool {
    let days: &[DaySelection] = &configuration.daily_selections;
    let length_matches: bool = configuration
        .number_of_days
        .is_some_and(|n| usize::try_from(n).is_ok_and(|n| n == days.len()));

    length_matches
        && days
            .first()
            .is_some_and(|first| Some(first.date) == configuration.start_date)
}

/// Returns the indices of days that select both lunch and dinner under
/// Half Board.
///
/// Half Board covers one meal besides breakfast. This is guidance for the
/// user interface; no transition is blocked by it.
#[must_use]
pub fn half_board_conflicts(configuration: &BookingConfiguration) -> Vec<usize> {
    if configuration.board_type != Some(BoardType::HalfBoard) {
        return Vec::new();
    }

    configuration
        .daily_selections
        .iter()
        .enumerate()
        .filter(|(_, day)| day.lunch_id.is_some() && day.dinner_id.is_some())
        .map(|(index, _)| index)
        .collect()
}
