// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{BookingState, Command, TransitionResult, apply};
use luxestay_domain::{BoardType, ConfigField, SelectionField};
use time::{Date, Month};

pub fn create_test_start_date() -> Date {
    Date::from_calendar_date(2026, Month::March, 1).unwrap()
}

/// Applies a command that is expected to succeed and returns the new state.
pub fn apply_ok(state: &BookingState, command: Command) -> BookingState {
    let result: TransitionResult = apply(state, command).unwrap();
    result.new_state
}

/// Returns the commands filling every initial-configuration field.
pub fn create_step1_commands(number_of_days: u32, board_type: BoardType) -> Vec<Command> {
    vec![
        Command::SetField(ConfigField::Citizenship(String::from("United States"))),
        Command::SetField(ConfigField::DestinationCountry(String::from("France"))),
        Command::SetField(ConfigField::StartDate(Some(create_test_start_date()))),
        Command::SetField(ConfigField::NumberOfDays(Some(number_of_days))),
        Command::SetField(ConfigField::BoardType(Some(board_type))),
    ]
}

/// A state on step one with every field filled.
pub fn create_step1_state(number_of_days: u32, board_type: BoardType) -> BookingState {
    create_step1_commands(number_of_days, board_type)
        .into_iter()
        .fold(BookingState::new(), |state, command| {
            apply_ok(&state, command)
        })
}

/// A state on step two with a generated, empty day plan.
pub fn create_step2_state(number_of_days: u32, board_type: BoardType) -> BookingState {
    apply_ok(
        &create_step1_state(number_of_days, board_type),
        Command::AdvanceToStep2,
    )
}

pub fn select(index: usize, field: SelectionField, value: &str) -> Command {
    Command::UpdateDaySelection {
        index,
        field,
        value: Some(String::from(value)),
    }
}

/// A state on step two where every day has hotel 7 in France.
pub fn create_step2_state_with_hotels(number_of_days: u32, board_type: BoardType) -> BookingState {
    (0..number_of_days as usize).fold(
        create_step2_state(number_of_days, board_type),
        |state, index| apply_ok(&state, select(index, SelectionField::HotelId, "7")),
    )
}

/// A state on the summary step.
pub fn create_summary_state(number_of_days: u32, board_type: BoardType) -> BookingState {
    apply_ok(
        &create_step2_state_with_hotels(number_of_days, board_type),
        Command::AdvanceToStep3,
    )
}
