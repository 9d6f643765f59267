// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use luxestay::{BookingArchive, BookingSnapshot, BookingState, Command, TransitionResult, apply};
use luxestay_domain::{BoardType, ConfigField, SelectionField};
use time::{Date, Month};

fn apply_ok(state: &BookingState, command: Command) -> BookingState {
    let result: TransitionResult = apply(state, command).unwrap();
    result.new_state
}

/// A two-day France booking on the daily configuration step.
pub fn create_test_snapshot() -> BookingSnapshot {
    let start: Date = Date::from_calendar_date(2026, Month::March, 1).unwrap();
    let commands: Vec<Command> = vec![
        Command::SetField(ConfigField::Citizenship(String::from("Canada"))),
        Command::SetField(ConfigField::DestinationCountry(String::from("France"))),
        Command::SetField(ConfigField::StartDate(Some(start))),
        Command::SetField(ConfigField::NumberOfDays(Some(2))),
        Command::SetField(ConfigField::BoardType(Some(BoardType::HalfBoard))),
        Command::AdvanceToStep2,
        Command::UpdateDaySelection {
            index: 0,
            field: SelectionField::HotelId,
            value: Some(String::from("7")),
        },
        Command::UpdateDaySelection {
            index: 0,
            field: SelectionField::DinnerId,
            value: Some(String::from("fr-d2")),
        },
    ];

    commands
        .into_iter()
        .fold(BookingState::new(), |state, command| {
            apply_ok(&state, command)
        })
        .snapshot()
}

/// An archive holding one booking per name, in the given order.
pub fn create_test_archive(names: &[&str]) -> BookingArchive {
    let mut archive: BookingArchive = BookingArchive::new();
    for name in names {
        archive.save(name, create_test_snapshot()).unwrap();
    }
    archive
}
