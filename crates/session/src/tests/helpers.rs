// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::BookingSession;
use luxestay::{Command, Outcome, SavedBooking};
use luxestay_domain::{BoardType, ConfigField, SelectionField};
use luxestay_persistence::PersistenceBridge;
use time::{Date, Month};

/// Fills step one for a single-day Full Board trip to France.
pub fn fill_step1<B: PersistenceBridge>(session: &mut BookingSession<B>) {
    let start: Date = Date::from_calendar_date(2026, Month::March, 5).unwrap();
    let commands: Vec<Command> = vec![
        Command::SetField(ConfigField::Citizenship(String::from("Germany"))),
        Command::SetField(ConfigField::DestinationCountry(String::from("France"))),
        Command::SetField(ConfigField::StartDate(Some(start))),
        Command::SetField(ConfigField::NumberOfDays(Some(1))),
        Command::SetField(ConfigField::BoardType(Some(BoardType::FullBoard))),
    ];
    for command in commands {
        session.dispatch(command).unwrap();
    }
}

/// Walks the session to the summary with hotel 7, fr-l1 and fr-d1 on day one.
pub fn fill_to_summary<B: PersistenceBridge>(session: &mut BookingSession<B>) {
    fill_step1(session);
    session.dispatch(Command::AdvanceToStep2).unwrap();
    for (field, value) in [
        (SelectionField::HotelId, "7"),
        (SelectionField::LunchId, "fr-l1"),
        (SelectionField::DinnerId, "fr-d1"),
    ] {
        session
            .dispatch(Command::UpdateDaySelection {
                index: 0,
                field,
                value: Some(String::from(value)),
            })
            .unwrap();
    }
    session.dispatch(Command::AdvanceToStep3).unwrap();
}

pub fn save_as<B: PersistenceBridge>(session: &mut BookingSession<B>, name: &str) -> SavedBooking {
    match session
        .dispatch(Command::SaveBooking {
            name: String::from(name),
        })
        .unwrap()
    {
        Outcome::Saved(saved) => saved,
        other => panic!("expected Saved outcome, got {other:?}"),
    }
}
