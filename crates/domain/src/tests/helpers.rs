// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{BoardType, BookingConfiguration, DaySelection};
use time::{Date, Month};

pub fn create_test_date(day: u8) -> Date {
    Date::from_calendar_date(2026, Month::March, day).unwrap()
}

pub fn create_test_day(
    day: u32,
    hotel_id: Option<&str>,
    lunch_id: Option<&str>,
    dinner_id: Option<&str>,
) -> DaySelection {
    let mut selection: DaySelection = DaySelection::new(day, create_test_date(day as u8));
    selection.hotel_id = hotel_id.map(String::from);
    selection.lunch_id = lunch_id.map(String::from);
    selection.dinner_id = dinner_id.map(String::from);
    selection
}

/// A complete step-one configuration for a three day trip to France.
pub fn create_test_configuration(board_type: BoardType) -> BookingConfiguration {
    BookingConfiguration {
        citizenship: String::from("United States"),
        destination_country: String::from("France"),
        start_date: Some(create_test_date(1)),
        number_of_days: Some(3),
        board_type: Some(board_type),
        daily_selections: Vec::new(),
    }
}
