// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::helpers::{create_test_configuration, create_test_date, create_test_day};
use crate::{
    BoardType, BookingConfiguration, ConfigField, DaySelection, DomainError, MealSlot,
    SelectionField, parse_iso_date,
};

#[test]
fn test_board_type_parses_codes() {
    assert_eq!("FB".parse::<BoardType>().unwrap(), BoardType::FullBoard);
    assert_eq!("HB".parse::<BoardType>().unwrap(), BoardType::HalfBoard);
    assert_eq!("NB".parse::<BoardType>().unwrap(), BoardType::NoBoard);
}

#[test]
fn test_board_type_rejects_unknown_code() {
    let result: Result<BoardType, DomainError> = "fb".parse::<BoardType>();
    assert!(matches!(result, Err(DomainError::InvalidBoardType(code)) if code == "fb"));
}

#[test]
fn test_board_type_display_names() {
    assert_eq!(BoardType::FullBoard.name(), "Full Board");
    assert_eq!(BoardType::HalfBoard.name(), "Half Board");
    assert_eq!(BoardType::NoBoard.name(), "No Board");
    assert_eq!(BoardType::HalfBoard.to_string(), "HB");
}

#[test]
fn test_no_board_permits_no_meals() {
    assert!(!BoardType::NoBoard.permits(MealSlot::Lunch));
    assert!(!BoardType::NoBoard.permits(MealSlot::Dinner));
    assert!(BoardType::FullBoard.permits(MealSlot::Lunch));
    assert!(BoardType::HalfBoard.permits(MealSlot::Dinner));
}

#[test]
fn test_meal_slot_round_trips_through_str() {
    assert_eq!("lunch".parse::<MealSlot>().unwrap(), MealSlot::Lunch);
    assert_eq!(MealSlot::Dinner.as_str(), "dinner");
    assert!("brunch".parse::<MealSlot>().is_err());
}

#[test]
fn test_day_selection_set_replaces_only_named_field() {
    let mut day: DaySelection = create_test_day(1, Some("7"), Some("fr-l1"), None);

    day.set(SelectionField::DinnerId, Some(String::from("fr-d2")));

    assert_eq!(day.get(SelectionField::HotelId), Some("7"));
    assert_eq!(day.get(SelectionField::LunchId), Some("fr-l1"));
    assert_eq!(day.get(SelectionField::DinnerId), Some("fr-d2"));
}

#[test]
fn test_day_selection_blank_value_clears_field() {
    let mut day: DaySelection = create_test_day(1, Some("7"), None, None);

    day.set(SelectionField::HotelId, Some(String::from("   ")));

    assert!(!day.has_hotel());
}

#[test]
fn test_set_field_trims_country_names() {
    let mut configuration: BookingConfiguration = BookingConfiguration::new();

    configuration.set_field(ConfigField::DestinationCountry(String::from("  Japan ")));

    assert_eq!(configuration.destination_country, "Japan");
}

#[test]
fn test_set_field_updates_only_named_field() {
    let mut configuration: BookingConfiguration = create_test_configuration(BoardType::FullBoard);

    configuration.set_field(ConfigField::NumberOfDays(Some(5)));

    assert_eq!(configuration.number_of_days, Some(5));
    assert_eq!(configuration.destination_country, "France");
    assert_eq!(configuration.board_type, Some(BoardType::FullBoard));
}

#[test]
fn test_parse_iso_date() {
    assert_eq!(parse_iso_date("2026-03-01").unwrap(), create_test_date(1));
    assert!(matches!(
        parse_iso_date("03/01/2026"),
        Err(DomainError::DateParseError { .. })
    ));
}

#[test]
fn test_configuration_serializes_with_camel_case_and_iso_dates() {
    let mut configuration: BookingConfiguration = create_test_configuration(BoardType::HalfBoard);
    configuration.daily_selections = vec![create_test_day(1, Some("7"), None, Some("fr-d1"))];

    let json: serde_json::Value = serde_json::to_value(&configuration).unwrap();

    assert_eq!(json["destinationCountry"], "France");
    assert_eq!(json["startDate"], "2026-03-01");
    assert_eq!(json["boardType"], "HB");
    assert_eq!(json["dailySelections"][0]["date"], "2026-03-01");
    assert_eq!(json["dailySelections"][0]["hotelId"], "7");
    assert!(json["dailySelections"][0]["lunchId"].is_null());

    let restored: BookingConfiguration = serde_json::from_value(json).unwrap();
    assert_eq!(restored, configuration);
}

#[test]
fn test_empty_configuration_deserializes_from_minimal_document() {
    let json: &str = r#"{"citizenship":"","destinationCountry":""}"#;
    let configuration: BookingConfiguration = serde_json::from_str(json).unwrap();
    assert_eq!(configuration, BookingConfiguration::new());
}

#[test]
fn test_configuration_dates_use_iso_format_only() {
    let json: &str = r#"{"citizenship":"","destinationCountry":"","startDate":null}"#;
    let configuration: BookingConfiguration = serde_json::from_str(json).unwrap();
    assert!(configuration.start_date.is_none());

    let json: &str = r#"{"citizenship":"","destinationCountry":"","startDate":"03/01/2026"}"#;
    assert!(serde_json::from_str::<BookingConfiguration>(json).is_err());

    let json: &str = r#"{"day":1,"date":"2026-03-01"}"#;
    let day: DaySelection = serde_json::from_str(json).unwrap();
    assert_eq!(day.date, parse_iso_date("2026-03-01").unwrap());
}
