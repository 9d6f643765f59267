// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{
    BoardType, MealSlot, board_types, countries, country_by_code, country_by_name, hotel_by_id,
    hotel_name, hotels_for, meal_by_id, meal_name, meals_for,
};
use std::collections::HashSet;

#[test]
fn test_countries_are_unique_by_code() {
    let codes: HashSet<&str> = countries().iter().map(|c| c.code()).collect();
    assert_eq!(codes.len(), countries().len());
    assert_eq!(countries().len(), 8);
}

#[test]
fn test_country_lookup_by_code_and_name() {
    assert_eq!(country_by_code("FR").unwrap().name(), "France");
    assert_eq!(country_by_name("Japan").unwrap().code(), "JP");
    assert!(country_by_code("XX").is_none());
}

#[test]
fn test_board_types_in_display_order() {
    assert_eq!(
        board_types(),
        &[BoardType::FullBoard, BoardType::HalfBoard, BoardType::NoBoard]
    );
}

#[test]
fn test_every_country_has_offerings() {
    for country in countries() {
        assert_eq!(hotels_for(country.name()).len(), 3, "{}", country.name());
        assert_eq!(meals_for(country.name(), MealSlot::Lunch).len(), 3);
        assert_eq!(meals_for(country.name(), MealSlot::Dinner).len(), 3);
    }
}

#[test]
fn test_offerings_are_keyed_by_name_not_code() {
    assert!(hotels_for("FR").is_empty());
    assert_eq!(hotels_for("France")[0].id, "7");
}

#[test]
fn test_unknown_country_yields_empty_offerings() {
    assert!(hotels_for("Atlantis").is_empty());
    assert!(meals_for("Atlantis", MealSlot::Dinner).is_empty());
    assert!(hotel_by_id("Atlantis", "7").is_none());
}

#[test]
fn test_hotel_by_id_is_scoped_to_country() {
    assert_eq!(hotel_by_id("France", "7").unwrap().price, 580);
    assert!(hotel_by_id("Germany", "7").is_none());
}

#[test]
fn test_meal_by_id_is_scoped_to_slot() {
    assert_eq!(
        meal_by_id("France", MealSlot::Lunch, "fr-l1").unwrap().price,
        75
    );
    assert!(meal_by_id("France", MealSlot::Dinner, "fr-l1").is_none());
}

#[test]
fn test_names_fall_back_to_empty() {
    assert_eq!(hotel_name("Italy", "13"), "Venice Grand Canal");
    assert_eq!(hotel_name("Italy", "999"), "");
    assert_eq!(
        meal_name("Japan", MealSlot::Dinner, "jp-d1"),
        "Omakase Sushi Dinner"
    );
    assert_eq!(meal_name("Japan", MealSlot::Lunch, "jp-d1"), "");
}
