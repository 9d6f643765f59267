// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Price derivation over the catalog.
//!
//! Prices are whole dollars summed with integer arithmetic. A missing or
//! unresolvable reference contributes zero: a day without a hotel prices as
//! free rather than failing. Whether a booking may proceed is decided by the
//! step validators, never by price.

use crate::catalog::{hotel_by_id, meal_by_id};
use crate::types::{BoardType, DaySelection, MealSlot};

/// Returns whether meals for `slot` count towards the price.
///
/// With no board chosen yet every stored meal is counted.
#[must_use]
pub fn meal_permitted(board_type: Option<BoardType>, slot: MealSlot) -> bool {
    board_type.is_none_or(|board| board.permits(slot))
}

/// Returns the nightly price of `hotel_id` in `country`, or 0.
#[must_use]
pub fn hotel_price(country: &str, hotel_id: Option<&str>) -> u32 {
    hotel_id
        .and_then(|id| hotel_by_id(country, id))
        .map_or(0, |hotel| hotel.price)
}

/// Returns the price of `meal_id` in `country` for `slot`, or 0.
#[must_use]
pub fn meal_price(country: &str, slot: MealSlot, meal_id: Option<&str>) -> u32 {
    meal_id
        .and_then(|id| meal_by_id(country, slot, id))
        .map_or(0, |meal| meal.price)
}

/// Prices a single day: hotel plus each selected meal the board permits.
#[must_use]
pub fn day_total(day: &DaySelection, country: &str, board_type: Option<BoardType>) -> u32 {
    let hotel: u32 = hotel_price(country, day.hotel_id.as_deref());

    let meals: u32 = [MealSlot::Lunch, MealSlot::Dinner]
        .into_iter()
        .filter(|slot| meal_permitted(board_type, *slot))
        .map(|slot| meal_price(country, slot, day.meal_id(slot)))
        .sum();

    hotel + meals
}

/// Prices a whole plan as the sum of its day totals.
#[must_use]
pub fn grand_total(days: &[DaySelection], country: &str, board_type: Option<BoardType>) -> u32 {
    days.iter()
        .map(|day| day_total(day, country, board_type))
        .sum()
}
