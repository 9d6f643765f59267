// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod catalog;
mod day_plan;
mod error;
mod pricing;
mod summary;
mod types;
mod validation;

#[cfg(test)]
mod tests;

pub use catalog::{
    board_types, countries, country_by_code, country_by_name, hotel_by_id, hotel_name,
    hotels_for, meal_by_id, meal_name, meals_for,
};
pub use day_plan::generate_day_plan;
pub use error::DomainError;
pub use pricing::{day_total, grand_total, hotel_price, meal_permitted, meal_price};
pub use summary::{BookingSummary, DaySummary, LineItem, format_display_date};

// Re-export public types
pub use types::{
    BoardType, BookingConfiguration, ConfigField, Country, DaySelection, Hotel,
    MAX_NUMBER_OF_DAYS, Meal, MealSlot, SelectionField, parse_iso_date,
};
pub use validation::{
    half_board_conflicts, is_day_plan_current, is_step1_valid, is_step2_valid,
    validate_number_of_days,
};
