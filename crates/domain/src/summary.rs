// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Read model for the summary page and document export.
//!
//! Renderers consume a `BookingSummary` instead of re-deriving names and
//! prices themselves. Everything here is built from the catalog and pricing
//! functions, so the numbers always agree with `day_total`/`grand_total`.

use crate::catalog::{hotel_name, meal_name};
use crate::pricing::{day_total, hotel_price, meal_permitted, meal_price};
use crate::types::{BookingConfiguration, DaySelection, MealSlot};
use serde::Serialize;
use time::Date;

const DISPLAY_DATE_FORMAT: &[time::format_description::FormatItem<'_>] =
    time::macros::format_description!("[month repr:short] [day padding:none], [year]");

/// Formats a date the way the booking pages show it, e.g. `Mar 5, 2026`.
#[must_use]
pub fn format_display_date(date: Date) -> String {
    date.format(DISPLAY_DATE_FORMAT)
        .unwrap_or_else(|_| date.to_string())
}

/// A named, priced item on a day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LineItem {
    /// The selected id.
    pub id: String,
    /// Display name; empty if the id does not resolve.
    pub name: String,
    /// Price; 0 if the id does not resolve.
    pub price: u32,
}

/// One day of the summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DaySummary {
    pub day: u32,
    pub date: String,
    pub hotel: Option<LineItem>,
    /// Present only when a lunch is selected and the board permits it.
    pub lunch: Option<LineItem>,
    /// Present only when a dinner is selected and the board permits it.
    pub dinner: Option<LineItem>,
    pub total: u32,
}

/// Everything a summary page or exported document shows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingSummary {
    pub citizenship: String,
    pub destination_country: String,
    pub start_date: Option<String>,
    pub number_of_days: Option<u32>,
    /// Board display name; empty when no board is chosen.
    pub board_type: String,
    pub days: Vec<DaySummary>,
    pub grand_total: u32,
}

impl BookingSummary {
    /// Builds the summary for `configuration`.
    #[must_use]
    pub fn build(configuration: &BookingConfiguration) -> Self {
        let country: &str = &configuration.destination_country;

        let days: Vec<DaySummary> = configuration
            .daily_selections
            .iter()
            .map(|day| summarize_day(day, configuration))
            .collect();
        let grand_total: u32 = days.iter().map(|d| d.total).sum();

        Self {
            citizenship: configuration.citizenship.clone(),
            destination_country: country.to_string(),
            start_date: configuration.start_date.map(format_display_date),
            number_of_days: configuration.number_of_days,
            board_type: configuration
                .board_type
                .map_or_else(String::new, |b| b.name().to_string()),
            days,
            grand_total,
        }
    }
}

fn summarize_day(day: &DaySelection, configuration: &BookingConfiguration) -> DaySummary {
    let country: &str = &configuration.destination_country;

    let hotel: Option<LineItem> = day.hotel_id.as_deref().map(|id| LineItem {
        id: id.to_string(),
        name: hotel_name(country, id).to_string(),
        price: hotel_price(country, Some(id)),
    });

    let meal = |slot: MealSlot| -> Option<LineItem> {
        if !meal_permitted(configuration.board_type, slot) {
            return None;
        }
        day.meal_id(slot).map(|id| LineItem {
            id: id.to_string(),
            name: meal_name(country, slot, id).to_string(),
            price: meal_price(country, slot, Some(id)),
        })
    };

    DaySummary {
        day: day.day,
        date: format_display_date(day.date),
        hotel,
        lunch: meal(MealSlot::Lunch),
        dinner: meal(MealSlot::Dinner),
        total: day_total(day, country, configuration.board_type),
    }
}
