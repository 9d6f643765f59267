// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::pricing::grand_total;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use time::Date;

/// The longest trip that can be configured, in days.
pub const MAX_NUMBER_OF_DAYS: u32 = 30;

/// Dates are entered, stored and exchanged as `YYYY-MM-DD`.
const ISO_DATE_FORMAT: &[time::format_description::FormatItem<'_>] =
    time::macros::format_description!("[year]-[month]-[day]");

time::serde::format_description!(iso_date, Date, ISO_DATE_FORMAT);

/// A country that can be chosen as citizenship or destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Country {
    name: &'static str,
    code: &'static str,
}

impl Country {
    pub(crate) const fn new(name: &'static str, code: &'static str) -> Self {
        Self { name, code }
    }

    /// Returns the display name. Offerings are keyed by this value.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Returns the two-letter country code.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        self.code
    }
}

/// The meal plan for the whole trip.
///
/// The board type decides which meal slots can be chosen on each day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BoardType {
    /// Breakfast, lunch and dinner.
    #[serde(rename = "FB")]
    FullBoard,
    /// Breakfast and one further meal.
    #[serde(rename = "HB")]
    HalfBoard,
    /// No meals.
    #[serde(rename = "NB")]
    NoBoard,
}

impl BoardType {
    /// Every board type, in display order.
    pub const ALL: [Self; 3] = [Self::FullBoard, Self::HalfBoard, Self::NoBoard];

    /// Returns the short code (`FB`, `HB`, `NB`).
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::FullBoard => "FB",
            Self::HalfBoard => "HB",
            Self::NoBoard => "NB",
        }
    }

    /// Returns the display name.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::FullBoard => "Full Board",
            Self::HalfBoard => "Half Board",
            Self::NoBoard => "No Board",
        }
    }

    /// Returns the display description.
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::FullBoard => "Breakfast, Lunch & Dinner included",
            Self::HalfBoard => "Breakfast & one meal included",
            Self::NoBoard => "No meals included",
        }
    }

    /// Returns whether a meal may be chosen for `slot` under this board.
    ///
    /// Half Board permits both slots; the one-meal rule is advisory and is
    /// reported by `half_board_conflicts` rather than enforced here.
    #[must_use]
    pub const fn permits(&self, slot: MealSlot) -> bool {
        match (self, slot) {
            (Self::FullBoard | Self::HalfBoard, MealSlot::Lunch | MealSlot::Dinner) => true,
            (Self::NoBoard, _) => false,
        }
    }
}

impl FromStr for BoardType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "FB" => Ok(Self::FullBoard),
            "HB" => Ok(Self::HalfBoard),
            "NB" => Ok(Self::NoBoard),
            _ => Err(DomainError::InvalidBoardType(s.to_string())),
        }
    }
}

impl std::fmt::Display for BoardType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// A meal slot within a day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MealSlot {
    Lunch,
    Dinner,
}

impl MealSlot {
    /// Returns the lowercase slot name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Lunch => "lunch",
            Self::Dinner => "dinner",
        }
    }
}

impl FromStr for MealSlot {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "lunch" => Ok(Self::Lunch),
            "dinner" => Ok(Self::Dinner),
            _ => Err(DomainError::InvalidMealSlot(s.to_string())),
        }
    }
}

impl std::fmt::Display for MealSlot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A hotel offered in a destination country, priced per night.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Hotel {
    /// Identifier, unique within the country's hotel list.
    pub id: &'static str,
    /// Display name.
    pub name: &'static str,
    /// Price per night in whole dollars.
    pub price: u32,
}

impl Hotel {
    pub(crate) const fn new(id: &'static str, name: &'static str, price: u32) -> Self {
        Self { id, name, price }
    }
}

/// A meal offered in a destination country for one slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Meal {
    /// Identifier, unique within the (country, slot) list.
    pub id: &'static str,
    /// Display name.
    pub name: &'static str,
    /// Price in whole dollars.
    pub price: u32,
}

impl Meal {
    pub(crate) const fn new(id: &'static str, name: &'static str, price: u32) -> Self {
        Self { id, name, price }
    }
}

/// The per-day fields a traveller chooses in the daily configuration step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SelectionField {
    HotelId,
    LunchId,
    DinnerId,
}

/// The choices made for one day of the trip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DaySelection {
    /// 1-based position within the trip.
    pub day: u32,
    /// Calendar date of this day.
    #[serde(with = "iso_date")]
    pub date: Date,
    /// Chosen hotel, if any.
    pub hotel_id: Option<String>,
    /// Chosen lunch, if any.
    pub lunch_id: Option<String>,
    /// Chosen dinner, if any.
    pub dinner_id: Option<String>,
}

impl DaySelection {
    /// Creates a day with nothing selected.
    #[must_use]
    pub const fn new(day: u32, date: Date) -> Self {
        Self {
            day,
            date,
            hotel_id: None,
            lunch_id: None,
            dinner_id: None,
        }
    }

    /// Returns the stored value of `field`.
    #[must_use]
    pub fn get(&self, field: SelectionField) -> Option<&str> {
        match field {
            SelectionField::HotelId => self.hotel_id.as_deref(),
            SelectionField::LunchId => self.lunch_id.as_deref(),
            SelectionField::DinnerId => self.dinner_id.as_deref(),
        }
    }

    /// Replaces `field`. Blank values clear the selection.
    pub fn set(&mut self, field: SelectionField, value: Option<String>) {
        let value: Option<String> = value.filter(|v| !v.trim().is_empty());
        match field {
            SelectionField::HotelId => self.hotel_id = value,
            SelectionField::LunchId => self.lunch_id = value,
            SelectionField::DinnerId => self.dinner_id = value,
        }
    }

    /// Returns whether a hotel has been chosen.
    #[must_use]
    pub const fn has_hotel(&self) -> bool {
        self.hotel_id.is_some()
    }

    /// Returns the meal id stored for `slot`, ignoring the board type.
    #[must_use]
    pub fn meal_id(&self, slot: MealSlot) -> Option<&str> {
        match slot {
            MealSlot::Lunch => self.lunch_id.as_deref(),
            MealSlot::Dinner => self.dinner_id.as_deref(),
        }
    }
}

/// A single step-one field update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigField {
    Citizenship(String),
    DestinationCountry(String),
    StartDate(Option<Date>),
    NumberOfDays(Option<u32>),
    BoardType(Option<BoardType>),
}

impl ConfigField {
    /// Returns the field name used in logs.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Citizenship(_) => "citizenship",
            Self::DestinationCountry(_) => "destinationCountry",
            Self::StartDate(_) => "startDate",
            Self::NumberOfDays(_) => "numberOfDays",
            Self::BoardType(_) => "boardType",
        }
    }
}

/// Everything the traveller has configured for one booking.
///
/// Step-one fields are optional until entered; `daily_selections` is filled
/// by the day-plan generator when the wizard advances to step two.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingConfiguration {
    /// Citizenship, by country name.
    pub citizenship: String,
    /// Destination, by country name. Offerings are looked up with this value.
    pub destination_country: String,
    /// First day of the trip.
    #[serde(default, with = "iso_date::option")]
    pub start_date: Option<Date>,
    /// Length of the trip in days.
    #[serde(default)]
    pub number_of_days: Option<u32>,
    /// Meal plan for the trip.
    #[serde(default)]
    pub board_type: Option<BoardType>,
    /// One entry per day once generated.
    #[serde(default)]
    pub daily_selections: Vec<DaySelection>,
}

impl BookingConfiguration {
    /// Creates an empty configuration.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            citizenship: String::new(),
            destination_country: String::new(),
            start_date: None,
            number_of_days: None,
            board_type: None,
            daily_selections: Vec::new(),
        }
    }

    /// Applies a single step-one field update.
    ///
    /// Text fields are stored trimmed.
    pub fn set_field(&mut self, field: ConfigField) {
        match field {
            ConfigField::Citizenship(value) => self.citizenship = value.trim().to_string(),
            ConfigField::DestinationCountry(value) => {
                self.destination_country = value.trim().to_string();
            }
            ConfigField::StartDate(value) => self.start_date = value,
            ConfigField::NumberOfDays(value) => self.number_of_days = value,
            ConfigField::BoardType(value) => self.board_type = value,
        }
    }

    /// Returns the price of the whole trip as currently selected.
    #[must_use]
    pub fn grand_total(&self) -> u32 {
        grand_total(
            &self.daily_selections,
            &self.destination_country,
            self.board_type,
        )
    }
}

/// Parses a `YYYY-MM-DD` date as entered in the start date field.
///
/// # Errors
///
/// Returns `DomainError::DateParseError` if the text is not a valid date.
pub fn parse_iso_date(text: &str) -> Result<Date, DomainError> {
    Date::parse(text.trim(), ISO_DATE_FORMAT)
        .map_err(|e| DomainError::DateParseError {
            date_string: text.to_string(),
            error: e.to_string(),
        })
}
