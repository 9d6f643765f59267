// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Static reference data: countries, board types, hotels and meals.
//!
//! Offerings are keyed by country *name*, not code. Every accessor treats
//! an unknown country or id as "nothing offered" and never fails, so that
//! pricing stays total while a booking is only partially entered.

use crate::types::{BoardType, Country, Hotel, Meal, MealSlot};

/// Offerings available in one destination country.
#[derive(Debug)]
struct CountryOfferings {
    country: &'static str,
    hotels: &'static [Hotel],
    lunch: &'static [Meal],
    dinner: &'static [Meal],
}

impl CountryOfferings {
    const fn meals(&self, slot: MealSlot) -> &'static [Meal] {
        match slot {
            MealSlot::Lunch => self.lunch,
            MealSlot::Dinner => self.dinner,
        }
    }
}

static COUNTRIES: [Country; 8] = [
    Country::new("United States", "US"),
    Country::new("United Kingdom", "UK"),
    Country::new("France", "FR"),
    Country::new("Germany", "DE"),
    Country::new("Italy", "IT"),
    Country::new("Spain", "ES"),
    Country::new("Japan", "JP"),
    Country::new("Australia", "AU"),
];

static OFFERINGS: [CountryOfferings; 8] = [
    CountryOfferings {
        country: "United States",
        hotels: &[
            Hotel::new("1", "Luxury Manhattan Suite", 450),
            Hotel::new("2", "Downtown LA Penthouse", 380),
            Hotel::new("3", "Miami Beach Resort", 320),
        ],
        lunch: &[
            Meal::new("us-l1", "NY Steakhouse Lunch", 65),
            Meal::new("us-l2", "Italian Pasta Set", 45),
            Meal::new("us-l3", "Gourmet Burger", 40),
        ],
        dinner: &[
            Meal::new("us-d1", "Premium Steakhouse Dinner", 120),
            Meal::new("us-d2", "Michelin Fine Dining", 180),
            Meal::new("us-d3", "BBQ Ribs Feast", 85),
        ],
    },
    CountryOfferings {
        country: "United Kingdom",
        hotels: &[
            Hotel::new("4", "London Kensington Palace", 520),
            Hotel::new("5", "Oxford Street Deluxe", 380),
            Hotel::new("6", "Edinburgh Royal Suite", 340),
        ],
        lunch: &[
            Meal::new("uk-l1", "Traditional Fish & Chips", 35),
            Meal::new("uk-l2", "Sunday Roast", 50),
            Meal::new("uk-l3", "High Tea Experience", 55),
        ],
        dinner: &[
            Meal::new("uk-d1", "Michelin Star Dining", 160),
            Meal::new("uk-d2", "Prime Rib Dinner", 95),
            Meal::new("uk-d3", "Welsh Lamb Feast", 105),
        ],
    },
    CountryOfferings {
        country: "France",
        hotels: &[
            Hotel::new("7", "Paris Eiffel Tower View", 580),
            Hotel::new("8", "Versailles Grand Hotel", 450),
            Hotel::new("9", "Riviera Luxury Escape", 420),
        ],
        lunch: &[
            Meal::new("fr-l1", "Coq au Vin Lunch", 75),
            Meal::new("fr-l2", "Salade Nicoise", 45),
            Meal::new("fr-l3", "Croque Monsieur", 40),
        ],
        dinner: &[
            Meal::new("fr-d1", "French Haute Cuisine", 200),
            Meal::new("fr-d2", "Beef Bourguignon", 130),
            Meal::new("fr-d3", "Duck Confit Delight", 120),
        ],
    },
    CountryOfferings {
        country: "Germany",
        hotels: &[
            Hotel::new("10", "Berlin Modern Suite", 380),
            Hotel::new("11", "Munich Bavarian Palace", 420),
            Hotel::new("12", "Frankfurt Executive Room", 340),
        ],
        lunch: &[
            Meal::new("de-l1", "Bavarian Schnitzel", 50),
            Meal::new("de-l2", "Bratwurst Special", 40),
            Meal::new("de-l3", "Pretzel & Cheese", 30),
        ],
        dinner: &[
            Meal::new("de-d1", "Traditional Sauerbraten", 95),
            Meal::new("de-d2", "Black Forest Dinner", 110),
            Meal::new("de-d3", "Pork Knuckle Feast", 100),
        ],
    },
    CountryOfferings {
        country: "Italy",
        hotels: &[
            Hotel::new("13", "Venice Grand Canal", 620),
            Hotel::new("14", "Rome Colosseum View", 520),
            Hotel::new("15", "Florence Renaissance Suite", 480),
        ],
        lunch: &[
            Meal::new("it-l1", "Pasta Carbonara", 55),
            Meal::new("it-l2", "Risotto alla Milanese", 60),
            Meal::new("it-l3", "Caprese Salad", 35),
        ],
        dinner: &[
            Meal::new("it-d1", "Truffle Pasta Dinner", 180),
            Meal::new("it-d2", "Osso Buco", 140),
            Meal::new("it-d3", "Fresh Seafood Delight", 155),
        ],
    },
    CountryOfferings {
        country: "Spain",
        hotels: &[
            Hotel::new("16", "Barcelona Sagrada Suite", 450),
            Hotel::new("17", "Madrid Royal Palace", 420),
            Hotel::new("18", "Seville Andalusian Retreat", 380),
        ],
        lunch: &[
            Meal::new("es-l1", "Paella Valenciana", 65),
            Meal::new("es-l2", "Tapas Selection", 50),
            Meal::new("es-l3", "Gazpacho & Bread", 30),
        ],
        dinner: &[
            Meal::new("es-d1", "Premium Paella Dinner", 130),
            Meal::new("es-d2", "Jamón Ibérico Feast", 150),
            Meal::new("es-d3", "Seafood Para Dinner", 140),
        ],
    },
    CountryOfferings {
        country: "Japan",
        hotels: &[
            Hotel::new("19", "Tokyo Shinjuku Luxury", 500),
            Hotel::new("20", "Kyoto Traditional Palace", 480),
            Hotel::new("21", "Osaka Modern Tower", 420),
        ],
        lunch: &[
            Meal::new("jp-l1", "Sushi Set Lunch", 70),
            Meal::new("jp-l2", "Udon Noodles", 35),
            Meal::new("jp-l3", "Bento Box Premium", 55),
        ],
        dinner: &[
            Meal::new("jp-d1", "Omakase Sushi Dinner", 250),
            Meal::new("jp-d2", "Wagyu Beef Dinner", 200),
            Meal::new("jp-d3", "Kaiseki Multi-Course", 220),
        ],
    },
    CountryOfferings {
        country: "Australia",
        hotels: &[
            Hotel::new("22", "Sydney Harbour Penthouse", 540),
            Hotel::new("23", "Melbourne Arts District", 420),
            Hotel::new("24", "Great Barrier Reef Resort", 480),
        ],
        lunch: &[
            Meal::new("au-l1", "Barramundi Lunch", 65),
            Meal::new("au-l2", "Lamb Chops", 70),
            Meal::new("au-l3", "Avocado Toast", 35),
        ],
        dinner: &[
            Meal::new("au-d1", "Premium Barramundi", 145),
            Meal::new("au-d2", "Wagyu Steak Dinner", 160),
            Meal::new("au-d3", "Seafood Platter", 155),
        ],
    },
];

fn offerings(country: &str) -> Option<&'static CountryOfferings> {
    OFFERINGS.iter().find(|o| o.country == country)
}

/// Returns every selectable country, in display order.
#[must_use]
pub fn countries() -> &'static [Country] {
    &COUNTRIES
}

/// Looks up a country by its two-letter code.
#[must_use]
pub fn country_by_code(code: &str) -> Option<&'static Country> {
    COUNTRIES.iter().find(|c| c.code() == code)
}

/// Looks up a country by its display name.
#[must_use]
pub fn country_by_name(name: &str) -> Option<&'static Country> {
    COUNTRIES.iter().find(|c| c.name() == name)
}

/// Returns every board type, in display order.
#[must_use]
pub const fn board_types() -> &'static [BoardType] {
    &BoardType::ALL
}

/// Returns the hotels offered in `country`, or an empty slice if the
/// country is unknown.
#[must_use]
pub fn hotels_for(country: &str) -> &'static [Hotel] {
    offerings(country).map(|o| o.hotels).unwrap_or_default()
}

/// Returns the meals offered in `country` for `slot`, or an empty slice if
/// the country is unknown.
#[must_use]
pub fn meals_for(country: &str, slot: MealSlot) -> &'static [Meal] {
    offerings(country)
        .map(|o| o.meals(slot))
        .unwrap_or_default()
}

/// Finds a hotel by id within `country`.
#[must_use]
pub fn hotel_by_id(country: &str, id: &str) -> Option<&'static Hotel> {
    hotels_for(country).iter().find(|h| h.id == id)
}

/// Finds a meal by id within `country` and `slot`.
#[must_use]
pub fn meal_by_id(country: &str, slot: MealSlot, id: &str) -> Option<&'static Meal> {
    meals_for(country, slot).iter().find(|m| m.id == id)
}

/// Returns the hotel's display name, or an empty string if unresolvable.
#[must_use]
pub fn hotel_name(country: &str, id: &str) -> &'static str {
    hotel_by_id(country, id).map_or("", |h| h.name)
}

/// Returns the meal's display name, or an empty string if unresolvable.
#[must_use]
pub fn meal_name(country: &str, slot: MealSlot, id: &str) -> &'static str {
    meal_by_id(country, slot, id).map_or("", |m| m.name)
}
