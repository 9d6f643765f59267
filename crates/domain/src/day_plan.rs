// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::types::DaySelection;
use crate::validation::validate_number_of_days;
use time::{Date, Duration};

/// Derives the day records for a trip.
///
/// Day `n` falls on `start_date + (n - 1)` days. Every selection starts
/// empty; callers replace any previous plan wholesale.
///
/// # Arguments
///
/// * `start_date` - The first day of the trip
/// * `number_of_days` - The trip length (1 to 30)
///
/// # Errors
///
/// Returns an error if:
/// - `number_of_days` is outside 1 to 30
/// - The last day would overflow the supported date range
pub fn generate_day_plan(
    start_date: Date,
    number_of_days: u32,
) -> Result<Vec<DaySelection>, DomainError> {
    validate_number_of_days(number_of_days)?;

    (1..=number_of_days)
        .map(|day| {
            let date: Date = start_date
                .checked_add(Duration::days(i64::from(day - 1)))
                .ok_or_else(|| DomainError::DateArithmeticOverflow {
                    operation: format!("computing day {day} from {start_date}"),
                })?;
            Ok(DaySelection::new(day, date))
        })
        .collect()
}
