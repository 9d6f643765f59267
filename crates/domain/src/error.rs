// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Errors that can occur during domain validation.
///
/// Unresolvable catalog references are deliberately absent from this list:
/// lookups against unknown countries, hotels or meals resolve to empty
/// results and zero prices instead of failing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Board type code is not one of `FB`, `HB` or `NB`.
    InvalidBoardType(String),
    /// Meal slot is not `lunch` or `dinner`.
    InvalidMealSlot(String),
    /// Number of days is outside the bookable range.
    InvalidNumberOfDays {
        /// The rejected value.
        value: u32,
        /// The largest accepted value.
        max: u32,
    },
    /// Date arithmetic overflow.
    DateArithmeticOverflow {
        /// Description of the operation that failed.
        operation: String,
    },
    /// Failed to parse date from string.
    DateParseError {
        /// The invalid date string.
        date_string: String,
        /// The parsing error message.
        error: String,
    },
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidBoardType(code) => {
                write!(f, "Invalid board type '{code}'. Must be one of FB, HB, NB")
            }
            Self::InvalidMealSlot(slot) => {
                write!(f, "Invalid meal slot '{slot}'. Must be lunch or dinner")
            }
            Self::InvalidNumberOfDays { value, max } => {
                write!(
                    f,
                    "Invalid number of days: {value}. Must be between 1 and {max}"
                )
            }
            Self::DateArithmeticOverflow { operation } => {
                write!(f, "Date arithmetic overflow while {operation}")
            }
            Self::DateParseError { date_string, error } => {
                write!(f, "Failed to parse date '{date_string}': {error}")
            }
        }
    }
}

impl std::error::Error for DomainError {}
