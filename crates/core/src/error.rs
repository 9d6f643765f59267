// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::state::Step;
use luxestay_domain::DomainError;

/// The guard that stopped a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Guard {
    /// The command is only valid from another step.
    WrongStep {
        /// The step the command requires.
        expected: Step,
        /// The step the wizard is on.
        actual: Step,
    },
    /// An initial-configuration field is missing or out of range.
    Step1Incomplete,
    /// At least one day has no hotel.
    Step2Incomplete,
    /// The trip length or start date changed after the day plan was
    /// generated.
    PlanOutdated,
    /// There is no step before the first one.
    AtFirstStep,
}

impl std::fmt::Display for Guard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::WrongStep { expected, actual } => {
                write!(f, "requires step {expected}, wizard is on step {actual}")
            }
            Self::Step1Incomplete => write!(f, "initial configuration is incomplete"),
            Self::Step2Incomplete => write!(f, "every day needs a hotel"),
            Self::PlanOutdated => write!(f, "day plan is out of date, return to step 1"),
            Self::AtFirstStep => write!(f, "already on the first step"),
        }
    }
}

/// Errors that can occur during state transitions.
///
/// A failed transition never changes state: `apply` works on a copy and
/// only returns it on success.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// A domain rule was violated.
    DomainViolation(DomainError),
    /// A transition's precondition is not met.
    ValidationBlocked {
        /// The rejected command.
        command: &'static str,
        /// The unmet precondition.
        guard: Guard,
    },
    /// A booking cannot be saved under a blank name.
    EmptyName,
    /// No saved booking has this id.
    NotFound(String),
}

impl std::fmt::Display for CoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DomainViolation(err) => write!(f, "Domain violation: {err}"),
            Self::ValidationBlocked { command, guard } => {
                write!(f, "{command} blocked: {guard}")
            }
            Self::EmptyName => write!(f, "Booking name cannot be empty"),
            Self::NotFound(id) => write!(f, "Saved booking '{id}' not found"),
        }
    }
}

impl std::error::Error for CoreError {}

impl From<DomainError> for CoreError {
    fn from(err: DomainError) -> Self {
        Self::DomainViolation(err)
    }
}
